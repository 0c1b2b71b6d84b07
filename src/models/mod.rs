pub mod classroom;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod professor;
pub mod report;
pub mod student;

pub use classroom::Classroom;
pub use course::Course;
pub use department::Department;
pub use enrollment::Enrollment;
pub use professor::Professor;
pub use report::DepartmentEnrollment;
pub use student::Student;

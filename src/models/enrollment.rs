use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{Column, ColumnKind, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Enrollment {
    #[serde(rename = "EnrollmentID")]
    #[sqlx(rename = "EnrollmentID")]
    pub enrollment_id: i64,
    #[serde(rename = "StudentID")]
    #[sqlx(rename = "StudentID")]
    pub student_id: i64,
    #[serde(rename = "CourseID")]
    #[sqlx(rename = "CourseID")]
    pub course_id: i64,
    pub grade: String,
}

impl Resource for Enrollment {
    const TABLE: &'static str = "enrollments";
    const KEY: &'static str = "EnrollmentID";
    const LABEL: &'static str = "Enrollment";
    const PATH: &'static str = "enrollments";
    const COLUMNS: &'static [Column] = &[
        Column::required("StudentID", ColumnKind::Integer),
        Column::required("CourseID", ColumnKind::Integer),
        Column::required("Grade", ColumnKind::Text),
    ];

    fn id(&self) -> i64 {
        self.enrollment_id
    }
}

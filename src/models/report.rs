use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One bar of the dashboard chart: distinct enrolled students per department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DepartmentEnrollment {
    pub department: String,
    pub student_count: i64,
}

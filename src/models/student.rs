use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{Column, ColumnKind, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Student {
    #[serde(rename = "StudentID")]
    #[sqlx(rename = "StudentID")]
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`
    pub enrollment_date: String,
    pub major: String,
}

impl Resource for Student {
    const TABLE: &'static str = "students";
    const KEY: &'static str = "StudentID";
    const LABEL: &'static str = "Student";
    const PATH: &'static str = "students";
    const COLUMNS: &'static [Column] = &[
        Column::required("FirstName", ColumnKind::Text),
        Column::required("LastName", ColumnKind::Text),
        Column::required("EnrollmentDate", ColumnKind::Date),
        Column::required("Major", ColumnKind::Text),
    ];

    fn id(&self) -> i64 {
        self.student_id
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{Column, ColumnKind, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Course {
    #[serde(rename = "CourseID")]
    #[sqlx(rename = "CourseID")]
    pub course_id: i64,
    pub course_name: String,
    pub credits: i64,
    #[serde(rename = "DepartmentID")]
    #[sqlx(rename = "DepartmentID")]
    pub department_id: i64,
}

impl Resource for Course {
    const TABLE: &'static str = "courses";
    const KEY: &'static str = "CourseID";
    const LABEL: &'static str = "Course";
    const PATH: &'static str = "courses";
    const COLUMNS: &'static [Column] = &[
        Column::required("CourseName", ColumnKind::Text),
        Column::required("Credits", ColumnKind::Integer),
        Column::required("DepartmentID", ColumnKind::Integer),
    ];

    fn id(&self) -> i64 {
        self.course_id
    }
}

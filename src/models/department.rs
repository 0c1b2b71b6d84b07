use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{Column, ColumnKind, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Department {
    #[serde(rename = "DepartmentID")]
    #[sqlx(rename = "DepartmentID")]
    pub department_id: i64,
    pub department_name: String,
}

impl Resource for Department {
    const TABLE: &'static str = "departments";
    const KEY: &'static str = "DepartmentID";
    const LABEL: &'static str = "Department";
    const PATH: &'static str = "departments";
    const COLUMNS: &'static [Column] = &[Column::required("DepartmentName", ColumnKind::Text)];

    fn id(&self) -> i64 {
        self.department_id
    }
}

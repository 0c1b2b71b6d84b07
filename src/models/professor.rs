use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{Column, ColumnKind, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Professor {
    #[serde(rename = "ProfessorID")]
    #[sqlx(rename = "ProfessorID")]
    pub professor_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`
    pub hire_date: String,
    #[serde(rename = "DepartmentID")]
    #[sqlx(rename = "DepartmentID")]
    pub department_id: i64,
}

impl Resource for Professor {
    const TABLE: &'static str = "professors";
    const KEY: &'static str = "ProfessorID";
    const LABEL: &'static str = "Professor";
    const PATH: &'static str = "professors";
    const COLUMNS: &'static [Column] = &[
        Column::required("FirstName", ColumnKind::Text),
        Column::required("LastName", ColumnKind::Text),
        Column::required("HireDate", ColumnKind::Date),
        Column::required("DepartmentID", ColumnKind::Integer),
    ];

    fn id(&self) -> i64 {
        self.professor_id
    }
}

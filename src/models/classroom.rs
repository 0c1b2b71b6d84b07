use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::{Column, ColumnKind, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Classroom {
    #[serde(rename = "ClassroomID")]
    #[sqlx(rename = "ClassroomID")]
    pub classroom_id: i64,
    pub room_number: String,
    pub building: String,
    pub capacity: i64,
    pub floor_number: Option<i64>,
    pub has_projector: bool,
    pub is_lab: bool,
    #[serde(rename = "DepartmentID")]
    #[sqlx(rename = "DepartmentID")]
    pub department_id: Option<i64>,
}

impl Resource for Classroom {
    const TABLE: &'static str = "classrooms";
    const KEY: &'static str = "ClassroomID";
    const LABEL: &'static str = "Classroom";
    const PATH: &'static str = "classrooms";
    const COLUMNS: &'static [Column] = &[
        Column::required("RoomNumber", ColumnKind::Text),
        Column::required("Building", ColumnKind::Text),
        Column::required("Capacity", ColumnKind::Integer),
        Column::optional("FloorNumber", ColumnKind::Integer),
        Column::flag("HasProjector"),
        Column::flag("IsLab"),
        Column::optional("DepartmentID", ColumnKind::Integer),
    ];

    fn id(&self) -> i64 {
        self.classroom_id
    }
}

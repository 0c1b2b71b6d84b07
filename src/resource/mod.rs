//! Generic description of a CRUD table.
//!
//! Every entity is described once through [`Resource`]: where it lives, what its key
//! is, and which columns a client may write. Request bodies are checked against that
//! allow-list before any SQL is assembled, so column names in statements only ever
//! come from these descriptors.

pub mod value;

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;

pub use value::{ColumnKind, FieldValue};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub required: bool,
    /// Whether an update may set the column to NULL.
    pub nullable: bool,
}

impl Column {
    pub const fn required(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind, required: true, nullable: false }
    }

    pub const fn optional(name: &'static str, kind: ColumnKind) -> Self {
        Self { name, kind, required: false, nullable: true }
    }

    /// Optional boolean that defaults to false and is never NULL.
    pub const fn flag(name: &'static str) -> Self {
        Self { name, kind: ColumnKind::Bool, required: false, nullable: false }
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue, AppError> {
        self.kind.coerce(raw).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid value for {}: expected {}.",
                self.name,
                self.kind.describe()
            ))
        })
    }
}

pub trait Resource:
    Serialize + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static
{
    const TABLE: &'static str;
    const KEY: &'static str;
    /// Singular, human readable name used in response messages.
    const LABEL: &'static str;
    /// URL segment, e.g. `/classrooms`.
    const PATH: &'static str;
    /// Writable columns, in insert order.
    const COLUMNS: &'static [Column];

    fn id(&self) -> i64;
}

/// Column values for an INSERT, one entry per writable column.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRow {
    values: Vec<(&'static str, FieldValue)>,
}

impl NewRow {
    pub fn parse(columns: &'static [Column], body: &Map<String, Value>) -> Result<Self, AppError> {
        let missing: Vec<&str> = columns
            .iter()
            .filter(|c| c.required && value::is_blank(body.get(c.name)))
            .map(|c| c.name)
            .collect();

        if !missing.is_empty() {
            let verb = if missing.len() == 1 { "is" } else { "are" };
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {} {} mandatory.",
                missing.join(", "),
                verb
            )));
        }

        let mut values = Vec::with_capacity(columns.len());
        for column in columns {
            let value = match body.get(column.name) {
                Some(raw) if !value::is_blank(Some(raw)) => column.coerce(raw)?,
                _ => column.kind.fallback(),
            };
            values.push((column.name, value));
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> &[(&'static str, FieldValue)] {
        &self.values
    }
}

/// Partial update: only the columns present in the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Patch {
    pub fn parse(columns: &'static [Column], body: &Map<String, Value>) -> Result<Self, AppError> {
        if body.is_empty() {
            return Err(AppError::BadRequest(
                "At least one field is required to update.".to_string(),
            ));
        }

        if let Some(unknown) = body.keys().find(|k| !columns.iter().any(|c| c.name == k.as_str())) {
            return Err(AppError::BadRequest(format!("Unknown field: {}", unknown)));
        }

        let mut fields = Vec::with_capacity(body.len());
        for column in columns {
            let Some(raw) = body.get(column.name) else {
                continue;
            };
            let value = if value::is_blank(Some(raw)) {
                if !column.nullable {
                    return Err(AppError::BadRequest(format!(
                        "{} cannot be empty.",
                        column.name
                    )));
                }
                FieldValue::Null
            } else {
                column.coerce(raw)?
            };
            fields.push((column.name, value));
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROOMS: &[Column] = &[
        Column::required("RoomNumber", ColumnKind::Text),
        Column::required("Capacity", ColumnKind::Integer),
        Column::optional("FloorNumber", ColumnKind::Integer),
        Column::flag("HasProjector"),
    ];

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn bad_request(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected a bad request, got {other:?}"),
        }
    }

    #[test]
    fn new_row_fills_optional_defaults() {
        let row = NewRow::parse(ROOMS, &object(json!({"RoomNumber": "A1", "Capacity": "40", "Extra": 1})))
            .unwrap();

        assert_eq!(
            row.values(),
            &[
                ("RoomNumber", FieldValue::Text("A1".to_string())),
                ("Capacity", FieldValue::Integer(40)),
                ("FloorNumber", FieldValue::Null),
                ("HasProjector", FieldValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn new_row_reports_every_missing_field() {
        let err = NewRow::parse(ROOMS, &object(json!({"RoomNumber": ""}))).unwrap_err();
        assert_eq!(
            bad_request(err),
            "Missing required fields: RoomNumber, Capacity are mandatory."
        );

        let err = NewRow::parse(ROOMS, &object(json!({"RoomNumber": "B2"}))).unwrap_err();
        assert_eq!(bad_request(err), "Missing required fields: Capacity is mandatory.");
    }

    #[test]
    fn new_row_rejects_uncoercible_values() {
        let err = NewRow::parse(ROOMS, &object(json!({"RoomNumber": "B2", "Capacity": "lots"})))
            .unwrap_err();
        assert_eq!(bad_request(err), "Invalid value for Capacity: expected an integer.");
    }

    #[test]
    fn patch_keeps_only_supplied_columns() {
        let patch = Patch::parse(ROOMS, &object(json!({"HasProjector": "yes", "FloorNumber": null})))
            .unwrap();

        assert_eq!(
            patch.fields(),
            &[
                ("FloorNumber", FieldValue::Null),
                ("HasProjector", FieldValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn patch_rejects_empty_and_unknown() {
        let err = Patch::parse(ROOMS, &Map::new()).unwrap_err();
        assert_eq!(bad_request(err), "At least one field is required to update.");

        let err = Patch::parse(ROOMS, &object(json!({"RoomNumber = 1; --": "x"}))).unwrap_err();
        assert_eq!(bad_request(err), "Unknown field: RoomNumber = 1; --");
    }

    #[test]
    fn patch_cannot_blank_non_nullable_column() {
        let err = Patch::parse(ROOMS, &object(json!({"Capacity": null}))).unwrap_err();
        assert_eq!(bad_request(err), "Capacity cannot be empty.");

        let err = Patch::parse(ROOMS, &object(json!({"HasProjector": null}))).unwrap_err();
        assert_eq!(bad_request(err), "HasProjector cannot be empty.");

        let patch = Patch::parse(ROOMS, &object(json!({"FloorNumber": ""}))).unwrap();
        assert_eq!(patch.fields(), &[("FloorNumber", FieldValue::Null)]);
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// Storage kind of a writable column. Drives how loosely-typed JSON input is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Integer,
    Bool,
    /// Calendar date, stored as `YYYY-MM-DD` text.
    Date,
}

/// A single column value ready to be bound into a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Bool(bool),
    Text(String),
}

const DATE_FORMAT: &str = "%Y-%m-%d";

impl ColumnKind {
    /// Value an optional column receives when a create request leaves it out.
    pub fn fallback(self) -> FieldValue {
        match self {
            ColumnKind::Bool => FieldValue::Bool(false),
            _ => FieldValue::Null,
        }
    }

    /// Browser prompts hand everything over as strings, so numbers and flags are
    /// accepted in their textual form too.
    pub fn coerce(self, raw: &Value) -> Option<FieldValue> {
        if raw.is_null() {
            return Some(FieldValue::Null);
        }

        match self {
            ColumnKind::Text => match raw {
                Value::String(s) => Some(FieldValue::Text(s.trim().to_string())),
                Value::Number(n) => Some(FieldValue::Text(n.to_string())),
                _ => None,
            },
            ColumnKind::Integer => match raw {
                Value::Number(n) => n.as_i64().map(FieldValue::Integer),
                Value::String(s) => s.trim().parse().ok().map(FieldValue::Integer),
                _ => None,
            },
            ColumnKind::Bool => match raw {
                Value::Bool(b) => Some(FieldValue::Bool(*b)),
                Value::Number(n) => match n.as_i64() {
                    Some(0) => Some(FieldValue::Bool(false)),
                    Some(1) => Some(FieldValue::Bool(true)),
                    _ => None,
                },
                Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" => Some(FieldValue::Bool(true)),
                    "false" | "0" | "no" => Some(FieldValue::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
            ColumnKind::Date => match raw {
                Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                    .ok()
                    .map(|d| FieldValue::Text(d.format(DATE_FORMAT).to_string())),
                _ => None,
            },
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ColumnKind::Text => "a string",
            ColumnKind::Integer => "an integer",
            ColumnKind::Bool => "true or false",
            ColumnKind::Date => "a date in YYYY-MM-DD format",
        }
    }
}

/// Whether a raw input counts as "not provided" for a required column.
pub fn is_blank(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

//! Server-rendered dashboard.
//!
//! The page carries one table per entity and the department report. Add, edit and
//! delete flows run in the browser (`static/dashboard.js`) against the JSON API and
//! re-fetch the affected table afterwards.

use std::collections::BTreeMap;

use askama::Template;
use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use serde_json::Value;

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::resource::{Column, Resource};
use crate::state::AppState;

const SCRIPT: &str = include_str!("../../static/dashboard.js");
const STYLESHEET: &str = include_str!("../../static/dashboard.css");

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub sections: Vec<TableSection>,
    pub report: Vec<DepartmentEnrollment>,
    pub schema_json: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSection {
    pub path: &'static str,
    pub title: String,
    pub label: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<String>,
}

/// What the browser script needs to build prompts and re-render a table.
#[derive(Debug, Serialize)]
struct SectionSchema {
    label: &'static str,
    key: &'static str,
    columns: &'static [Column],
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn table_section<R: Resource>(rows: &[R]) -> Result<TableSection, serde_json::Error> {
    let headers: Vec<&'static str> = std::iter::once(R::KEY)
        .chain(R::COLUMNS.iter().map(|c| c.name))
        .collect();

    let rows = rows
        .iter()
        .map(|row| {
            let object = serde_json::to_value(row)?;
            let cells = headers
                .iter()
                .map(|header| cell_text(object.get(*header)))
                .collect();
            Ok::<_, serde_json::Error>(TableRow { id: row.id(), cells })
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(TableSection {
        path: R::PATH,
        title: format!("{}s", R::LABEL),
        label: R::LABEL,
        headers,
        rows,
    })
}

fn schema_entry<R: Resource>(schema: &mut BTreeMap<&'static str, SectionSchema>) {
    schema.insert(
        R::PATH,
        SectionSchema {
            label: R::LABEL,
            key: R::KEY,
            columns: R::COLUMNS,
        },
    );
}

fn schema_json() -> Result<String, serde_json::Error> {
    let mut schema = BTreeMap::new();
    schema_entry::<Classroom>(&mut schema);
    schema_entry::<Course>(&mut schema);
    schema_entry::<Department>(&mut schema);
    schema_entry::<Enrollment>(&mut schema);
    schema_entry::<Student>(&mut schema);
    schema_entry::<Professor>(&mut schema);
    serde_json::to_string(&schema)
}

async fn load_section<R: Resource>(state: &AppState) -> Result<TableSection, AppError> {
    let rows = repository::fetch_all::<R>(&state.db).await?;
    Ok(table_section(&rows)?)
}

pub async fn render_dashboard(state: &AppState) -> Result<String, AppError> {
    let sections = vec![
        load_section::<Classroom>(state).await?,
        load_section::<Course>(state).await?,
        load_section::<Department>(state).await?,
        load_section::<Enrollment>(state).await?,
        load_section::<Student>(state).await?,
        load_section::<Professor>(state).await?,
    ];
    let report = repository::department_enrollment_counts(&state.db)
        .await
        .map_err(AppError::Report)?;
    let schema_json = schema_json()?;

    let template = DashboardTemplate {
        sections,
        report,
        schema_json,
    };
    Ok(template.render()?)
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(render_dashboard(&state).await?))
}

pub async fn script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT)
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_header_order() {
        let rooms = vec![Classroom {
            classroom_id: 3,
            room_number: "B-12".to_string(),
            building: "Main".to_string(),
            capacity: 40,
            floor_number: None,
            has_projector: true,
            is_lab: false,
            department_id: Some(1),
        }];

        let section = table_section(&rooms).unwrap();
        assert_eq!(section.path, "classrooms");
        assert_eq!(section.title, "Classrooms");
        assert_eq!(section.headers[0], "ClassroomID");
        assert_eq!(
            section.rows,
            vec![TableRow {
                id: 3,
                cells: vec![
                    "3".to_string(),
                    "B-12".to_string(),
                    "Main".to_string(),
                    "40".to_string(),
                    String::new(),
                    "true".to_string(),
                    "false".to_string(),
                    "1".to_string(),
                ],
            }]
        );
    }

    #[test]
    fn schema_lists_every_section() {
        let schema: Value = serde_json::from_str(&schema_json().unwrap()).unwrap();
        for path in [
            "classrooms",
            "courses",
            "departments",
            "enrollments",
            "students",
            "professors",
        ] {
            assert!(schema.get(path).is_some(), "missing {path}");
        }
        assert_eq!(schema["courses"]["key"], "CourseID");
        assert_eq!(schema["professors"]["columns"][2]["kind"], "date");
        assert_eq!(schema["classrooms"]["columns"][3]["required"], false);
    }
}

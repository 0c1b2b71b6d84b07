use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::api::extract::{IdPath, JsonBody};
use crate::db::repository;
use crate::error::AppError;
use crate::resource::{NewRow, Patch, Resource};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// `/{path}` for list and create, `/{path}/{id}` for update and delete.
pub fn routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::PATH);
    let member = format!("/{}/{{id}}", R::PATH);

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&member, put(update::<R>).delete(delete::<R>))
}

async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError> {
    let rows = repository::fetch_all::<R>(&state.db).await?;
    Ok(Json(rows))
}

async fn create<R: Resource>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let row = NewRow::parse(R::COLUMNS, &body)?;
    let id = repository::insert::<R>(&state.db, &row).await?;
    info!(table = R::TABLE, id, "row created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: format!("{} added successfully", R::LABEL),
            id,
        }),
    ))
}

async fn update<R: Resource>(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Json<Message>, AppError> {
    let patch = Patch::parse(R::COLUMNS, &body)?;
    if !repository::update::<R>(&state.db, id, &patch).await? {
        return Err(AppError::NotFound(R::LABEL));
    }
    info!(table = R::TABLE, id, fields = patch.fields().len(), "row updated");

    Ok(Json(Message {
        message: format!("{} updated successfully", R::LABEL),
    }))
}

async fn delete<R: Resource>(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<Message>, AppError> {
    if !repository::delete::<R>(&state.db, id).await? {
        return Err(AppError::NotFound(R::LABEL));
    }
    info!(table = R::TABLE, id, "row deleted");

    Ok(Json(Message {
        message: format!("{} deleted successfully", R::LABEL),
    }))
}

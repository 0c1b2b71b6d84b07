pub mod crud;
pub mod extract;

use std::time::Duration;

use axum::Json;
use axum::http::{Method, header::CONTENT_TYPE};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::repository;
use crate::error::AppError;
use crate::frontend;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(frontend::dashboard))
        .route("/assets/dashboard.js", get(frontend::script))
        .route("/assets/dashboard.css", get(frontend::stylesheet))
        .route("/health", get(health))
        .route("/api/students", get(department_report))
        .merge(crud::routes::<Classroom>())
        .merge(crud::routes::<Course>())
        .merge(crud::routes::<Department>())
        .merge(crud::routes::<Enrollment>())
        .merge(crud::routes::<Student>())
        .merge(crud::routes::<Professor>())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn department_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentEnrollment>>, AppError> {
    let rows = repository::department_enrollment_counts(&state.db)
        .await
        .map_err(AppError::Report)?;
    Ok(Json(rows))
}

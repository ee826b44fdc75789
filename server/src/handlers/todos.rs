use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use docket_core::TodoRecord;
use tracing::info;

use crate::error::HttpError;
use crate::AppState;

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoRecord>> {
    Json(state.store.list_all())
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoRecord>, HttpError> {
    Ok(Json(state.store.find_by_id(&id)?))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoRecord>, HttpError> {
    let todo = state.store.toggle_completed(&id)?;
    info!(id = %todo.id, completed = todo.completed, "toggled todo");
    Ok(Json(todo))
}

pub async fn add_todo(
    State(state): State<AppState>,
    Json(todo): Json<TodoRecord>,
) -> (StatusCode, Json<TodoRecord>) {
    info!(id = %todo.id, "adding todo");
    state.store.append(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

use crate::{dto::StatusDto, state::AppState};
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.tracker.snapshot().await;
    Json(StatusDto::from(snapshot.as_deref())).into_response()
}

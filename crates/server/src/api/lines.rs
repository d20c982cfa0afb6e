use crate::{dto::LineDto, state::AppState};
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn lines(State(state): State<Arc<AppState>>) -> Response {
    let lines: Vec<_> = state.catalog.lines().iter().map(LineDto::from).collect();
    Json(lines).into_response()
}

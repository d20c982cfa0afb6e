use crate::{dto::TrackingDto, state::AppState};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use railsync::itinerary::Itinerary;
use std::sync::Arc;
use tracing::warn;

pub async fn track(
    State(state): State<Arc<AppState>>,
    Json(itinerary): Json<Itinerary>,
) -> Result<Response, StatusCode> {
    if itinerary.legs.is_empty() {
        warn!("Refusing to track an itinerary without legs");
        return Err(StatusCode::BAD_REQUEST);
    }
    let tracked = state.tracker.track(itinerary).await;
    Ok(Json(TrackingDto::from(&tracked)).into_response())
}

pub async fn untrack(State(state): State<Arc<AppState>>) -> StatusCode {
    state.tracker.stop().await;
    StatusCode::NO_CONTENT
}

pub async fn tracking(State(state): State<Arc<AppState>>) -> Response {
    let tracked = state.tracker.tracked().await;
    Json(TrackingDto::from(&tracked)).into_response()
}

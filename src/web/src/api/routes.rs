use crate::LineupAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router<LineupAppData> {
    Router::new()
        .route("/api/{sport}/state", get(super::api_state_action))
        .route("/api/{sport}/actions", post(super::api_dispatch_action))
}

use crate::LineupAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn routes() -> Router<LineupAppData> {
    Router::new()
        .route("/football", get(super::football_get_action))
        .route(
            "/football/formation/{formation}",
            post(super::football_formation_action),
        )
}

use crate::LineupAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LineupAppData> {
    Router::new().route("/", get(super::landing_get_action))
}

use crate::LineupAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<LineupAppData> {
    Router::new().route("/cricket", get(super::cricket_get_action))
}

use crate::LineupAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<LineupAppData> {
    Router::new()
        .route(
            "/{sport}/slots/{slot_id}/select",
            post(super::builder_select_action),
        )
        .route(
            "/{sport}/results/{index}/assign",
            post(super::builder_assign_action),
        )
        .route("/{sport}/query", post(super::builder_query_action))
        .route("/{sport}/reset", post(super::builder_reset_action))
}

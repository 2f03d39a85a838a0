use crate::api::api_routes;
use crate::builder::builder_routes;
use crate::common::default_handler::default_handler;
use crate::cricket::cricket_routes;
use crate::football::football_routes;
use crate::landing::landing_routes;
use crate::LineupAppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LineupAppData> {
        Router::<LineupAppData>::new()
            .merge(landing_routes())
            .merge(cricket_routes())
            .merge(football_routes())
            .merge(builder_routes())
            .merge(api_routes())
            .fallback(default_handler)
    }
}

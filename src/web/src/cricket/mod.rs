pub mod routes;

use crate::common::default_handler::ASSETS_VERSION;
use crate::views::{self, SearchPanel, SlotView};
use crate::LineupAppData;
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Router;
use lineup::Sport;

pub fn cricket_routes() -> Router<LineupAppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "cricket/index.html")]
pub struct CricketTemplate {
    pub assets_version: &'static str,
    pub title: String,
    pub sport: &'static str,
    pub panel: SearchPanel,
    pub slots: Vec<SlotView>,
}

pub async fn cricket_get_action(State(state): State<LineupAppData>) -> impl IntoResponse {
    let snapshot = state.session(Sport::Cricket).snapshot().await;

    CricketTemplate {
        assets_version: ASSETS_VERSION,
        title: "Cricket XI".to_string(),
        sport: Sport::Cricket.slug(),
        panel: SearchPanel::new(&snapshot, state.show_search_errors),
        slots: views::slot_views(&snapshot),
    }
}

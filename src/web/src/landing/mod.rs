pub mod routes;

use crate::common::default_handler::ASSETS_VERSION;
use crate::LineupAppData;
use askama::Template;
use axum::response::IntoResponse;
use axum::Router;
use lineup::Sport;

pub fn landing_routes() -> Router<LineupAppData> {
    routes::routes()
}

pub struct LandingChoice {
    pub title: &'static str,
    pub url: String,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "landing/index.html")]
pub struct LandingTemplate {
    pub assets_version: &'static str,
    pub title: String,
    pub choices: Vec<LandingChoice>,
}

pub async fn landing_get_action() -> impl IntoResponse {
    LandingTemplate {
        assets_version: ASSETS_VERSION,
        title: "Lineup Builder".to_string(),
        choices: Sport::all()
            .into_iter()
            .map(|sport| LandingChoice {
                title: sport.display_name(),
                url: format!("/{}", sport.slug()),
            })
            .collect(),
    }
}

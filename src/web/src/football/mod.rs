pub mod routes;

use crate::common::default_handler::ASSETS_VERSION;
use crate::views::{self, FormationButton, SearchPanel, SlotView};
use crate::{ApiError, ApiResult, LineupAppData};
use askama::Template;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::Router;
use lineup::{FormationType, ScreenAction, Sport};
use serde::Deserialize;

pub fn football_routes() -> Router<LineupAppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "football/index.html")]
pub struct FootballTemplate {
    pub assets_version: &'static str,
    pub title: String,
    pub sport: &'static str,
    pub formation_name: &'static str,
    pub formations: Vec<FormationButton>,
    pub panel: SearchPanel,
    pub slots: Vec<SlotView>,
}

pub async fn football_get_action(State(state): State<LineupAppData>) -> impl IntoResponse {
    let snapshot = state.session(Sport::Football).snapshot().await;
    let formation = snapshot.formation.unwrap_or_default();

    FootballTemplate {
        assets_version: ASSETS_VERSION,
        title: "Football XI".to_string(),
        sport: Sport::Football.slug(),
        formation_name: formation.display_name(),
        formations: views::formation_buttons(snapshot.formation),
        panel: SearchPanel::new(&snapshot, state.show_search_errors),
        slots: views::slot_views(&snapshot),
    }
}

#[derive(Deserialize)]
pub struct FootballFormationRequest {
    formation: String,
}

pub async fn football_formation_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<FootballFormationRequest>,
) -> ApiResult<impl IntoResponse> {
    let formation = parse_formation(&route_params.formation)?;

    state
        .session(Sport::Football)
        .dispatch(ScreenAction::SwitchFormation(formation))
        .await?;

    Ok(Redirect::to("/football"))
}

pub fn parse_formation(name: &str) -> ApiResult<FormationType> {
    FormationType::from_name(name)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown formation '{}'", name)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app_data, body_text, get, post_form, send};
    use axum::http::{header, StatusCode};
    use lineup::FormationType;

    #[tokio::test]
    async fn renders_the_default_formation() {
        let html = body_text(send(&app_data(), get("/football")).await).await;

        assert_eq!(html.matches(">Empty<").count(), 11);
        assert!(html.contains("left: 50%; top: 12%"));
        assert!(html.contains("Select a position first"));
        assert!(html.contains(r#"data-formation="4-3-3" data-active="true""#));
    }

    #[tokio::test]
    async fn switching_formation_redirects_back() {
        let data = app_data();

        let response = send(&data, post_form("/football/formation/4-4-2", "")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/football");
        assert_eq!(
            data.football.snapshot().await.formation,
            Some(FormationType::T442)
        );

        let html = body_text(send(&data, get("/football")).await).await;
        assert!(html.contains("left: 42%; top: 12%"));
    }

    #[tokio::test]
    async fn unknown_formation_is_rejected() {
        let data = app_data();

        let response = send(&data, post_form("/football/formation/5-3-2", "")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            data.football.snapshot().await.formation,
            Some(FormationType::T433)
        );
    }
}

//! Form endpoints shared by both builder screens. Each one applies a single
//! screen action and sends the browser back to the screen.

pub mod routes;

use crate::{ApiError, ApiResult, LineupAppData};
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::Router;
use lineup::{ScreenAction, Sport};
use serde::Deserialize;

pub fn builder_routes() -> Router<LineupAppData> {
    routes::routes()
}

pub fn parse_sport(slug: &str) -> ApiResult<Sport> {
    Sport::from_slug(slug).ok_or_else(|| ApiError::NotFound(format!("Unknown screen '{}'", slug)))
}

async fn apply(state: &LineupAppData, sport: Sport, action: ScreenAction) -> ApiResult<Redirect> {
    state.session(sport).dispatch(action).await?;

    Ok(Redirect::to(&format!("/{}", sport.slug())))
}

#[derive(Deserialize)]
pub struct BuilderSelectRequest {
    sport: String,
    slot_id: u32,
}

pub async fn builder_select_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<BuilderSelectRequest>,
) -> ApiResult<impl IntoResponse> {
    let sport = parse_sport(&route_params.sport)?;

    apply(&state, sport, ScreenAction::SelectSlot(route_params.slot_id)).await
}

#[derive(Deserialize)]
pub struct BuilderAssignRequest {
    sport: String,
    index: usize,
}

pub async fn builder_assign_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<BuilderAssignRequest>,
) -> ApiResult<impl IntoResponse> {
    let sport = parse_sport(&route_params.sport)?;

    apply(&state, sport, ScreenAction::AssignResult(route_params.index)).await
}

#[derive(Deserialize)]
pub struct BuilderSportRequest {
    sport: String,
}

#[derive(Deserialize)]
pub struct BuilderQueryForm {
    #[serde(default)]
    q: String,
}

pub async fn builder_query_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<BuilderSportRequest>,
    Form(form): Form<BuilderQueryForm>,
) -> ApiResult<impl IntoResponse> {
    let sport = parse_sport(&route_params.sport)?;

    apply(&state, sport, ScreenAction::SetQuery(form.q)).await
}

pub async fn builder_reset_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<BuilderSportRequest>,
) -> ApiResult<impl IntoResponse> {
    let sport = parse_sport(&route_params.sport)?;

    apply(&state, sport, ScreenAction::Reset).await
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app_data, post_form, send};
    use axum::http::{header, StatusCode};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn select_search_and_assign_through_forms() {
        let data = app_data();

        let response = send(&data, post_form("/cricket/slots/3/select", "")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/cricket");

        send(&data, post_form("/cricket/query", "q=Kohli")).await;
        tokio::time::sleep(Duration::from_millis(600)).await;

        let snapshot = data.cricket.snapshot().await;
        assert_eq!(snapshot.results.len(), 2);

        let response = send(&data, post_form("/cricket/results/0/assign", "")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let snapshot = data.cricket.snapshot().await;
        assert_eq!(snapshot.slots[2].name, "Kohli One");
        assert_eq!(snapshot.slots[2].team.as_deref(), Some("First XI"));
        assert_eq!(snapshot.active_slot, None);
        assert_eq!(snapshot.query, "");
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test]
    async fn typing_without_selection_is_rejected() {
        let data = app_data();

        let response = send(&data, post_form("/football/query", "q=Salah")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(data.football.snapshot().await.query, "");
    }

    #[tokio::test]
    async fn unknown_screen_or_slot_is_not_found() {
        let data = app_data();

        let response = send(&data, post_form("/hockey/slots/1/select", "")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&data, post_form("/cricket/slots/12/select", "")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reset_clears_the_screen() {
        let data = app_data();
        send(&data, post_form("/football/slots/11/select", "")).await;

        let response = send(&data, post_form("/football/reset", "")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(data.football.snapshot().await.active_slot, None);
    }
}

pub mod routes;

use crate::builder::parse_sport;
use crate::football::parse_formation;
use crate::{ApiResult, LineupAppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Json, Router};
use lineup::{ScreenAction, SlotId};
use serde::Deserialize;

pub fn api_routes() -> Router<LineupAppData> {
    routes::routes()
}

#[derive(Deserialize)]
pub struct ApiSportRequest {
    sport: String,
}

pub async fn api_state_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<ApiSportRequest>,
) -> ApiResult<impl IntoResponse> {
    let sport = parse_sport(&route_params.sport)?;

    Ok(Json(state.session(sport).snapshot().await))
}

/// JSON form of [`ScreenAction`] accepted by the page script.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    SelectSlot { slot_id: SlotId },
    SetQuery { query: String },
    AssignResult { index: usize },
    SwitchFormation { formation: String },
    Reset,
}

impl ActionRequest {
    fn into_action(self) -> ApiResult<ScreenAction> {
        Ok(match self {
            ActionRequest::SelectSlot { slot_id } => ScreenAction::SelectSlot(slot_id),
            ActionRequest::SetQuery { query } => ScreenAction::SetQuery(query),
            ActionRequest::AssignResult { index } => ScreenAction::AssignResult(index),
            ActionRequest::SwitchFormation { formation } => {
                ScreenAction::SwitchFormation(parse_formation(&formation)?)
            }
            ActionRequest::Reset => ScreenAction::Reset,
        })
    }
}

pub async fn api_dispatch_action(
    State(state): State<LineupAppData>,
    Path(route_params): Path<ApiSportRequest>,
    Json(request): Json<ActionRequest>,
) -> ApiResult<impl IntoResponse> {
    let sport = parse_sport(&route_params.sport)?;
    let action = request.into_action()?;

    let snapshot = state.session(sport).dispatch(action).await?;

    Ok(Json(snapshot))
}

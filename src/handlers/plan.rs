use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, SessionId},
    names,
    rejections::AppError,
    session::{NewPriority, View},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::ACTION_PLAN_URL, get(action_plan_page))
        .route("/priority/{number}/toggle", post(toggle_priority))
        .route(names::ADD_PRIORITY_URL, post(add_priority))
}

#[derive(Deserialize)]
struct AddPriorityBody {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    expected_result: String,
}

async fn action_plan_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::ActionPlan)
}

async fn toggle_priority(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
    Path(number): Path<u32>,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| {
        session.toggle_priority(number)
    })
}

async fn add_priority(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
    Json(body): Json<AddPriorityBody>,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| {
        session.add_priority(NewPriority {
            title: body.title,
            description: body.description,
            expected_result: body.expected_result,
        })
    })
}

use axum::{
    extract::State,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, SessionId},
    names,
    rejections::AppError,
    session::View,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::MINI_COURSE_URL, get(mini_course_page))
        .route(names::CLARITY_CALL_URL, get(clarity_call_page))
        .route(names::BOOK_CALL_URL, post(book_call))
        .route(names::CALENDAR_URL, get(calendar_page))
        .route(names::RETREAT_URL, get(retreat_page))
}

#[derive(Deserialize)]
struct BookCallBody {
    name: String,
    email: String,
    #[serde(default)]
    coach: String,
    #[serde(default)]
    challenge: String,
}

async fn mini_course_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::MiniCourse)
}

async fn clarity_call_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::ClarityCall)
}

/// The booking itself is handled by the coaching team out of band; the
/// request is only logged here before moving to the confirmation page.
async fn book_call(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
    Json(body): Json<BookCallBody>,
) -> Result<Response, AppError> {
    tracing::info!(
        name = %body.name,
        email = %body.email,
        coach = %body.coach,
        challenge_len = body.challenge.len(),
        "clarity call booking requested"
    );
    super::navigate(&state, token, is_htmx, View::Calendar)
}

async fn calendar_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::Calendar)
}

async fn retreat_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::Retreat)
}

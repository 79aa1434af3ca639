use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::{
    extractors::{IsHtmx, SessionId},
    names,
    rejections::{AppError, ResultExt},
    report,
    session::View,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::REPORT_URL, get(report_page))
        .route(names::EXPORT_REPORT_URL, get(export_report))
        .route(names::RETAKE_URL, post(retake))
}

async fn report_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::Report)
}

/// Plain-text projection of the current plan, for copying or saving.
/// Strictly read-only.
async fn export_report(
    State(state): State<AppState>,
    SessionId(token): SessionId,
) -> Result<Response, AppError> {
    let (token, _created) = state.sessions.resolve(token);

    let text = state
        .sessions
        .with_session(&token, |session| {
            session.report.as_ref().map(report::to_plain_text)
        })
        .reject("session disappeared")?
        .reject_input("no report to export")?;

    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response())
}

/// Throw the whole plan away and start over from the dashboard.
async fn retake(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| session.retake())
}

pub mod dashboard;
pub mod pages;
pub mod plan;
pub mod quiz;
pub mod report;
pub mod tasks;

use axum::http::{header::SET_COOKIE, HeaderMap};
use axum::response::{IntoResponse, Response};

use crate::{
    names,
    rejections::{AppError, ResultExt},
    session::{Session, View},
    utils, views, AppState,
};

/// Set-Cookie header for a freshly minted session; empty otherwise.
pub(crate) fn session_headers(token: &str, created: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if created {
        headers.insert(
            SET_COOKIE,
            utils::cookie(names::SESSION_COOKIE_NAME, token)
                .parse()
                .unwrap(),
        );
    }
    headers
}

/// Resolve the session, run a mutation against it, and respond with
/// whatever view the session ends up on. Most handlers are a one-line
/// call into this.
pub(crate) fn update(
    state: &AppState,
    token: Option<String>,
    is_htmx: bool,
    f: impl FnOnce(&mut Session),
) -> Result<Response, AppError> {
    let (token, created) = state.sessions.resolve(token);
    let (title, body, report_ready) = state
        .sessions
        .with_session(&token, |session| {
            f(session);
            let (title, body) = views::active(session);
            (title, body, session.report.is_some())
        })
        .reject("session disappeared")?;

    Ok((
        session_headers(&token, created),
        views::render(is_htmx, &title, body, report_ready),
    )
        .into_response())
}

/// Navigate to a view (subject to the report guard) and render the result.
pub(crate) fn navigate(
    state: &AppState,
    token: Option<String>,
    is_htmx: bool,
    view: View,
) -> Result<Response, AppError> {
    update(state, token, is_htmx, |session| session.navigate(view))
}

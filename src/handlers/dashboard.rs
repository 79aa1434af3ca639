use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use rand::Rng;

use crate::{
    catalog,
    extractors::{IsHtmx, SessionId},
    names,
    rejections::{AppError, ResultExt},
    session::View,
    views, AppState,
};

use super::quiz as quiz_handlers;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::DASHBOARD_URL, get(dashboard_page))
        .route(names::START_QUIZ_URL, post(start_quiz))
        .route(names::DEMO_RUN_URL, post(demo_run))
}

async fn dashboard_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::Dashboard)
}

async fn start_quiz(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| session.start_quiz())
}

/// Dev shortcut from the intro page: fill every question with a random
/// middling rating and submit immediately.
async fn demo_run(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    let (token, created) = state.sessions.resolve(token);

    let (generation, answers, title, body) = state
        .sessions
        .with_session(&token, |session| {
            session.start_quiz();
            let mut rng = rand::thread_rng();
            for section in catalog::sections() {
                for question in &section.questions {
                    session.set_answer(&question.id, rng.gen_range(2..=4));
                }
            }
            let generation = session.begin_generation();
            let answers = session.answers.clone();
            let (title, body) = views::active(session);
            (generation, answers, title, body)
        })
        .reject("session disappeared")?;

    tracing::info!("demo run: auto-filled answers, starting generation");
    quiz_handlers::spawn_generation(&state, token.clone(), generation, answers);

    Ok((
        super::session_headers(&token, created),
        views::render(is_htmx, &title, body, false),
    )
        .into_response())
}

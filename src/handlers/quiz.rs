use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    catalog,
    extractors::{IsHtmx, SessionId},
    models::Answers,
    names,
    rejections::{AppError, ResultExt},
    session::View,
    views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(quiz_page))
        .route(names::SUBMIT_ANSWER_URL, post(submit_answer))
        .route(names::SUBMIT_QUIZ_URL, post(submit_quiz))
        .route(names::GENERATING_URL, get(generating))
}

/// Deserialize a value that may be either a JSON number or a string
/// containing a number. HTML forms via htmx json-enc always send values
/// as strings.
fn deserialize_string_or_u8<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = u8;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<u8, E> {
            u8::try_from(v).map_err(E::custom)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<u8, E> {
            u8::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<u8, E> {
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

#[derive(Deserialize)]
struct SectionQuery {
    #[serde(default)]
    section: Option<usize>,
}

#[derive(Deserialize)]
struct SubmitAnswerBody {
    question_id: String,
    #[serde(deserialize_with = "deserialize_string_or_u8")]
    rating: u8,
}

async fn quiz_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
    Query(query): Query<SectionQuery>,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| {
        if let Some(idx) = query.section {
            session.section_idx = idx.min(catalog::sections().len() - 1);
        }
        session.navigate(View::Quiz);
    })
}

/// Record one Likert rating. Responds with just the progress fragment;
/// the radio row itself already reflects the choice client-side.
async fn submit_answer(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    Json(body): Json<SubmitAnswerBody>,
) -> Result<Response, AppError> {
    let (token, created) = state.sessions.resolve(token);

    let (accepted, answered) = state
        .sessions
        .with_session(&token, |session| {
            let accepted = session.set_answer(&body.question_id, body.rating);
            (accepted, session.completion_count())
        })
        .reject("session disappeared")?;

    if !accepted {
        tracing::warn!(rating = body.rating, "rejected out-of-range rating");
        return Err(AppError::Input("rating out of range"));
    }

    Ok((
        super::session_headers(&token, created),
        quiz_views::progress(answered, catalog::total_questions()),
    )
        .into_response())
}

enum SubmitOutcome {
    /// Not all questions answered: back to the quiz with a message, and no
    /// generation call is made.
    Incomplete(Markup),
    Started {
        generation: u64,
        answers: Answers,
        title: String,
        body: Markup,
    },
}

async fn submit_quiz(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    let (token, created) = state.sessions.resolve(token);

    let outcome = state
        .sessions
        .with_session(&token, |session| {
            if !session.is_complete() {
                tracing::info!(
                    answered = session.completion_count(),
                    total = catalog::total_questions(),
                    "submission blocked: quiz incomplete"
                );
                session.navigate(View::Quiz);
                return SubmitOutcome::Incomplete(quiz_views::quiz(
                    session,
                    quiz_views::Notice::Incomplete,
                ));
            }

            let generation = session.begin_generation();
            let answers = session.answers.clone();
            let (title, body) = views::active(session);
            SubmitOutcome::Started {
                generation,
                answers,
                title,
                body,
            }
        })
        .reject("session disappeared")?;

    let headers = super::session_headers(&token, created);
    match outcome {
        SubmitOutcome::Incomplete(body) => {
            let title = rust_i18n::t!("title.quiz").into_owned();
            Ok((headers, views::render(is_htmx, &title, body, false)).into_response())
        }
        SubmitOutcome::Started {
            generation,
            answers,
            title,
            body,
        } => {
            spawn_generation(&state, token.clone(), generation, answers);
            Ok((headers, views::render(is_htmx, &title, body, false)).into_response())
        }
    }
}

/// Poll target for the loading screen: re-render whatever view the
/// session is on now. Once generation resolves, this returns the report
/// (or the quiz with an error) and the poller disappears with the swap.
async fn generating(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |_| {})
}

/// Fire the generation call in the background. The session moves on as
/// soon as the result lands; a stale generation token means the user
/// retook or resubmitted in the meantime and the result is dropped.
pub(crate) fn spawn_generation(
    state: &AppState,
    token: String,
    generation: u64,
    answers: Answers,
) {
    let sessions = state.sessions.clone();
    let gemini = state.gemini.clone();

    tokio::spawn(async move {
        let outcome = match gemini.generate_report(&answers).await {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::error!("report generation failed: {e}");
                Err(())
            }
        };
        sessions.with_session(&token, |session| {
            session.resolve_generation(generation, outcome)
        });
    });
}

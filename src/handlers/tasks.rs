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
    report::{Cadence, TaskCategory},
    session::{NewTask, View},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::DAILY_TASKS_URL, get(daily_tasks_page))
        .route("/task/{index}/toggle", post(toggle_task))
        .route(names::ADD_TASK_URL, post(add_task))
}

#[derive(Deserialize)]
struct AddTaskBody {
    title: String,
    #[serde(default)]
    description: String,
    category: TaskCategory,
    cadence: Cadence,
}

async fn daily_tasks_page(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Response, AppError> {
    super::navigate(&state, token, is_htmx, View::DailyTasks)
}

async fn toggle_task(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
    Path(index): Path<usize>,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| session.toggle_task(index))
}

async fn add_task(
    State(state): State<AppState>,
    SessionId(token): SessionId,
    IsHtmx(is_htmx): IsHtmx,
    Json(body): Json<AddTaskBody>,
) -> Result<Response, AppError> {
    super::update(&state, token, is_htmx, |session| {
        session.add_task(NewTask {
            title: body.title,
            description: body.description,
            category: body.category,
            cadence: body.cadence,
        })
    })
}

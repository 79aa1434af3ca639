use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::html;

use crate::views;

/// Handler-level failures. Everything a handler can't recover from becomes
/// one of these; the message is a static description for the log, not the
/// user.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
            AppError::Input(_) => (StatusCode::BAD_REQUEST, "INPUT_ERROR"),
        };

        let page = views::page(
            "Error",
            html! {
                h1 { (message) }
            },
        );

        (code, page).into_response()
    }
}

/// Convert fallible values into `AppError`, logging the underlying cause.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.ok_or_else(|| {
            tracing::error!("{msg}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.ok_or_else(|| {
            tracing::warn!("{msg}");
            AppError::Input(msg)
        })
    }
}

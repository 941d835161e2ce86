// src/error.rs
use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::message::ChatReply;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("OPENAI_API_KEY is not set")]
    MissingCredential,

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

// Failures stay on HTTP 200; the caller reads the `error` field.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Json(ChatReply::Error {
            error: self.to_string(),
        })
        .into_response()
    }
}

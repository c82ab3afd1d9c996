use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

/// Uniform response body: `{ "error": bool, "content": T }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub error: bool,
    pub content: T,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(content: T) -> Self {
        Self {
            error: false,
            content,
        }
    }

    pub fn respond(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl Envelope<Message> {
    pub fn success(message: impl Into<String>) -> Self {
        Self::ok(Message {
            message: message.into(),
        })
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            content: Message {
                message: message.into(),
            },
        }
    }
}

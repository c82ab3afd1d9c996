use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Response};

use crate::modules::streams::core::ports::StoreError;
use crate::shared::http::envelope::Envelope;

pub fn status_for(error: &StoreError) -> StatusCode {
    match error {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::ImmutableField => StatusCode::BAD_REQUEST,
        StoreError::Io(_) | StoreError::Malformed(_) | StoreError::Backend(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Error envelope carrying the store error's message, with its mapped status.
pub fn store_error_response(error: StoreError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, "stream store failure");
    }
    Envelope::failure(error.to_string()).respond(status)
}

pub fn rejection_response(rejection: JsonRejection) -> Response {
    Envelope::failure(rejection.body_text()).respond(StatusCode::UNPROCESSABLE_ENTITY)
}

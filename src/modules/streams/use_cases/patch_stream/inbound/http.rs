use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::streams::adapters::inbound::http::{rejection_response, store_error_response};
use crate::modules::streams::core::stream::{StreamPatch, StreamQuery};
use crate::shared::http::envelope::Envelope;
use crate::shell::state::AppState;

/// Merges the body into the stream with this id. Answers 200 whether or not it exists.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StreamPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(update) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.store.patch(StreamQuery::by_id(id), update).await {
        Ok(_) => Envelope::success("Stream updated").respond(StatusCode::OK),
        Err(e) => store_error_response(e),
    }
}

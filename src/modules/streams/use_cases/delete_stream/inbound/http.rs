use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::streams::adapters::inbound::http::store_error_response;
use crate::modules::streams::core::stream::StreamRef;
use crate::shared::http::envelope::Envelope;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.delete(StreamRef::Id(&id)).await {
        Ok(()) => Envelope::success("Stream deleted").respond(StatusCode::OK),
        Err(e) => store_error_response(e),
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::streams::adapters::inbound::http::store_error_response;
use crate::shared::http::envelope::Envelope;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.find(&id).await {
        Ok(Some(stream)) => Envelope::ok(stream).respond(StatusCode::OK),
        Ok(None) => Envelope::failure("Could not find stream").respond(StatusCode::NOT_FOUND),
        Err(e) => store_error_response(e),
    }
}

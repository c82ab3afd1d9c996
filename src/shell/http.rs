use std::path::Path;

use axum::{
    Extension, Router,
    routing::{any, get},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::streams::use_cases::delete_stream::inbound::http as delete_http;
use crate::modules::streams::use_cases::get_stream::inbound::http as get_http;
use crate::modules::streams::use_cases::patch_stream::inbound::http as patch_http;
use crate::shell::diagnostics;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

/// Prefixes the stream API is mounted under.
pub const API_PREFIXES: [&str; 2] = ["/api", "/v1"];

pub fn api_router() -> Router<AppState> {
    Router::new().route("/", any(diagnostics::handle)).route(
        "/streams/{id}",
        get(get_http::handle)
            .put(patch_http::handle)
            .post(patch_http::handle)
            .delete(delete_http::handle),
    )
}

/// Full application: both API prefixes, GraphQL, and static files for everything else.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let schema = graphql::schema(state.clone());

    let mut app = Router::new();
    for prefix in API_PREFIXES {
        // A nested "/" only answers the bare prefix.
        app = app
            .nest(prefix, api_router())
            .route(&format!("{prefix}/"), any(diagnostics::handle));
    }

    app.route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .fallback_service(ServeDir::new(static_dir))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Composition root for the streams service.
//
// - Read config from the environment once, in main.
// - Open the file backed store and share it through AppState.
// - Wire the HTTP and GraphQL routers.

pub mod config;
pub mod diagnostics;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;

use crate::modules::streams::core::ports::StreamStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StreamStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StreamStore>) -> Self {
        Self { store }
    }
}

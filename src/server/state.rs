use std::sync::Arc;

use crate::agent::AgentRunner;

/// Shared, read-only state handed to every request handler.
///
/// Holds only the agent runner; no state survives a request.
#[derive(Clone)]
pub struct AppState {
    pub runner: Arc<dyn AgentRunner>,
}

impl AppState {
    pub fn new(runner: Arc<dyn AgentRunner>) -> Self {
        Self { runner }
    }
}

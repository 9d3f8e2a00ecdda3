//! Application state wiring the agent client into the HTTP layer.
//!
//! `AppState` pins the `AgentClient` to whatever provider was built at
//! startup; handlers only see the fragment-stream capability. Tests
//! construct the same state with scripted providers.

use std::sync::Arc;

use lectern_core::agent::client::AgentClient;
use lectern_core::llm::provider::LlmProvider;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<AgentClient>,
}

impl AppState {
    /// Build the state around a provider and its model configuration.
    pub fn new(provider: Arc<dyn LlmProvider>, model: String, max_output_tokens: u32) -> Self {
        Self {
            agent: Arc::new(AgentClient::new(provider, model, max_output_tokens)),
        }
    }
}

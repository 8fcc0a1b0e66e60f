use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Initialized once at startup and read-only for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Generation collaborator behind a trait object so tests can stub it.
    pub llm: Arc<dyn TextGenerator>,
}

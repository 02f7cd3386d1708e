use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after startup — submissions share no mutable
/// state with each other. The rest of the configuration is consumed in `main`
/// before the server binds.
#[derive(Clone)]
pub struct AppState {
    /// The configured model client. Trait object so tests can script it.
    pub llm: Arc<dyn TextGenerator>,
}

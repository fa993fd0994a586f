use std::sync::Arc;

use crate::content::template::PromptTemplate;
use crate::llm_client::GenerationModel;

/// Shared application state injected into route handlers via Axum extractors.
/// Built once in `main`, immutable for the life of the process; requests get
/// cheap clones and never mutate it.
#[derive(Clone)]
pub struct AppState {
    /// External generation model. Production: `AnthropicClient`.
    pub model: Arc<dyn GenerationModel>,
    /// Prompt configuration with trusted slots pre-filled at startup.
    pub prompt: PromptTemplate,
}

//! Prompt rendering — an immutable template built once at startup.

use crate::content::models::ProductRequest;
use crate::content::prompts::{
    FORMAT_INSTRUCTIONS, GENERATION_SYSTEM, PRODUCT_INSTRUCTIONS, PROMPT_TEMPLATE,
};

/// Immutable prompt configuration, constructed once at process start and
/// reused for every request.
///
/// The trusted slots (`{instructions}`, `{format_instructions}`) are filled
/// at construction, so by the time request text is substituted those slots
/// no longer exist: request fields can only land in `{title}` and
/// `{body_html}`.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: &'static str,
    body: String,
}

impl PromptTemplate {
    /// Builds a template around the given instruction text.
    ///
    /// The instruction text is the one knob that distinguishes deployments
    /// (how strict the compliance language is); everything else about the
    /// prompt is fixed.
    pub fn new(instructions: &str) -> Self {
        Self {
            system: GENERATION_SYSTEM,
            body: PROMPT_TEMPLATE
                .replace("{instructions}", instructions)
                .replace("{format_instructions}", FORMAT_INSTRUCTIONS),
        }
    }

    /// The system message sent with every generation call.
    pub fn system(&self) -> &str {
        self.system
    }

    /// Renders the per-request prompt.
    /// Pure: the same request always produces the same string.
    pub fn render(&self, request: &ProductRequest) -> String {
        self.body
            .replace("{title}", &request.title)
            .replace("{body_html}", &request.body_html)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(PRODUCT_INSTRUCTIONS)
    }
}

//! Content generation — the request/response transformation chain.
//!
//! Flow: validate request → render prompt → model call → parse/validate output.
//! One await point (the model call); everything before and after it is pure.

use tracing::{debug, info};

use crate::content::models::{parse_content, ProductContent, ProductRequest};
use crate::content::template::PromptTemplate;
use crate::errors::AppError;
use crate::llm_client::GenerationModel;

/// Runs the full transformation for one request.
///
/// Any stage failure propagates as [`AppError`] and reaches the client as
/// the generic 500. No retry, no partial result, no fallback content.
pub async fn generate_content(
    prompt: &PromptTemplate,
    model: &dyn GenerationModel,
    request: &ProductRequest,
) -> Result<ProductContent, AppError> {
    request.validate()?;

    let rendered = prompt.render(request);
    debug!("Rendered prompt: {} chars", rendered.len());

    let raw = model.complete(prompt.system(), &rendered).await?;

    let content = parse_content(&raw)?;

    info!(
        "Generated content for '{}' ({} bullet points)",
        request.title.chars().take(60).collect::<String>(),
        content.bulletpoints.as_ref().map_or(0, |b| b.len())
    );

    Ok(content)
}

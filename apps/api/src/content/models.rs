//! Request and response schema for product content generation.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;

/// Upper bound on generated bullet points; model output above it is rejected.
pub const MAX_BULLET_POINTS: usize = 5;

/// Incoming product data, as exported from the store catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    /// Raw product title; may be long or cluttered with filler words.
    pub title: String,
    /// Product description HTML. May contain markup, may be empty.
    pub body_html: String,
}

impl ProductRequest {
    /// A request is usable as long as the title carries any text;
    /// `body_html` may be empty, in which case the model works from the
    /// title alone.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Generated display content for storefront presentation.
///
/// Wire field names (`displayName`, `displayDescription`, `bulletpoints`)
/// are fixed by the storefront consumer and by the format instructions the
/// model is given; both sides of this struct speak the same JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductContent {
    /// Short, catchy product name for product cards. Intended 3–8 words,
    /// shorter than the original title.
    pub display_name: String,
    /// Marketing description. Intended 2–4 sentences, 50–150 words.
    pub display_description: String,
    /// Key features extracted from the body HTML. Null or empty when the
    /// input carries no extractable information.
    #[serde(default)]
    pub bulletpoints: Option<Vec<String>>,
}

/// Parses raw model output into [`ProductContent`].
///
/// The model is instructed to reply with a bare JSON object but may still
/// wrap it in markdown fences; those are stripped first. Output that does
/// not deserialize into the schema, or that carries more than
/// [`MAX_BULLET_POINTS`] bullets, is rejected. Word counts and compliance
/// language are NOT checked here: those are instructions to the model, not
/// local invariants.
pub fn parse_content(raw: &str) -> Result<ProductContent, AppError> {
    let text = strip_json_fences(raw);

    let content: ProductContent = serde_json::from_str(text).map_err(|e| {
        AppError::Schema(format!("response is not valid product content JSON: {e}"))
    })?;

    if let Some(bullets) = &content.bulletpoints {
        if bullets.len() > MAX_BULLET_POINTS {
            return Err(AppError::Schema(format!(
                "bulletpoints has {} entries (max {MAX_BULLET_POINTS})",
                bullets.len()
            )));
        }
    }

    Ok(content)
}

//! Axum route handlers for the content generation API.

use axum::{extract::State, Json};

use crate::content::generator::generate_content;
use crate::content::models::{ProductContent, ProductRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate
///
/// Generates optimized display content from raw product data. Malformed or
/// incomplete JSON never reaches this handler; the `Json` extractor
/// rejects it with a 4xx first.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ProductContent>, AppError> {
    let content = generate_content(&state.prompt, state.model.as_ref(), &request).await?;
    Ok(Json(content))
}

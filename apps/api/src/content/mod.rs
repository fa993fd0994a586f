// Product content generation: validate, render prompt, call the model, parse.
// All model calls go through llm_client; no direct Anthropic API calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod template;

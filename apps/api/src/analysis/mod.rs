// CV analysis: validation, prompt, document sources, pipeline and handlers.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod document;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod validation;

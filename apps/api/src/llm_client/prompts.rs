// Shared prompt fragments.
// Each feature that calls the model defines its own prompts.rs alongside it;
// this file holds the pieces that belong to the client itself.

/// Probe sent by the health check to see whether the provider answers.
pub const HEALTH_PROBE_PROMPT: &str = "Hello";

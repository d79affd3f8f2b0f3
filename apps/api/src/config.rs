use anyhow::{Context, Result};

use crate::llm_client::MODEL;

/// Address the server binds to. Only the port is configurable.
pub const BIND_HOST: &str = "0.0.0.0";

/// Maximum accepted request body (multipart upload or base64 JSON).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Fixed model identifier, handed to the LLM client at construction.
    pub model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            model: MODEL.to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{BIND_HOST}:{}", self.port)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_uses_fixed_host() {
        let config = Config {
            gemini_api_key: "key".to_string(),
            model: MODEL.to_string(),
            port: 8000,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_require_env_names_missing_variable() {
        let err = require_env("CAREER_API_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("CAREER_API_TEST_SURELY_UNSET_VAR"));
    }
}

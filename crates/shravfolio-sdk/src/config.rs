//! Runtime configuration shared by the server and the terminal client.
//!
//! Everything comes from environment variables read once at startup. The
//! generative-AI key is optional: without it chat answers come from the
//! offline FAQ and repositories are categorised heuristically.

use std::time::Duration;

use shravfolio_models::OWNER;

use crate::error::SdkError;
use crate::gemini::{self, GeminiClient};
use crate::github::{self, GitHubClient};

/// Variables accepted for the generative-AI key, in priority order.
pub const GEMINI_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "API_KEY", "VITE_GEMINI_API_KEY"];

/// Global configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to listen on (default `3000`).
    pub listen_port: u16,
    /// Account whose repositories are listed.
    pub github_username: String,
    /// Base URL of the repository listing API.
    pub github_api_url: String,
    /// Generative-AI key, if any.
    pub gemini_api_key: Option<String>,
    /// Base URL of the generative-AI API.
    pub gemini_api_url: String,
    /// Generative-AI model name.
    pub gemini_model: String,
    /// Idle time after which an assistant session is dropped.
    pub session_ttl: Duration,
    /// Upper bound on mounted assistant sessions.
    pub max_sessions: usize,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable              | Default                                      | Description                         |
    /// |-----------------------|----------------------------------------------|-------------------------------------|
    /// | `FOLIO_PORT`          | `3000`                                       | HTTP listen port                    |
    /// | `GITHUB_USERNAME`     | `shravanikarra`                              | Account whose repos are listed      |
    /// | `GITHUB_API_URL`      | `https://api.github.com`                     | Repository listing API              |
    /// | `GEMINI_API_KEY`      | unset                                        | AI key (`API_KEY`, `VITE_GEMINI_API_KEY` also read) |
    /// | `GEMINI_API_URL`      | `https://generativelanguage.googleapis.com`  | AI API base URL                     |
    /// | `GEMINI_MODEL`        | `gemini-2.5-flash`                           | AI model                            |
    /// | `FOLIO_SESSION_TTL_SECS` | `1800`                                    | Idle assistant session lifetime     |
    /// | `FOLIO_MAX_SESSIONS`  | `10000`                                      | Mounted assistant session cap       |
    ///
    /// Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let number = |name: &str| var(name).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            listen_port: var("FOLIO_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(3000),
            github_username: var("GITHUB_USERNAME")
                .unwrap_or_else(|| OWNER.github_username.to_string()),
            github_api_url: var("GITHUB_API_URL")
                .unwrap_or_else(|| github::DEFAULT_API_URL.to_string()),
            gemini_api_key: GEMINI_KEY_VARS.iter().find_map(|name| var(*name)),
            gemini_api_url: var("GEMINI_API_URL")
                .unwrap_or_else(|| gemini::DEFAULT_API_URL.to_string()),
            gemini_model: var("GEMINI_MODEL")
                .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string()),
            session_ttl: Duration::from_secs(number("FOLIO_SESSION_TTL_SECS").unwrap_or(1800)),
            max_sessions: number("FOLIO_MAX_SESSIONS")
                .and_then(|n| usize::try_from(n).ok())
                .filter(|n| *n > 0)
                .unwrap_or(10_000),
        }
    }

    /// Repository listing client.
    pub fn github_client(&self) -> GitHubClient {
        GitHubClient::new(&self.github_api_url)
    }

    /// Generative-AI client, or [`SdkError::MissingCredential`] without a key.
    pub fn gemini_client(&self) -> Result<GeminiClient, SdkError> {
        Ok(GeminiClient::from_key(self.gemini_api_key.as_deref())?
            .with_base_url(&self.gemini_api_url)
            .with_model(&self.gemini_model))
    }
}

//! Repository listing client.
//!
//! Only one endpoint is used: the owner's public repositories, most recently
//! updated first, at most 30 of them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SdkError;

/// Public listing API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("shravfolio/", env!("CARGO_PKG_VERSION"));

/// A repository record as returned by the listing API.
///
/// Only the fields the portfolio reads are kept; nullable fields are
/// optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GitHubRepo {
    /// Numeric repository id.
    pub id: u64,
    /// Repository slug.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Web URL of the repository.
    pub html_url: String,
    /// Homepage / demo URL, often empty.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Dominant language.
    #[serde(default)]
    pub language: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
    /// RFC 3339 timestamp of the last update.
    #[serde(default)]
    pub updated_at: String,
}

impl GitHubRepo {
    /// Returns true for repositories that are not projects in their own
    /// right (profile READMEs, org config, this portfolio).
    pub fn is_meta(&self) -> bool {
        self.name.contains(".github") || self.name.contains("portfolio")
    }
}

/// Client for the repository listing API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List `username`'s own repositories, most recently updated first.
    ///
    /// Meta repositories (see [`GitHubRepo::is_meta`]) are dropped.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, SdkError> {
        let url = format!(
            "{}/users/{username}/repos?sort=updated&per_page=30&type=owner",
            self.base_url
        );
        debug!(url = %url, "listing repositories");

        let res = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(SdkError::from_response(res).await);
        }

        let body = res.bytes().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_slice(&body)?;
        Ok(repos.into_iter().filter(|r| !r.is_meta()).collect())
    }

    /// Like [`list_repos`](Self::list_repos), but any failure is logged and
    /// yields an empty list.
    pub async fn fetch_repos(&self, username: &str) -> Vec<GitHubRepo> {
        match self.list_repos(username).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!(username = %username, error = %e, "failed to fetch repositories");
                Vec::new()
            }
        }
    }
}

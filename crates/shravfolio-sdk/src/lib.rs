//! # Shravfolio SDK
//!
//! Everything that talks to the outside world on behalf of the portfolio.
//!
//! * [`GitHubClient`]: lists the owner's public repositories.
//! * [`GeminiClient`]: optional generative-AI collaborator that categorises
//!   repositories and answers free-text chat.
//! * [`categorize`]: keyword heuristic used when no AI analysis exists.
//! * [`load_catalog`]: the degradation chain
//!   (enriched → heuristic → static fallback) producing the project grid.
//! * [`AppConfig`]: environment configuration shared by the binaries.
//! * [`SdkError`]: unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use shravfolio_sdk::{load_catalog, GitHubClient};
//!
//! # async fn run() {
//! let github = GitHubClient::new(shravfolio_sdk::github::DEFAULT_API_URL);
//! let catalog = load_catalog(&github, None, "shravanikarra").await;
//!
//! // Never empty: at worst the six static fallback projects.
//! assert!(!catalog.projects.is_empty());
//! # }
//! ```

pub mod categorize;
pub mod config;
pub mod error;
pub mod gemini;
pub mod github;
pub mod ingest;

#[cfg(test)]
mod testing;

pub use categorize::categorize;
pub use config::AppConfig;
pub use error::SdkError;
pub use gemini::{ChatRole, ChatTurn, GeminiClient, RepoAnalysis};
pub use github::{GitHubClient, GitHubRepo};
pub use ingest::{load_catalog, map_repo_to_project, Catalog, CatalogSource};

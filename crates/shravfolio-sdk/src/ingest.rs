//! The project-grid degradation chain.
//!
//! ```text
//!  list repos ──ok, non-empty──▶ AI analysis ──matches──▶ Enriched
//!      │                            │
//!      │                            └─none / disabled / failed──▶ Heuristic
//!      └─failed / empty──────────────────────────────────────────▶ Fallback (6 static)
//! ```
//!
//! Every step that fails is logged and the next source is used, so the
//! resulting [`Catalog`] is never empty.

use chrono::{Datelike, Utc};
use serde::Serialize;
use shravfolio_models::{
    fallback_projects, project_image, title_case, year_from_timestamp, Project, ProjectCategory,
    ProjectId,
};
use tracing::{info, warn};

use crate::categorize::categorize;
use crate::gemini::{GeminiClient, RepoAnalysis};
use crate::github::{GitHubClient, GitHubRepo};

const NO_DESCRIPTION: &str = "No description provided.";

/// Where the projects of a [`Catalog`] came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CatalogSource {
    /// Repository listing plus AI-derived titles and categories.
    Enriched,
    /// Repository listing with keyword categorisation.
    Heuristic,
    /// The static fallback table.
    Fallback,
}

/// Result of [`load_catalog`].
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Projects to show. Never empty.
    pub projects: Vec<Project>,
    /// Which step of the chain produced them.
    pub source: CatalogSource,
    /// Human-readable loading log, oldest first.
    pub log: Vec<String>,
}

impl Catalog {
    /// The static fallback projects, without touching the network.
    pub fn offline() -> Self {
        Self {
            projects: fallback_projects(),
            source: CatalogSource::Fallback,
            log: vec![
                "Offline mode, using static fallback projects.".to_string(),
                "Ready.".to_string(),
            ],
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Build a [`Project`] from a repository and, optionally, the model's
/// analysis of it. Missing analysis fields come from repository metadata.
pub fn map_repo_to_project(repo: &GitHubRepo, analysis: Option<&RepoAnalysis>) -> Project {
    let title = analysis
        .and_then(|a| non_blank(a.title.as_deref()))
        .map_or_else(|| title_case(&repo.name), str::to_string);

    let category = analysis
        .and_then(|a| a.category.as_deref())
        .and_then(|c| ProjectCategory::from_label(c).ok())
        .unwrap_or_else(|| {
            categorize(
                &repo.name,
                repo.description.as_deref(),
                repo.language.as_deref(),
                &repo.topics,
            )
        });

    let description = analysis
        .and_then(|a| non_blank(a.description.as_deref()))
        .or_else(|| non_blank(repo.description.as_deref()))
        .unwrap_or(NO_DESCRIPTION)
        .to_string();

    let technologies = analysis
        .and_then(|a| a.technologies.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| repo.language.iter().cloned().collect());

    let year = year_from_timestamp(&repo.updated_at).unwrap_or_else(|e| {
        warn!(repo = %repo.name, error = %e, "unreadable update timestamp, using current year");
        Utc::now().year()
    });

    Project {
        id: ProjectId::from(repo.id),
        image_url: project_image(category, &title).to_string(),
        title,
        description,
        category,
        technologies,
        github_url: repo.html_url.clone(),
        demo_url: non_blank(repo.homepage.as_deref()).map(str::to_string),
        year,
    }
}

/// Pair each analysis with its repository; analyses naming an unknown
/// repository are dropped.
fn enrich(repos: &[GitHubRepo], analysis: &[RepoAnalysis]) -> Vec<Project> {
    analysis
        .iter()
        .filter_map(|a| {
            repos
                .iter()
                .find(|r| r.id == a.id)
                .map(|repo| map_repo_to_project(repo, Some(a)))
        })
        .collect()
}

/// Choose the projects for the grid from whatever was fetched.
fn assemble(
    repos: &[GitHubRepo],
    analysis: &[RepoAnalysis],
    log: &mut Vec<String>,
) -> (Vec<Project>, CatalogSource) {
    if repos.is_empty() {
        log.push("No repositories found or connection failed.".to_string());
        info!("using static fallback projects");
        return (fallback_projects(), CatalogSource::Fallback);
    }

    if !analysis.is_empty() {
        log.push("Applying AI-powered summaries...".to_string());
        let enriched = enrich(repos, analysis);
        if !enriched.is_empty() {
            return (enriched, CatalogSource::Enriched);
        }
        warn!(analysed = analysis.len(), "analysis matched no repository");
    }

    log.push("Using repository metadata to build project list.".to_string());
    let projects = repos.iter().map(|r| map_repo_to_project(r, None)).collect();
    (projects, CatalogSource::Heuristic)
}

/// Run the whole chain for `username`.
///
/// `analyzer` is `None` when no AI credential is configured.
pub async fn load_catalog(
    github: &GitHubClient,
    analyzer: Option<&GeminiClient>,
    username: &str,
) -> Catalog {
    let mut log = vec![
        "Connecting to GitHub API...".to_string(),
        format!("Fetching repositories for user: {username}..."),
    ];

    let repos = github.fetch_repos(username).await;
    let mut analysis = Vec::new();

    if !repos.is_empty() {
        log.push(format!("Found {} repositories.", repos.len()));
        info!(username = %username, repos = repos.len(), "repositories fetched");

        match analyzer {
            Some(gemini) => {
                log.push("Attempting Gemini classification...".to_string());
                analysis = gemini.fetch_analysis(&repos).await;
            }
            None => log.push("Gemini key not configured, skipping AI classification.".to_string()),
        }
    }

    let (projects, source) = assemble(&repos, &analysis, &mut log);
    if source != CatalogSource::Fallback {
        log.push(format!("Indexed {} projects.", projects.len()));
    }
    log.push("Ready.".to_string());

    info!(source = %source, projects = projects.len(), "catalog loaded");
    Catalog {
        projects,
        source,
        log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::tests::{gemini_mock, ANALYSIS};
    use crate::github::tests::{github_mock, repos_json};
    use crate::testing::{serve, unreachable_url};
    use std::sync::{Arc, Mutex};

    fn repos() -> Vec<GitHubRepo> {
        serde_json::from_value(repos_json()).unwrap()
    }

    #[test]
    fn map_without_analysis_uses_metadata() {
        let repos = repos();
        let repo = &repos[1];
        let p = map_repo_to_project(repo, None);
        assert_eq!(p.id.as_str(), "102");
        assert_eq!(p.title, "Retail Giant Sales Forecasting");
        assert_eq!(p.description, NO_DESCRIPTION);
        assert_eq!(p.category, ProjectCategory::BusinessValue);
        assert_eq!(p.technologies, ["Jupyter Notebook"]);
        assert_eq!(p.demo_url, None);
        assert_eq!(p.year, 2023);
        assert_eq!(p.image_url, project_image(p.category, &p.title));
    }

    #[test]
    fn map_with_analysis_prefers_model_fields() {
        let repos = repos();
        let repo = &repos[0];
        let analysis = RepoAnalysis {
            id: 101,
            title: Some("Immigame".into()),
            category: Some("The Deep Dive".into()),
            description: Some("Plans.".into()),
            technologies: Some(vec!["React".into()]),
        };
        let p = map_repo_to_project(repo, Some(&analysis));
        assert_eq!(p.title, "Immigame");
        assert_eq!(p.category, ProjectCategory::DeepDive);
        assert_eq!(p.description, "Plans.");
        assert_eq!(p.technologies, ["React"]);
        assert_eq!(p.demo_url.as_deref(), Some("https://immigame.com"));
    }

    #[test]
    fn invalid_model_category_falls_back_to_heuristic() {
        let repos = repos();
        let repo = &repos[1];
        let analysis = RepoAnalysis {
            id: 102,
            category: Some("The Side Quest".into()),
            technologies: Some(vec![]),
            ..RepoAnalysis::default()
        };
        let p = map_repo_to_project(repo, Some(&analysis));
        assert_eq!(p.category, ProjectCategory::BusinessValue);
        assert_eq!(p.technologies, ["Jupyter Notebook"]);
    }

    #[test]
    fn unparseable_timestamp_uses_current_year() {
        let mut repo = repos()[0].clone();
        repo.updated_at = String::new();
        assert_eq!(map_repo_to_project(&repo, None).year, Utc::now().year());
    }

    #[test]
    fn analysis_for_unknown_repos_falls_through_to_heuristic() {
        let mut log = Vec::new();
        let ghost = RepoAnalysis {
            id: 999,
            ..RepoAnalysis::default()
        };
        let (projects, source) = assemble(&repos()[..2], &[ghost], &mut log);
        assert_eq!(source, CatalogSource::Heuristic);
        assert_eq!(projects.len(), 2);
    }

    #[tokio::test]
    async fn unreachable_listing_yields_six_fallback_projects() {
        let github = GitHubClient::new(&unreachable_url().await);
        let catalog = load_catalog(&github, None, "shravanikarra").await;
        assert_eq!(catalog.source, CatalogSource::Fallback);
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.projects, fallback_projects());
        assert!(catalog
            .log
            .contains(&"No repositories found or connection failed.".to_string()));
        assert_eq!(catalog.log.last().map(String::as_str), Some("Ready."));
    }

    #[tokio::test]
    async fn listing_without_analyzer_is_heuristic() {
        let github = GitHubClient::new(&serve(github_mock()).await);
        let catalog = load_catalog(&github, None, "shravanikarra").await;
        assert_eq!(catalog.source, CatalogSource::Heuristic);
        let titles: Vec<_> = catalog.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Immigame", "Retail Giant Sales Forecasting"]);
        assert!(catalog.log.contains(&"Indexed 2 projects.".to_string()));
    }

    #[tokio::test]
    async fn listing_with_analysis_is_enriched() {
        let github = GitHubClient::new(&serve(github_mock()).await);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let gemini =
            GeminiClient::new("test-key").with_base_url(&serve(gemini_mock(ANALYSIS, seen)).await);

        let catalog = load_catalog(&github, Some(&gemini), "shravanikarra").await;
        assert_eq!(catalog.source, CatalogSource::Enriched);
        // The analysis for repository 999 has no match and is dropped.
        assert_eq!(catalog.projects.len(), 2);
        assert_eq!(catalog.projects[1].title, "Retail Forecasting");
        assert_eq!(catalog.projects[1].category, ProjectCategory::BusinessValue);
        assert_eq!(catalog.projects[1].description, NO_DESCRIPTION);
    }

    #[tokio::test]
    async fn failing_analyzer_degrades_to_heuristic() {
        let github = GitHubClient::new(&serve(github_mock()).await);
        let gemini = GeminiClient::new("test-key").with_base_url(&unreachable_url().await);
        let catalog = load_catalog(&github, Some(&gemini), "shravanikarra").await;
        assert_eq!(catalog.source, CatalogSource::Heuristic);
        assert_eq!(catalog.projects.len(), 2);
    }

    #[test]
    fn offline_catalog_is_fallback() {
        let catalog = Catalog::offline();
        assert_eq!(catalog.source, CatalogSource::Fallback);
        assert_eq!(catalog.projects.len(), 6);
    }

    #[test]
    fn source_display() {
        assert_eq!(CatalogSource::Enriched.to_string(), "enriched");
    }
}

//! Curated projects the assistant can talk about.
//!
//! Unlike the showcase [`Project`](crate::Project) list, this table never
//! changes at runtime and carries explicit outbound links.

use serde::Serialize;

/// Outbound links of a curated project. Any of them may be absent.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectLinks {
    /// Source repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    /// Live deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<&'static str>,
    /// Rendered notebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<&'static str>,
}

/// A curated project record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProject {
    /// Stable identifier (`"immigame"`).
    pub id: &'static str,
    /// Repository name on the code host.
    pub repo_name: &'static str,
    /// Name shown in menus.
    pub display_name: &'static str,
    /// One sentence summary.
    pub description: &'static str,
    /// Tools and techniques used.
    pub tags: &'static [&'static str],
    /// Outbound links.
    pub links: ProjectLinks,
}

/// The curated project table, in menu order.
pub static PORTFOLIO_PROJECTS: [PortfolioProject; 6] = [
    PortfolioProject {
        id: "shravfolio",
        repo_name: "shravfolio_AI_powered_portfolio",
        display_name: "AI-Powered Portfolio",
        description: "Interactive portfolio that syncs GitHub projects, classifies them into pillars, and visualizes skills with D3.",
        tags: &["React", "Vite", "TypeScript", "LLMs", "D3"],
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/shravfolio_AI_powered_portfolio"),
            live: Some("https://shravfolio-ai-powered-portfolio.vercel.app"),
            notebook: None,
        },
    },
    PortfolioProject {
        id: "immigame",
        repo_name: "immigame",
        display_name: "Immigame",
        description: "Immigration journey planner that turns intent into a structured, trackable plan with AI guidance.",
        tags: &["React", "Vite", "Firebase", "Auth", "LLMs"],
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/immigame"),
            live: Some("https://immigame.com"),
            notebook: None,
        },
    },
    PortfolioProject {
        id: "bike-sharing-system",
        repo_name: "bike-sharing-system",
        display_name: "Bike Sharing Demand Model",
        description: "Regression/classification notebooks for bike rental demand with feature engineering and validation.",
        tags: &["Regression", "scikit-learn", "Pandas", "Notebooks"],
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/bike-sharing-system"),
            live: None,
            notebook: None,
        },
    },
    PortfolioProject {
        id: "credit-card-fraud",
        repo_name: "credit_card_fraud_detection_system",
        display_name: "Credit Card Fraud Detection",
        description: "Rare-event detection workflows with class imbalance handling, threshold tuning, and model inspection.",
        tags: &["Classification", "XGBoost", "Imbalanced", "Evaluation"],
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/credit_card_fraud_detection_system"),
            live: None,
            notebook: None,
        },
    },
    PortfolioProject {
        id: "retail-forecast",
        repo_name: "retail_giant_sales_forecasting",
        display_name: "Retail Sales Forecasting",
        description: "Time series forecasting with seasonality and promotion features, plus rolling error analysis.",
        tags: &["Forecasting", "Time Series", "Feature Engineering"],
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/retail_giant_sales_forecasting"),
            live: None,
            notebook: None,
        },
    },
    PortfolioProject {
        id: "asset-simulation",
        repo_name: "asset_return_simulation",
        display_name: "Asset Return Simulation",
        description: "Simulation notebooks to stress-test financial return assumptions and backtesting logic.",
        tags: &["Simulation", "Backtesting", "Jupyter"],
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/asset_return_simulation"),
            live: None,
            notebook: None,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = PORTFOLIO_PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PORTFOLIO_PROJECTS.len());
    }

    #[test]
    fn every_project_links_to_github() {
        for p in &PORTFOLIO_PROJECTS {
            assert!(p.links.github.is_some(), "{} has no repository link", p.id);
        }
    }

    #[test]
    fn links_skip_missing_entries_when_serialized() {
        let json = serde_json::to_value(PORTFOLIO_PROJECTS[2].links).unwrap();
        assert!(json.get("github").is_some());
        assert!(json.get("live").is_none());
        assert!(json.get("notebook").is_none());
    }
}

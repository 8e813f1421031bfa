//! Showcase projects.
//!
//! A [`Project`] is what the project grid and the skill graph render. It is
//! built either from a repository listing (see the SDK crate) or from the
//! static [`fallback_projects`] table when the listing is unavailable.

use std::fmt;

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

use crate::category::{project_image, ProjectCategory};
use crate::error::ModelError;

// ---------------------------------------------------------------------------
// ProjectId
// ---------------------------------------------------------------------------

/// Identifier of a showcased project.
///
/// Repository-backed projects use the numeric repository id rendered as a
/// string; fallback entries use short ids (`"p1"`, …).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create a new project identifier.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A project shown in the grid and the skill graph.
///
/// Immutable once constructed for a render pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier.
    pub id: ProjectId,
    /// Display title.
    pub title: String,
    /// One or two sentence summary.
    pub description: String,
    /// Pillar the project belongs to.
    pub category: ProjectCategory,
    /// Key technologies, most relevant first.
    pub technologies: Vec<String>,
    /// Cover image URL.
    pub image_url: String,
    /// Source repository URL.
    pub github_url: String,
    /// Live demo URL, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    /// Year of the last update.
    pub year: i32,
}

/// Extract the calendar year from an RFC 3339 timestamp
/// (`"2024-03-18T09:12:44Z"`).
pub fn year_from_timestamp(timestamp: &str) -> Result<i32, ModelError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.year())
        .map_err(|e| ModelError::InvalidTimestamp {
            value: timestamp.to_string(),
            reason: e.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Fallback table
// ---------------------------------------------------------------------------

struct FallbackEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: ProjectCategory,
    technologies: &'static [&'static str],
    github_url: &'static str,
    year: i32,
}

const FALLBACK: [FallbackEntry; 6] = [
    FallbackEntry {
        id: "p1",
        title: "Plant Disease Scanner",
        description: "A production-ready mobile web app that identifies plant diseases from camera photos in real-time. Focus on deployment and latency.",
        category: ProjectCategory::EndToEnd,
        technologies: &["FastAPI", "React", "Docker", "Kubernetes", "TensorFlow Lite"],
        github_url: "https://github.com/example/plant-scanner",
        year: 2024,
    },
    FallbackEntry {
        id: "p2",
        title: "SentimentStream API",
        description: "High-throughput sentiment analysis API serving 1000+ requests/sec using async Python and Kafka for queue management.",
        category: ProjectCategory::EndToEnd,
        technologies: &["FastAPI", "Kafka", "Redis", "Docker", "HuggingFace"],
        github_url: "https://github.com/example/sentiment-stream",
        year: 2023,
    },
    FallbackEntry {
        id: "p3",
        title: "Customer Churn Report",
        description: "Predictive modeling dashboard identifying at-risk customers. Identified actionable insights saving the client ~$50k/quarter.",
        category: ProjectCategory::BusinessValue,
        technologies: &["XGBoost", "SHAP", "SQL", "Tableau", "Pandas"],
        github_url: "https://github.com/example/churn-report",
        year: 2023,
    },
    FallbackEntry {
        id: "p4",
        title: "Dynamic Pricing Engine",
        description: "Revenue optimization model for e-commerce. Analyzed seasonality and elasticity to recommend optimal discount strategies.",
        category: ProjectCategory::BusinessValue,
        technologies: &["Scikit-learn", "StatsModels", "SQL", "Matplotlib"],
        github_url: "https://github.com/example/pricing-engine",
        year: 2022,
    },
    FallbackEntry {
        id: "p5",
        title: "Legal Doc Summarizer",
        description: "Fine-tuned Llama-2-7b on a corpus of legal case files. Implemented custom loss function for factual consistency.",
        category: ProjectCategory::DeepDive,
        technologies: &["PyTorch", "Llama-2", "PEFT/LoRA", "Transformers", "CUDA"],
        github_url: "https://github.com/example/legal-summarizer",
        year: 2024,
    },
    FallbackEntry {
        id: "p6",
        title: "NeonDreamer GAN",
        description: "Novel GAN architecture research exploring style transfer in low-light video conditions. Implemented from ArXiv paper.",
        category: ProjectCategory::DeepDive,
        technologies: &["PyTorch", "GANs", "Computer Vision", "Research"],
        github_url: "https://github.com/example/neondreamer",
        year: 2023,
    },
];

/// The static project list used when no repository listing is available.
///
/// Always six entries, two per pillar.
pub fn fallback_projects() -> Vec<Project> {
    FALLBACK
        .iter()
        .map(|e| Project {
            id: ProjectId::new(e.id),
            title: e.title.to_string(),
            description: e.description.to_string(),
            category: e.category,
            technologies: e.technologies.iter().map(|t| t.to_string()).collect(),
            image_url: project_image(e.category, e.title).to_string(),
            github_url: e.github_url.to_string(),
            demo_url: None,
            year: e.year,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

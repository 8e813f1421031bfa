//! The models & methods library.
//!
//! Topics are grouped by [`ModelArea`]; the assistant searches them by tag
//! or title when a visitor picks one of the fixed [`MODEL_CATEGORIES`].

use serde::Serialize;

/// Grouping of model topics.
#[derive(
    Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelArea {
    /// Regression and classification.
    Prediction,
    /// Clustering and anomaly detection.
    Patterns,
    /// Language models and prompting.
    Nlp,
}

/// A link backing a topic with concrete work (notebook, repository).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evidence {
    /// Link text.
    pub label: &'static str,
    /// Target URL.
    pub href: &'static str,
}

/// A documented model family or method.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelTopic {
    /// Area the topic is filed under.
    pub area: ModelArea,
    /// Topic title.
    pub title: &'static str,
    /// What the topic explores.
    pub description: &'static str,
    /// Searchable tags.
    pub tags: &'static [&'static str],
    /// Supporting links, possibly none.
    pub evidence: &'static [Evidence],
}

/// All documented topics, grouped by area.
pub static MODEL_TOPICS: [ModelTopic; 3] = [
    ModelTopic {
        area: ModelArea::Prediction,
        title: "Regression & Classification Experiments",
        description: "Exploring predictive performance, interpretability, and evaluation metrics.",
        tags: &["Regression", "Classification"],
        evidence: &[],
    },
    ModelTopic {
        area: ModelArea::Patterns,
        title: "Clustering & Anomaly Detection",
        description: "Identifying structure and outliers in real-world datasets.",
        tags: &["Clustering", "Anomaly Detection"],
        evidence: &[],
    },
    ModelTopic {
        area: ModelArea::Nlp,
        title: "Prompting & LLM Evaluation",
        description: "Experiments with prompt design, reliability, and output control.",
        tags: &["LLMs", "NLP"],
        evidence: &[],
    },
];

/// Model categories a visitor can pick in the assistant, in menu order.
pub const MODEL_CATEGORIES: [&str; 9] = [
    "Regression",
    "Classification",
    "Tree-based",
    "Boosting",
    "Clustering",
    "Anomaly Detection",
    "Time Series",
    "Deep Learning",
    "NLP/LLMs",
];

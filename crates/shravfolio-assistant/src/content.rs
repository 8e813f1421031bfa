//! Canned answers built from the static content tables.
//!
//! Every lookup by id comes in two flavours: a `find_*` function that
//! returns `None` for an unknown id, and a lenient one used by the dialogue
//! that answers with the first record of the table instead. The dialogue
//! only ever passes ids taken from its own option lists, so the lenient form
//! never has to guess in practice.

use shravfolio_models::{
    PortfolioProject, ProjectLinks, SystemDescription, MODEL_TOPICS, OWNER, PORTFOLIO_PROJECTS,
    SYSTEMS,
};

const MODELS_OVERVIEW: &str = "Models & Methods covers regression/classification, tree ensembles and boosting, clustering and anomaly detection, time series forecasting, deep learning for vision, and NLP/LLM prompting. Pick a category to see where it applies.";

/// Text and links shown when a project is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    /// Id of the project that was actually described.
    pub id: &'static str,
    /// `"{name}: {description} Tools: {tags}."`
    pub text: String,
    /// Outbound links of the project.
    pub links: ProjectLinks,
}

/// Owner biography plus a line on core strengths.
pub fn owner_summary() -> String {
    format!(
        "{} Core strengths include reliable data pipelines, applied ML evaluation, and clear interfaces for decision-making.",
        OWNER.summary
    )
}

/// Curated projects, in menu order.
pub fn project_list() -> &'static [PortfolioProject] {
    &PORTFOLIO_PROJECTS
}

/// Look up a curated project.
pub fn find_project(id: &str) -> Option<&'static PortfolioProject> {
    PORTFOLIO_PROJECTS.iter().find(|p| p.id == id)
}

/// Describe a curated project. Unknown ids describe the first project.
pub fn project_detail(id: &str) -> ProjectDetail {
    let project = find_project(id).unwrap_or(&PORTFOLIO_PROJECTS[0]);
    ProjectDetail {
        id: project.id,
        text: format!(
            "{}: {} Tools: {}.",
            project.display_name,
            project.description,
            project.tags.join(", ")
        ),
        links: project.links,
    }
}

/// Featured systems, in menu order.
pub fn system_list() -> &'static [SystemDescription] {
    &SYSTEMS
}

/// Look up a featured system.
pub fn find_system(id: &str) -> Option<&'static SystemDescription> {
    SYSTEMS.iter().find(|s| s.id == id)
}

/// Problem and approach of a system. Unknown ids describe the first system.
pub fn system_detail(id: &str) -> String {
    let system = find_system(id).unwrap_or(&SYSTEMS[0]);
    format!(
        "{}: {} Approach: {}",
        system.display_name, system.problem, system.approach
    )
}

/// One paragraph over the whole models library.
pub fn models_overview() -> &'static str {
    MODELS_OVERVIEW
}

/// Topics matching a model category.
///
/// A topic matches when one of its tags or its title contains the category,
/// case-insensitively. Categories without a documented topic get a pointer
/// to the library instead of an empty answer.
pub fn model_category_detail(category: &str) -> String {
    let needle = category.to_lowercase();
    let matches: Vec<String> = MODEL_TOPICS
        .iter()
        .filter(|topic| {
            topic.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                || topic.title.to_lowercase().contains(&needle)
        })
        .map(|topic| {
            let evidence: Vec<&str> = topic.evidence.iter().map(|e| e.label).collect();
            if evidence.is_empty() {
                format!("{}: {}", topic.title, topic.description)
            } else {
                format!(
                    "{}: {} (evidence: {})",
                    topic.title,
                    topic.description,
                    evidence.join(", ")
                )
            }
        })
        .collect();

    if matches.is_empty() {
        format!("{category}: Documented under /models with evidence links to notebooks and repos.")
    } else {
        format!("{category}: {}", matches.join(" | "))
    }
}

/// How to reach the owner.
pub fn contact_info() -> String {
    let contact = OWNER.contact;
    format!(
        "Contact {} at {}. LinkedIn: {}. GitHub: {}.",
        OWNER.first_name(),
        contact.email,
        contact.linkedin,
        contact.github
    )
}

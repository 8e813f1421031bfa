//! Keyword heuristic assigning a pillar from repository metadata.
//!
//! Used whenever the generative-AI analysis is unavailable or did not name
//! a valid category. Each pillar has a list of terms; a term scores once if
//! it appears as a whole word (or phrase) in the repository name,
//! description, language or topics. The single highest-scoring pillar wins.
//! No match, or a tie for the top score, yields
//! [`ProjectCategory::EndToEnd`].

use shravfolio_models::ProjectCategory;

const END_TO_END: &[&str] = &[
    "app", "apps", "api", "apis", "web", "website", "frontend", "backend", "fullstack",
    "full stack", "ui", "mobile", "deploy", "deployment", "docker", "kubernetes", "react",
    "vite", "typescript", "javascript", "fastapi", "flask", "django", "firebase", "streamlit",
    "server", "platform", "planner",
];

const BUSINESS_VALUE: &[&str] = &[
    "analytics", "analysis", "dashboard", "dashboards", "tableau", "power bi", "sql", "eda",
    "exploratory", "roi", "insights", "kpi", "report", "reporting", "business", "sales",
    "revenue", "churn", "marketing", "retail", "customer", "forecast", "forecasting",
    "demand", "pricing", "cleaning", "excel",
];

const DEEP_DIVE: &[&str] = &[
    "research", "algorithm", "algorithms", "math", "neural", "deep learning",
    "machine learning", "ml", "nlp", "llm", "llms", "cv", "computer vision", "vision", "cnn",
    "gan", "transformer", "transformers", "pytorch", "tensorflow", "reinforcement",
    "simulation", "classification", "detection", "fraud", "paper", "arxiv",
];

fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn score(haystack: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .filter(|term| haystack.contains(&format!(" {term} ")))
        .count()
}

/// Pick the pillar that best matches a repository's metadata.
pub fn categorize(
    name: &str,
    description: Option<&str>,
    language: Option<&str>,
    topics: &[String],
) -> ProjectCategory {
    let mut text = String::from(name);
    for part in [description, language].into_iter().flatten() {
        text.push(' ');
        text.push_str(part);
    }
    for topic in topics {
        text.push(' ');
        text.push_str(topic);
    }
    let haystack = normalize(&text);

    let scores = [
        (ProjectCategory::EndToEnd, score(&haystack, END_TO_END)),
        (ProjectCategory::BusinessValue, score(&haystack, BUSINESS_VALUE)),
        (ProjectCategory::DeepDive, score(&haystack, DEEP_DIVE)),
    ];
    let best = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);
    let mut leaders = scores.iter().filter(|(_, s)| *s == best);

    match (leaders.next(), leaders.next()) {
        (Some((category, _)), None) if best > 0 => *category,
        _ => ProjectCategory::EndToEnd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(t: &[&str]) -> Vec<String> {
        t.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn web_app_is_end_to_end() {
        let c = categorize(
            "immigame",
            Some("Immigration journey planner web app"),
            Some("TypeScript"),
            &topics(&["react", "firebase"]),
        );
        assert_eq!(c, ProjectCategory::EndToEnd);
    }

    #[test]
    fn sales_forecast_is_business_value() {
        let c = categorize(
            "retail_giant_sales_forecasting",
            None,
            Some("Jupyter Notebook"),
            &[],
        );
        assert_eq!(c, ProjectCategory::BusinessValue);
    }

    #[test]
    fn fraud_detection_is_deep_dive() {
        let c = categorize(
            "credit_card_fraud_detection_system",
            Some("Classification with imbalanced classes"),
            Some("Jupyter Notebook"),
            &topics(&["machine-learning"]),
        );
        assert_eq!(c, ProjectCategory::DeepDive);
    }

    #[test]
    fn terms_match_whole_words_only() {
        // "apple" must not count as "app", "rapid" not as "api".
        let c = categorize("apple-rapid", None, None, &[]);
        assert_eq!(c, ProjectCategory::EndToEnd);
        assert_eq!(score(&normalize("apple rapid"), END_TO_END), 0);
    }

    #[test]
    fn tie_defaults_to_end_to_end() {
        // One business term, one research term.
        let c = categorize("sales-research", None, None, &[]);
        assert_eq!(c, ProjectCategory::EndToEnd);
    }

    #[test]
    fn no_signal_defaults_to_end_to_end() {
        assert_eq!(categorize("xyz", None, None, &[]), ProjectCategory::EndToEnd);
    }
}

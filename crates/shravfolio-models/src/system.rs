//! End-to-end systems: applications where data, logic and interfaces meet.

use serde::Serialize;

use crate::portfolio::ProjectLinks;

/// Static description of a featured system.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemDescription {
    /// Stable identifier.
    pub id: &'static str,
    /// Repository name on the code host.
    pub repo_name: &'static str,
    /// Name shown in menus.
    pub display_name: &'static str,
    /// One line tagline.
    pub subtitle: &'static str,
    /// Problem statement.
    pub problem: &'static str,
    /// Approach statement.
    pub approach: &'static str,
    /// Technologies used.
    pub stack: &'static [&'static str],
    /// Delivery status (`"Live"`, `"In progress"`).
    pub status: &'static str,
    /// Outbound links.
    pub links: ProjectLinks,
}

impl SystemDescription {
    /// Returns true when the system is deployed.
    pub fn is_live(&self) -> bool {
        self.status.to_lowercase().contains("live")
    }
}

/// The featured systems, in menu order.
pub static SYSTEMS: [SystemDescription; 2] = [
    SystemDescription {
        id: "ai-portfolio",
        repo_name: "shravfolio_AI_powered_portfolio",
        display_name: "AI-Powered Portfolio",
        subtitle: "Interactive data & AI showcase",
        problem: "Presenting complex technical work in a structured and interactive way.",
        approach: "Uses modern frontend tooling and AI-assisted components to surface work clearly.",
        stack: &["React", "Vite", "TypeScript", "LLMs"],
        status: "Live",
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/shravfolio_AI_powered_portfolio"),
            live: Some("https://shravfolio-ai-powered-portfolio.vercel.app"),
            notebook: None,
        },
    },
    SystemDescription {
        id: "immigame",
        repo_name: "immigame",
        display_name: "Immigame",
        subtitle: "Immigration journey planning platform",
        problem: "Immigration processes are fragmented, opaque, and difficult to track across countries, visas, documents, and timelines.",
        approach: "Immigame converts a user\u{2019}s immigration intent into a structured, step-by-step journey with clear actions, progress tracking, and AI-assisted guidance.",
        stack: &["React", "Vite", "Firebase", "Auth", "LLMs"],
        status: "In progress",
        links: ProjectLinks {
            github: Some("https://github.com/shravanikarra/immigame"),
            live: Some("https://immigame.com"),
            notebook: None,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_status_detection() {
        assert!(SYSTEMS[0].is_live());
        assert!(!SYSTEMS[1].is_live());
    }

    #[test]
    fn systems_serialize_camel_case() {
        let json = serde_json::to_value(&SYSTEMS[1]).unwrap();
        assert_eq!(json["displayName"], "Immigame");
        assert_eq!(json["links"]["live"], "https://immigame.com");
    }
}

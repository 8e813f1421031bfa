//! Site owner profile.

use serde::Serialize;

/// Ways to reach the site owner.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    /// E-mail address.
    pub email: &'static str,
    /// LinkedIn profile URL.
    pub linkedin: &'static str,
    /// Code-hosting profile URL.
    pub github: &'static str,
}

/// Who the portfolio belongs to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Full name.
    pub name: &'static str,
    /// Role line shown under the name.
    pub headline: &'static str,
    /// Short biography.
    pub summary: &'static str,
    /// Account name on the code host, used for repository listings.
    pub github_username: &'static str,
    /// Contact details.
    pub contact: ContactInfo,
}

/// The portfolio owner.
pub const OWNER: Profile = Profile {
    name: "Shravani Karra",
    headline: "Data & AI Systems Engineer",
    summary: "Shravani Karra is a Senior Data Analyst at Rivian, Duke MQM alum, and former Goldman Sachs engineer. She builds data systems, analytics pipelines, and applied ML workflows with a focus on interpretability and real-world constraints.",
    github_username: "shravanikarra",
    contact: ContactInfo {
        email: "shravanikarra1@gmail.com",
        linkedin: "https://linkedin.com/in/shravani-karra",
        github: "https://github.com/shravanikarra",
    },
};

impl Profile {
    /// First name, used in conversational copy.
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name() {
        assert_eq!(OWNER.first_name(), "Shravani");
    }

    #[test]
    fn github_profile_matches_username() {
        assert!(OWNER.contact.github.ends_with(OWNER.github_username));
    }
}

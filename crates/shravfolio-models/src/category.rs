//! The three portfolio pillars and the presentation data attached to them.
//!
//! Every showcased project belongs to exactly one [`ProjectCategory`]. The
//! wire representation is the full pillar label (`"The End-to-End"`, …),
//! which is also what the generative-AI categoriser is asked to return.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// ProjectCategory
// ---------------------------------------------------------------------------

/// Classification bucket applied to each showcased project.
///
/// # Examples
///
/// ```
/// use shravfolio_models::ProjectCategory;
///
/// let c: ProjectCategory = "The Deep Dive".parse().unwrap();
/// assert_eq!(c, ProjectCategory::DeepDive);
/// assert_eq!(c.to_string(), "The Deep Dive");
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum ProjectCategory {
    /// Apps, APIs, deployments, UI, full-stack work ("The Product").
    #[serde(rename = "The End-to-End")]
    #[strum(serialize = "The End-to-End")]
    EndToEnd,
    /// Analytics, dashboards, ROI, SQL, EDA ("The Analyst").
    #[serde(rename = "The Business Value")]
    #[strum(serialize = "The Business Value")]
    BusinessValue,
    /// Research, math, algorithms, NLP, CV ("The Researcher").
    #[serde(rename = "The Deep Dive")]
    #[strum(serialize = "The Deep Dive")]
    DeepDive,
}

impl ProjectCategory {
    /// All categories in display order.
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::EndToEnd,
        ProjectCategory::BusinessValue,
        ProjectCategory::DeepDive,
    ];

    /// Parse a category label leniently.
    ///
    /// Accepts the exact label, any casing of it, and the label without the
    /// leading `"The "` (`"deep dive"`, `"End-to-End"`).
    pub fn from_label(label: &str) -> Result<Self, ModelError> {
        let wanted = normalize_label(label);
        Self::ALL
            .into_iter()
            .find(|c| normalize_label(&c.to_string()) == wanted)
            .ok_or_else(|| ModelError::UnknownCategory {
                value: label.to_string(),
            })
    }

    /// Position of the category in [`ProjectCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            ProjectCategory::EndToEnd => 0,
            ProjectCategory::BusinessValue => 1,
            ProjectCategory::DeepDive => 2,
        }
    }

    /// The persona the pillar stands for.
    pub fn pillar(self) -> &'static str {
        match self {
            ProjectCategory::EndToEnd => "The Product",
            ProjectCategory::BusinessValue => "The Analyst",
            ProjectCategory::DeepDive => "The Researcher",
        }
    }

    /// Short tag shown on project cards.
    pub fn tag(self) -> &'static str {
        match self {
            ProjectCategory::EndToEnd => "Systems",
            ProjectCategory::BusinessValue => "Analytics",
            ProjectCategory::DeepDive => "ML",
        }
    }

    /// Upper-cased label without the article, used as a background caption.
    pub fn caption(self) -> String {
        self.to_string().trim_start_matches("The ").to_uppercase()
    }

    /// Accent colour (hex RGB) of the pillar.
    pub fn color(self) -> &'static str {
        match self {
            ProjectCategory::EndToEnd => "#38bdf8",
            ProjectCategory::BusinessValue => "#2dd4bf",
            ProjectCategory::DeepDive => "#f472b6",
        }
    }

    fn images(self) -> &'static [&'static str] {
        match self {
            ProjectCategory::EndToEnd => &[
                "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=500&h=500&fit=crop&q=80",
            ],
            ProjectCategory::BusinessValue => &[
                "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1599658880436-c61792e70672?w=500&h=500&fit=crop&q=80",
            ],
            ProjectCategory::DeepDive => &[
                "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1507413245164-6160d8298b31?w=500&h=500&fit=crop&q=80",
                "https://images.unsplash.com/photo-1617791160505-6f00504e3519?w=500&h=500&fit=crop&q=80",
            ],
        }
    }
}

fn normalize_label(label: &str) -> String {
    let lower = label.trim().to_lowercase();
    lower
        .strip_prefix("the ")
        .unwrap_or(&lower)
        .replace(['-', '_'], " ")
}

// ---------------------------------------------------------------------------
// Cover images
// ---------------------------------------------------------------------------

/// Pick a cover image for a project.
///
/// The choice only depends on the category and the title, so the same
/// project always gets the same picture across reloads.
pub fn project_image(category: ProjectCategory, title: &str) -> &'static str {
    let images = category.images();
    let index = title_hash(title).unsigned_abs() % images.len() as u64;
    images[index as usize]
}

/// Rolling `h * 31 + c` hash over UTF-16 code units with 32-bit shifts.
fn title_hash(title: &str) -> i64 {
    title.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit) + (shifted - hash)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

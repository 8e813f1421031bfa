#![deny(missing_docs)]

//! # Shravfolio Models
//!
//! Core data types and static content for the portfolio.
//!
//! ## Content hierarchy
//!
//! ```text
//! Profile (owner, contact)
//! ├── Project            showcase grid, built from repository listings or the fallback table
//! │   └── ProjectCategory   one of the three pillars
//! ├── PortfolioProject   curated entries the assistant talks about
//! ├── SystemDescription  end-to-end systems (problem / approach)
//! └── ModelTopic         models & methods library, grouped by ModelArea
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`category`] | `ProjectCategory`, pillar colours, deterministic cover images |
//! | [`project`] | Showcase `Project` and the static fallback list |
//! | [`portfolio`] | Curated `PortfolioProject` table and its links |
//! | [`system`] | `SystemDescription` table |
//! | [`topic`] | `ModelTopic` table and the fixed model categories |
//! | [`profile`] | Owner summary and contact details |
//! | [`text`] | Title-casing and label truncation helpers |
//! | [`layout`] | Force-directed placement of projects around pillar foci |

pub mod category;
pub mod error;
pub mod layout;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod system;
pub mod text;
pub mod topic;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `shravfolio_models::Project` directly.
pub use category::*;
pub use error::*;
pub use layout::*;
pub use portfolio::*;
pub use profile::*;
pub use project::*;
pub use system::*;
pub use text::*;
pub use topic::*;

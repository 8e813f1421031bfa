#![deny(missing_docs)]

//! # Shravfolio Assistant
//!
//! The guided "Smart Portfolio Assistant": a menu-driven conversation that
//! answers questions about the portfolio owner from local data only.
//!
//! * [`AssistantSession`] holds the dialogue state, the back-stack and the
//!   transcript. One session per mounted widget; drop it to reset.
//! * [`content`] turns the static tables of [`shravfolio_models`] into the
//!   canned answers the session appends.
//! * [`faq`] is the free-text fallback: keyword scoring over a fixed set of
//!   intents, used when no generative-AI backend is configured.
//!
//! # Quick start
//!
//! ```
//! use shravfolio_assistant::{AssistantSession, DialogueState, OptionPayload};
//!
//! let mut session = AssistantSession::new();
//! session.select("Talk about a project", None);
//! session.select("Immigame", Some(&OptionPayload::Project("immigame".into())));
//!
//! assert_eq!(session.state(), DialogueState::ProjectDetail);
//! assert!(session.transcript().last().unwrap().text.starts_with("Immigame:"));
//! ```

pub mod content;
pub mod dialogue;
pub mod faq;

pub use dialogue::{
    options_for, AssistantSession, Author, DialogueState, MenuOption, Message, OptionPayload,
    Outcome,
};
pub use faq::{offline_reply, FaqIntent, FaqReply, FAQ_INTENTS};

//! Guided-chat dialogue state machine.
//!
//! ```text
//!                 ┌──────── Start over (from anywhere) ───────┐
//!                 ▼                                           │
//!  ┌──────┐  "Talk about a project"  ┌─────────────┐  pick  ┌───────────────┐
//!  │ Home │ ───────────────────────▶ │ ProjectList │ ─────▶ │ ProjectDetail │
//!  └──────┘                          └─────────────┘ ◀───── └───────────────┘
//!     │ │ │                                           Back / Back to Projects
//!     │ │ └── "Systems" ─────────────▶ SystemList   (pick: answer, stay)
//!     │ └──── "ML Models & Methods" ─▶ Models       (pick: answer, stay)
//!     └────── "Talk about …" / "Contact" ─▶ About / Contact
//! ```
//!
//! Moving forward pushes the previous state on the back-stack; "Back" pops
//! it (or lands on Home when the stack is empty). ProjectDetail is the one
//! exception: its back action always returns to ProjectList.
//!
//! The dispatcher is total. A label that is not offered in the current
//! state, or a payload that does not match the offered one, is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shravfolio_models::MODEL_CATEGORIES;
use uuid::Uuid;

use crate::content;

/// Label that resets the conversation from any state.
pub const START_OVER: &str = "Start over";
/// Label that returns to the previous state.
pub const BACK: &str = "Back";
/// Label that leaves a project detail for the project list.
pub const BACK_TO_PROJECTS: &str = "Back to Projects";

const WELCOME: &str = "Hi! I\u{2019}m the Smart Portfolio Assistant. Choose an option below to explore Shravani\u{2019}s work.";
const RESTARTED: &str = "Restarted. How can I help?";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Node of the guided-chat menu tree.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DialogueState {
    /// Main menu.
    Home,
    /// Owner biography.
    About,
    /// List of curated projects.
    ProjectList,
    /// One project with its outbound links.
    ProjectDetail,
    /// List of featured systems.
    SystemList,
    /// Model categories.
    Models,
    /// Contact details.
    Contact,
}

struct HomeEntry {
    label: &'static str,
    target: DialogueState,
    answer: fn() -> String,
}

fn project_prompt() -> String {
    "Select a project to view details.".to_string()
}

fn systems_prompt() -> String {
    "Here are the systems available:".to_string()
}

fn models_overview() -> String {
    content::models_overview().to_string()
}

const HOME_MENU: [HomeEntry; 5] = [
    HomeEntry {
        label: "Talk about Shravani Karra",
        target: DialogueState::About,
        answer: content::owner_summary,
    },
    HomeEntry {
        label: "Talk about a project",
        target: DialogueState::ProjectList,
        answer: project_prompt,
    },
    HomeEntry {
        label: "Systems",
        target: DialogueState::SystemList,
        answer: systems_prompt,
    },
    HomeEntry {
        label: "ML Models & Methods",
        target: DialogueState::Models,
        answer: models_overview,
    },
    HomeEntry {
        label: "Contact",
        target: DialogueState::Contact,
        answer: content::contact_info,
    },
];

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// Who wrote a transcript entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Author {
    /// The visitor (echo of the chosen option).
    User,
    /// The assistant.
    Assistant,
}

/// One transcript entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    /// Unique id.
    pub id: Uuid,
    /// Who wrote it.
    pub author: Author,
    /// Plain text.
    pub text: String,
    /// When it was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Data attached to a list entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum OptionPayload {
    /// A curated project id.
    Project(String),
    /// A featured system id.
    System(String),
    /// A model category name.
    ModelCategory(String),
}

/// Something the visitor can act on in the current state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuOption {
    /// Handled by [`AssistantSession::select`].
    Choice {
        /// Button text, echoed into the transcript when chosen.
        label: String,
        /// Identifies the entry for list states.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<OptionPayload>,
    },
    /// Opens an external page; never reaches the dispatcher.
    Link {
        /// Link text.
        label: String,
        /// Target URL.
        url: String,
    },
}

impl MenuOption {
    fn choice(label: &str) -> Self {
        Self::Choice {
            label: label.to_string(),
            payload: None,
        }
    }

    fn entry(label: &str, payload: OptionPayload) -> Self {
        Self::Choice {
            label: label.to_string(),
            payload: Some(payload),
        }
    }

    fn link(label: &str, url: &str) -> Self {
        Self::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    /// Button or link text.
    pub fn label(&self) -> &str {
        match self {
            Self::Choice { label, .. } | Self::Link { label, .. } => label,
        }
    }
}

/// Options offered in `state`.
///
/// `project` is the project shown in [`DialogueState::ProjectDetail`] and is
/// ignored elsewhere.
pub fn options_for(state: DialogueState, project: Option<&str>) -> Vec<MenuOption> {
    match state {
        DialogueState::Home => HOME_MENU.iter().map(|e| MenuOption::choice(e.label)).collect(),
        DialogueState::About | DialogueState::Contact => {
            vec![MenuOption::choice(BACK), MenuOption::choice(START_OVER)]
        }
        DialogueState::ProjectList => content::project_list()
            .iter()
            .map(|p| MenuOption::entry(p.display_name, OptionPayload::Project(p.id.to_string())))
            .chain(std::iter::once(MenuOption::choice(BACK)))
            .collect(),
        DialogueState::ProjectDetail => {
            let mut options = Vec::new();
            if let Some(id) = project {
                let links = content::project_detail(id).links;
                if let Some(url) = links.live {
                    options.push(MenuOption::link("Open Live", url));
                }
                if let Some(url) = links.github {
                    options.push(MenuOption::link("Open GitHub", url));
                }
                if let Some(url) = links.notebook {
                    options.push(MenuOption::link("Open Notebook", url));
                }
            }
            options.push(MenuOption::choice(BACK_TO_PROJECTS));
            options.push(MenuOption::choice(START_OVER));
            options
        }
        DialogueState::SystemList => content::system_list()
            .iter()
            .map(|s| MenuOption::entry(s.display_name, OptionPayload::System(s.id.to_string())))
            .chain(std::iter::once(MenuOption::choice(BACK)))
            .collect(),
        DialogueState::Models => MODEL_CATEGORIES
            .iter()
            .map(|c| MenuOption::entry(c, OptionPayload::ModelCategory((*c).to_string())))
            .chain(std::iter::once(MenuOption::choice(BACK)))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Result of [`AssistantSession::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The label was not valid here; nothing changed.
    Ignored,
    /// The selection was handled.
    Applied {
        /// State before the selection.
        from: DialogueState,
        /// State after the selection.
        to: DialogueState,
        /// Number of transcript entries appended.
        added: usize,
    },
}

/// One visitor's conversation with the assistant.
///
/// Created when the widget is mounted and dropped when it is unmounted;
/// nothing is persisted.
#[derive(Debug, Clone)]
pub struct AssistantSession {
    id: Uuid,
    state: DialogueState,
    back_stack: Vec<DialogueState>,
    selected_project: Option<&'static str>,
    transcript: Vec<Message>,
}

impl Default for AssistantSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantSession {
    /// A fresh session on the main menu with the welcome message.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: DialogueState::Home,
            back_stack: Vec::new(),
            selected_project: None,
            transcript: vec![Message::new(Author::Assistant, WELCOME)],
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state.
    pub fn state(&self) -> DialogueState {
        self.state
    }

    /// States "Back" would return to, oldest first.
    pub fn back_stack(&self) -> &[DialogueState] {
        &self.back_stack
    }

    /// Project shown in [`DialogueState::ProjectDetail`].
    pub fn selected_project(&self) -> Option<&'static str> {
        self.selected_project
    }

    /// All messages so far, oldest first.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Options offered right now.
    pub fn options(&self) -> Vec<MenuOption> {
        options_for(self.state, self.selected_project)
    }

    /// Act on a chosen option.
    ///
    /// [`START_OVER`] and [`BACK`] are accepted in every state; everything
    /// else must match a [`MenuOption::Choice`] currently offered, payload
    /// included.
    pub fn select(&mut self, label: &str, payload: Option<&OptionPayload>) -> Outcome {
        let from = self.state;
        let before = self.transcript.len();

        let handled = match (label, payload) {
            (START_OVER, None) => {
                self.start_over();
                true
            }
            (BACK, None) => {
                self.go_back();
                true
            }
            _ => self.dispatch(label, payload),
        };

        if !handled {
            return Outcome::Ignored;
        }
        if self.state != DialogueState::ProjectDetail {
            self.selected_project = None;
        }
        Outcome::Applied {
            from,
            to: self.state,
            added: self.transcript.len() - before,
        }
    }

    fn dispatch(&mut self, label: &str, payload: Option<&OptionPayload>) -> bool {
        let offered = self.options().into_iter().any(|o| match o {
            MenuOption::Choice {
                label: l,
                payload: p,
            } => l == label && p.as_ref() == payload,
            MenuOption::Link { .. } => false,
        });
        if !offered {
            return false;
        }

        match (self.state, payload) {
            (DialogueState::ProjectDetail, None) if label == BACK_TO_PROJECTS => self.go_back(),
            (DialogueState::Home, None) => {
                let Some(entry) = HOME_MENU.iter().find(|e| e.label == label) else {
                    return false;
                };
                self.say(Author::User, label);
                self.say(Author::Assistant, (entry.answer)());
                self.push(entry.target);
            }
            (DialogueState::ProjectList, Some(OptionPayload::Project(id))) => {
                let detail = content::project_detail(id);
                self.say(Author::User, label);
                self.say(Author::Assistant, detail.text);
                self.selected_project = Some(detail.id);
                self.push(DialogueState::ProjectDetail);
            }
            (DialogueState::SystemList, Some(OptionPayload::System(id))) => {
                self.say(Author::User, label);
                self.say(Author::Assistant, content::system_detail(id));
            }
            (DialogueState::Models, Some(OptionPayload::ModelCategory(category))) => {
                self.say(Author::User, label);
                self.say(Author::Assistant, content::model_category_detail(category));
            }
            _ => return false,
        }
        true
    }

    fn say(&mut self, author: Author, text: impl Into<String>) {
        self.transcript.push(Message::new(author, text));
    }

    fn push(&mut self, next: DialogueState) {
        self.back_stack.push(self.state);
        self.state = next;
    }

    fn go_back(&mut self) {
        if self.state == DialogueState::ProjectDetail {
            if self.back_stack.last() == Some(&DialogueState::ProjectList) {
                self.back_stack.pop();
            }
            self.state = DialogueState::ProjectList;
        } else {
            self.state = self.back_stack.pop().unwrap_or(DialogueState::Home);
        }
    }

    fn start_over(&mut self) {
        self.back_stack.clear();
        self.state = DialogueState::Home;
        self.say(Author::User, START_OVER);
        self.say(Author::Assistant, RESTARTED);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! HTTP routes of the portfolio service.
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `GET` | `/health` | Liveness |
//! | `GET` | `/api/projects` | Project grid (catalog loaded at startup) |
//! | `GET` | `/api/projects/graph` | Skill-graph layout (`?width&height&seed`) |
//! | `GET` | `/api/systems` | Featured systems |
//! | `GET` | `/api/models` | Model categories and topics |
//! | `GET` | `/api/profile` | Owner profile |
//! | `POST` | `/api/assistant/sessions` | Mount a guided-assistant session |
//! | `GET` | `/api/assistant/sessions/{id}` | Current state, options, transcript |
//! | `POST` | `/api/assistant/sessions/{id}/select` | Choose an option |
//! | `DELETE` | `/api/assistant/sessions/{id}` | Unmount |
//! | `POST` | `/api/chat` | Free-text chat (live AI or offline FAQ) |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shravfolio_assistant::{
    AssistantSession, DialogueState, MenuOption, Message, OptionPayload, Outcome, offline_reply,
};
use shravfolio_models::{
    GraphLayout, LayoutConfig, MODEL_CATEGORIES, MODEL_TOPICS, ModelTopic, OWNER, Profile,
    SYSTEMS, SystemDescription, layout_projects,
};
use shravfolio_sdk::{Catalog, ChatTurn, GeminiClient};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::sessions::SessionStore;

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
pub struct AppState {
    /// Projects loaded once at startup.
    pub catalog: Catalog,
    /// Live chat backend; `None` answers from the offline FAQ.
    pub gemini: Option<GeminiClient>,
    /// Mounted assistant sessions.
    pub sessions: SessionStore,
}

impl AppState {
    /// Wrap a loaded catalog, optional chat backend and session table.
    pub fn new(catalog: Catalog, gemini: Option<GeminiClient>, sessions: SessionStore) -> Self {
        Self {
            catalog,
            gemini,
            sessions,
        }
    }
}

// ---------------------------------------------------------------------------
// Request / Response DTOs
// ---------------------------------------------------------------------------

/// Query of `GET /api/projects/graph`.
#[derive(Deserialize)]
struct GraphQuery {
    width: Option<f64>,
    height: Option<f64>,
    seed: Option<u64>,
}

/// Response of `GET /api/models`.
#[derive(Serialize)]
struct ModelsResponse {
    categories: &'static [&'static str],
    topics: &'static [ModelTopic],
}

/// A session as seen by a front-end.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    id: Uuid,
    state: DialogueState,
    back_stack: Vec<DialogueState>,
    options: Vec<MenuOption>,
    transcript: Vec<Message>,
}

impl From<&AssistantSession> for SessionView {
    fn from(session: &AssistantSession) -> Self {
        Self {
            id: session.id(),
            state: session.state(),
            back_stack: session.back_stack().to_vec(),
            options: session.options(),
            transcript: session.transcript().to_vec(),
        }
    }
}

/// Body of `POST /api/assistant/sessions/{id}/select`.
#[derive(Deserialize)]
struct SelectRequest {
    label: String,
    #[serde(default)]
    payload: Option<OptionPayload>,
}

/// Response of `POST /api/assistant/sessions/{id}/select`.
#[derive(Serialize)]
struct SelectResponse {
    /// False when the label was not valid in the session's state.
    applied: bool,
    /// Number of transcript entries appended.
    added: usize,
    session: SessionView,
}

/// Body of `POST /api/chat`. `message` stays untyped so that a non-string
/// value is reported as missing rather than as malformed JSON.
#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: Value,
    #[serde(default)]
    history: Vec<ChatTurn>,
}

/// Response of `POST /api/chat`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatResponse {
    reply: String,
    /// Set when the reply came from the offline FAQ.
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_intent: Option<String>,
    /// Follow-up questions from the offline FAQ.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/projects`: the catalog with its source and loading log.
async fn list_projects(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    Json(state.catalog.clone())
}

/// `GET /api/projects/graph`: run the force layout for the catalog.
async fn project_graph(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GraphQuery>,
) -> Result<Json<GraphLayout>, ApiError> {
    let defaults = LayoutConfig::new(1200.0, 600.0);
    let width = query.width.unwrap_or(defaults.width);
    let height = query.height.unwrap_or(defaults.height);
    for (name, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ApiError::BadRequest(format!("{name} must be a positive number")));
        }
    }

    let config = LayoutConfig {
        width,
        height,
        seed: query.seed.unwrap_or(defaults.seed),
    };
    Ok(Json(layout_projects(&state.catalog.projects, config)))
}

async fn list_systems() -> Json<&'static [SystemDescription]> {
    Json(SYSTEMS.as_slice())
}

async fn list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        categories: &MODEL_CATEGORIES,
        topics: &MODEL_TOPICS,
    })
}

async fn profile() -> Json<Profile> {
    Json(OWNER)
}

/// `POST /api/assistant/sessions`: mount a new session.
async fn create_session(State(state): State<Arc<AppState>>) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    let mounted = state.sessions.len().await;
    info!(session = %session.id(), mounted, "assistant session mounted");
    (StatusCode::CREATED, Json(SessionView::from(&session)))
}

/// `GET /api/assistant/sessions/{id}`.
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or(ApiError::UnknownSession(id))?;
    Ok(Json(SessionView::from(&session)))
}

/// `POST /api/assistant/sessions/{id}/select`: choose an option.
///
/// An option that is not valid in the current state is not an error: the
/// session is returned unchanged with `applied: false`.
async fn select_option(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, ApiError> {
    let (outcome, session) = state
        .sessions
        .select(id, &req.label, req.payload.as_ref())
        .await
        .ok_or(ApiError::UnknownSession(id))?;

    let (applied, added) = match outcome {
        Outcome::Ignored => (false, 0),
        Outcome::Applied { added, .. } => (true, added),
    };
    Ok(Json(SelectResponse {
        applied,
        added,
        session: SessionView::from(&session),
    }))
}

/// `DELETE /api/assistant/sessions/{id}`: unmount.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(id).await {
        info!(session = %id, "assistant session unmounted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::UnknownSession(id))
    }
}

/// `POST /api/chat`: answer a free-text message.
///
/// With a configured AI backend the message and history are forwarded to
/// it; otherwise the offline FAQ answers.
async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::BadRequest("Invalid JSON payload".into()))?;
    let message = match req.message {
        Value::String(m) if !m.trim().is_empty() => m,
        _ => return Err(ApiError::BadRequest("Missing message".into())),
    };

    let response = match &state.gemini {
        Some(gemini) => ChatResponse {
            reply: gemini.chat(&message, &req.history).await?,
            matched_intent: None,
            suggestions: Vec::new(),
        },
        None => {
            let faq = offline_reply(&message);
            ChatResponse {
                reply: faq.reply,
                matched_intent: Some(faq.matched_intent),
                suggestions: faq.suggestions,
            }
        }
    };
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/graph", get(project_graph))
        .route("/api/systems", get(list_systems))
        .route("/api/models", get(list_models))
        .route("/api/profile", get(profile))
        .route("/api/assistant/sessions", post(create_session))
        .route(
            "/api/assistant/sessions/{id}",
            get(get_session).delete(delete_session),
        )
        .route("/api/assistant/sessions/{id}/select", post(select_option))
        .route("/api/chat", post(chat))
        .with_state(state)
}

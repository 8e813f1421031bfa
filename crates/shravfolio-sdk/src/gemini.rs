//! Generative-AI client (Gemini `generateContent` REST API).
//!
//! Two calls are made: a one-shot categorisation of the repository list with
//! a JSON response schema, and a conversational reply for the live chat. A
//! client only exists when an API key is configured; without one the
//! callers skip AI features entirely.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::SdkError;
use crate::github::GitHubRepo;

/// Public Gemini API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used for both calls unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Persona and background given to the model for free-text chat.
pub const SYSTEM_INSTRUCTION: &str = "You are \"ShravBot\", the AI assistant for Shravani Karra's portfolio website.
Shravani is a Senior Data Analyst at Rivian Automotive, based in Normal, IL.
She has over 6 years of experience in Data Engineering and Machine Learning.
She previously worked at Goldman Sachs (Associate Data Engineer) and KPMG India.
She holds a Master of Quantitative Management: Business Analytics from Duke University (Fuqua School of Business).
Her technical skills include Python, R, SQL, AWS, Machine Learning (XGBoost, Random Forest), and Deep Learning (CNNs, PyTorch).

The portfolio is organized into three distinct pillars:
1. The End-to-End (The Product) - Focus on shipping code, deployment, APIs, data modeling (dbt, Snowflake).
2. The Business Value (The Analyst) - Focus on ROI, insights, SQL, dashboards (Tableau).
3. The Deep Dive (The Researcher) - Focus on math, architectures, innovation.

Your goal is to help visitors understand Shravani's background and how her \"Three Pillars\" approach applies to her work at Rivian, Goldman Sachs, and her personal projects.
Keep responses professional, concise, yet enthusiastic.";

const ANALYSIS_INSTRUCTIONS: &str = "Analyze these GitHub repositories.
1. Filter out any repositories that are definitely NOT related to Machine Learning, Data Science, AI, Web Development or Software Engineering (e.g. random config files).
2. For each valid project, categorize it into exactly one of these 3 categories based on the \"Three Pillars\" methodology:
   - \"The End-to-End\" (Apps, APIs, Deployments, UI, Fullstack)
   - \"The Business Value\" (Analytics, Dashboards, ROI, Data Cleaning, SQL, EDA)
   - \"The Deep Dive\" (Research, Math, Algorithms, Low-level Implementations, NLP, CV)
3. Improve the title to be display-friendly (Capitalized, remove hyphens).
4. Improve the description to be punchy and professional (under 20 words).
5. List the key technologies (up to 4) used or inferred.

Return the result as a JSON array.

Repositories:
";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The model's verdict on one repository. Every field but `id` may be
/// missing; callers fill the gaps from repository metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RepoAnalysis {
    /// Repository id this analysis refers to.
    #[serde(deserialize_with = "id_from_number")]
    pub id: u64,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Pillar label, expected to be one of the three full labels.
    #[serde(default)]
    pub category: Option<String>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Key technologies.
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

/// Speaker of a chat turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The visitor.
    User,
    /// The assistant.
    Assistant,
}

/// One earlier exchange in a chat.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Who spoke.
    pub role: ChatRole,
    /// What was said.
    pub content: String,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RepoSummary<'a> {
    id: u64,
    name: &'a str,
    description: Option<&'a str>,
    language: Option<&'a str>,
    topics: &'a [String],
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn id_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = serde_json::Number::deserialize(deserializer)?;
    n.as_u64()
        .or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        })
        .ok_or_else(|| serde::de::Error::custom(format!("invalid repository id {n}")))
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for the public API and default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a client only when a non-blank key is available.
    pub fn from_key(api_key: Option<&str>) -> Result<Self, SdkError> {
        match api_key.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(SdkError::MissingCredential),
        }
    }

    /// Point the client at another API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Use another model.
    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Model name in use.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, body: &Value) -> Result<String, SdkError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(model = %self.model, "generateContent");

        let res = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(SdkError::from_response(res).await);
        }

        let bytes = res.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(SdkError::EmptyResponse);
        }
        Ok(text)
    }

    /// Ask the model to categorise and describe `repos`.
    ///
    /// The response is constrained to a JSON array of [`RepoAnalysis`].
    pub async fn analyze_repos(&self, repos: &[GitHubRepo]) -> Result<Vec<RepoAnalysis>, SdkError> {
        let summaries: Vec<RepoSummary<'_>> = repos
            .iter()
            .map(|r| RepoSummary {
                id: r.id,
                name: &r.name,
                description: r.description.as_deref(),
                language: r.language.as_deref(),
                topics: &r.topics,
            })
            .collect();
        let prompt = format!("{ANALYSIS_INSTRUCTIONS}{}", serde_json::to_string(&summaries)?);

        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "NUMBER" },
                            "title": { "type": "STRING" },
                            "category": {
                                "type": "STRING",
                                "enum": ["The End-to-End", "The Business Value", "The Deep Dive"]
                            },
                            "description": { "type": "STRING" },
                            "technologies": { "type": "ARRAY", "items": { "type": "STRING" } }
                        }
                    }
                }
            }
        });

        let text = self.generate(&body).await?;
        Ok(serde_json::from_str(text.trim())?)
    }

    /// Like [`analyze_repos`](Self::analyze_repos), but any failure is
    /// logged and yields an empty list.
    pub async fn fetch_analysis(&self, repos: &[GitHubRepo]) -> Vec<RepoAnalysis> {
        match self.analyze_repos(repos).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "repository analysis failed");
                Vec::new()
            }
        }
    }

    /// Answer `message` given the earlier `history`.
    pub async fn chat(&self, message: &str, history: &[ChatTurn]) -> Result<String, SdkError> {
        let contents: Vec<Value> = history
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "model",
                };
                json!({ "role": role, "parts": [{ "text": turn.content }] })
            })
            .chain(std::iter::once(
                json!({ "role": "user", "parts": [{ "text": message }] }),
            ))
            .collect();

        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": contents,
            "generationConfig": { "temperature": 0.7 }
        });

        self.generate(&body).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::testing::{serve, unreachable_url};
    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    /// A mock `generateContent` endpoint that answers with `text` and
    /// records every request body.
    pub(crate) fn gemini_mock(text: &'static str, seen: Arc<Mutex<Vec<Value>>>) -> Router {
        Router::new().route(
            "/v1beta/models/{call}",
            post(
                move |Path(call): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    assert_eq!(call, "gemini-2.5-flash:generateContent");
                    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
                        return (StatusCode::FORBIDDEN, Json(json!({ "error": "bad key" })));
                    }
                    seen.lock().unwrap().push(body);
                    (
                        StatusCode::OK,
                        Json(json!({
                            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
                        })),
                    )
                },
            ),
        )
    }

    pub(crate) const ANALYSIS: &str = r#"[
        {"id": 101, "title": "Immigame", "category": "The End-to-End",
         "description": "Immigration plans, step by step.", "technologies": ["React", "Firebase"]},
        {"id": 102.0, "title": "Retail Forecasting", "category": "The Business Value"},
        {"id": 999, "title": "Ghost"}
    ]"#;

    #[test]
    fn from_key_requires_non_blank_key() {
        assert!(matches!(
            GeminiClient::from_key(None),
            Err(SdkError::MissingCredential)
        ));
        assert!(GeminiClient::from_key(Some("  ")).is_err());
        assert!(GeminiClient::from_key(Some("k")).is_ok());
    }

    #[test]
    fn analysis_ids_accept_integral_floats() {
        let parsed: Vec<RepoAnalysis> = serde_json::from_str(ANALYSIS).unwrap();
        assert_eq!(parsed[1].id, 102);
        assert_eq!(parsed[1].technologies, None);
        assert!(serde_json::from_str::<RepoAnalysis>(r#"{"id": 1.5}"#).is_err());
    }

    #[tokio::test]
    async fn analyze_repos_sends_schema_and_parses_array() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = serve(gemini_mock(ANALYSIS, seen.clone())).await;
        let client = GeminiClient::new("test-key").with_base_url(&base);

        let repos: Vec<GitHubRepo> =
            serde_json::from_value(crate::github::tests::repos_json()).unwrap();
        let analysis = client.analyze_repos(&repos[..2]).await.unwrap();
        assert_eq!(analysis.len(), 3);
        assert_eq!(analysis[0].title.as_deref(), Some("Immigame"));

        let body = seen.lock().unwrap()[0].clone();
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.starts_with("Analyze these GitHub repositories."));
        assert!(prompt.contains("\"name\":\"retail_giant_sales_forecasting\""));
    }

    #[tokio::test]
    async fn malformed_analysis_is_an_error_and_fetch_swallows_it() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = serve(gemini_mock("definitely not json", seen)).await;
        let client = GeminiClient::new("test-key").with_base_url(&base);
        let err = client.analyze_repos(&[]).await.unwrap_err();
        assert!(matches!(err, SdkError::Serialization(_)));
        assert!(client.fetch_analysis(&[]).await.is_empty());
    }

    #[tokio::test]
    async fn wrong_key_is_a_status_error() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = serve(gemini_mock("[]", seen)).await;
        let client = GeminiClient::new("wrong").with_base_url(&base);
        let err = client.chat("hi", &[]).await.unwrap_err();
        assert!(matches!(err, SdkError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn chat_maps_history_roles() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = serve(gemini_mock("Hello from the model", seen.clone())).await;
        let client = GeminiClient::new("test-key").with_base_url(&base);
        let history = [
            ChatTurn {
                role: ChatRole::User,
                content: "hi".into(),
            },
            ChatTurn {
                role: ChatRole::Assistant,
                content: "hello".into(),
            },
        ];

        let reply = client.chat("who is Shravani?", &history).await.unwrap();
        assert_eq!(reply, "Hello from the model");

        let body = seen.lock().unwrap()[0].clone();
        let roles: Vec<&str> = body["contents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, ["user", "model", "user"]);
        assert_eq!(body["contents"][2]["parts"][0]["text"], "who is Shravani?");
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("ShravBot"));
    }

    #[tokio::test]
    async fn blank_reply_is_empty_response() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let base = serve(gemini_mock("   ", seen)).await;
        let client = GeminiClient::new("test-key").with_base_url(&base);
        assert!(matches!(
            client.chat("hi", &[]).await,
            Err(SdkError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let client = GeminiClient::new("test-key").with_base_url(&unreachable_url().await);
        assert!(matches!(
            client.chat("hi", &[]).await,
            Err(SdkError::Http(_))
        ));
    }
}

//! Webhook HTTP route
//!
//! One POST endpoint in the Dialogflow-CX fulfillment shape: the request
//! carries a session path and the user's last answer, the response carries
//! exactly one text message. The session key is extracted from the path
//! here, at the boundary; the core only ever sees an opaque key.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::observability::{Logger, MetricsRegistry};
use crate::orchestrator::TurnOrchestrator;
use crate::session::{InMemorySessionStore, SessionKey};

use super::errors::WebhookResult;

/// Shared webhook state
pub struct WebhookState {
    pub orchestrator: TurnOrchestrator<InMemorySessionStore>,
    session_pattern: Regex,
}

impl WebhookState {
    pub fn new(dataset: Arc<Dataset>, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            orchestrator: TurnOrchestrator::new(dataset, InMemorySessionStore::new(), metrics),
            // Static pattern, cannot fail to compile
            session_pattern: Regex::new(r"sessions/([^/]+)$").expect("session pattern"),
        }
    }

    /// Extracts the opaque session key from a path-like session string.
    ///
    /// Dialogflow sends `projects/.../sessions/<id>`; the trailing segment
    /// is the key. A string that does not match is used whole.
    pub fn session_key(&self, session_path: &str) -> SessionKey {
        match self
            .session_pattern
            .captures(session_path)
            .and_then(|captures| captures.get(1))
        {
            Some(id) => SessionKey::new(id.as_str()),
            None => SessionKey::new(session_path),
        }
    }
}

/// Webhook routes with shared state
pub fn webhook_routes(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route("/", post(webhook_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

/// Inbound fulfillment request. Everything is optional; missing pieces
/// fall back to the "default" session and the "start" sentinel answer.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookRequest {
    #[serde(default, rename = "sessionInfo")]
    pub session_info: SessionInfo,
}

#[derive(Debug, Deserialize)]
pub struct SessionInfo {
    #[serde(default = "default_session")]
    pub session: String,

    #[serde(default)]
    pub parameters: Parameters,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            session: default_session(),
            parameters: Parameters::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Parameters {
    #[serde(default = "default_last_answer")]
    pub last_answer: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            last_answer: default_last_answer(),
        }
    }
}

fn default_session() -> String {
    "default".to_string()
}

// "start" is outside the answer vocabulary, so a first contact applies no
// evidence and goes straight to the opening question
fn default_last_answer() -> String {
    "start".to_string()
}

/// Outbound fulfillment response.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub fulfillment_response: FulfillmentResponse,
}

#[derive(Debug, Serialize)]
pub struct FulfillmentResponse {
    pub messages: Vec<ResponseMessage>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMessage {
    pub text: ResponseText,
}

#[derive(Debug, Serialize)]
pub struct ResponseText {
    pub text: Vec<String>,
}

impl WebhookResponse {
    /// Wraps one message in the fulfillment envelope.
    pub fn single(message: String) -> Self {
        Self {
            fulfillment_response: FulfillmentResponse {
                messages: vec![ResponseMessage {
                    text: ResponseText {
                        text: vec![message],
                    },
                }],
            },
        }
    }
}

// ==================
// Handler
// ==================

/// One turn per request.
async fn webhook_handler(
    State(state): State<Arc<WebhookState>>,
    Json(request): Json<WebhookRequest>,
) -> WebhookResult<Json<WebhookResponse>> {
    let key = state.session_key(&request.session_info.session);
    let reply = state
        .orchestrator
        .handle_turn(&key, &request.session_info.parameters.last_answer)?;

    Logger::info(
        "turn_processed",
        &[("session", key.as_str()), ("phase", reply.phase.as_str())],
    );

    Ok(Json(WebhookResponse::single(reply.message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Candidate;

    fn state() -> WebhookState {
        let dataset = Arc::new(
            Dataset::new(
                vec!["furry".into()],
                vec![
                    Candidate::new("cat", vec![1]),
                    Candidate::new("fish", vec![0]),
                ],
            )
            .unwrap(),
        );
        WebhookState::new(dataset, Arc::new(MetricsRegistry::new()))
    }

    #[test]
    fn test_session_key_trailing_segment() {
        let state = state();
        let key = state.session_key("projects/p/locations/l/agents/a/sessions/abc-123");
        assert_eq!(key.as_str(), "abc-123");
    }

    #[test]
    fn test_session_key_plain_string() {
        let state = state();
        assert_eq!(state.session_key("default").as_str(), "default");
        // A trailing slash defeats the pattern; the whole string is the key
        assert_eq!(state.session_key("sessions/abc/").as_str(), "sessions/abc/");
    }

    #[test]
    fn test_request_defaults() {
        let request: WebhookRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.session_info.session, "default");
        assert_eq!(request.session_info.parameters.last_answer, "start");
    }

    #[test]
    fn test_request_full_envelope() {
        let body = r#"{
            "sessionInfo": {
                "session": "projects/p/sessions/s1",
                "parameters": { "last_answer": "probably not" }
            }
        }"#;
        let request: WebhookRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.session_info.session, "projects/p/sessions/s1");
        assert_eq!(request.session_info.parameters.last_answer, "probably not");
    }

    #[test]
    fn test_response_envelope_shape() {
        let response = WebhookResponse::single("furry?".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json["fulfillment_response"]["messages"][0]["text"]["text"][0],
            "furry?"
        );
        assert_eq!(
            json["fulfillment_response"]["messages"]
                .as_array()
                .unwrap()
                .len(),
            1
        );
    }
}

//! Wire value objects for one request/response exchange with the endpoint.
//!
//! Field names follow the endpoint's camelCase JSON contract. Absent optional
//! fields are sent as `null`, which the endpoint reads as "start a new
//! session" (`sessionId`) or "no directory this turn" (`directoryPath`).

use crate::conversation::entities::ConversationHistory;
use serde::{Deserialize, Serialize};

/// Body of a POST to the session endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExchangeRequest {
    pub session_id: Option<String>,
    pub directory_path: Option<String>,
    pub current_prompt: String,
}

impl SessionExchangeRequest {
    /// Request for a user turn.
    ///
    /// Trims both inputs; a blank directory path becomes `None`.
    pub fn turn(session_id: Option<&str>, directory_path: &str, prompt: &str) -> Self {
        let directory_path = directory_path.trim();
        Self {
            session_id: session_id.map(str::to_string),
            directory_path: (!directory_path.is_empty()).then(|| directory_path.to_string()),
            current_prompt: prompt.trim().to_string(),
        }
    }

    /// Request that only fetches the history of an existing session.
    ///
    /// The endpoint has no read-only route, so this is a "continue" with an
    /// empty prompt and no directory.
    pub fn fetch_history(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            directory_path: None,
            current_prompt: String::new(),
        }
    }

    pub fn starts_new_session(&self) -> bool {
        self.session_id.is_none()
    }
}

/// Successful response body from the session endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExchangeResponse {
    pub session_id: String,
    #[serde(default)]
    pub model_response: String,
    pub full_conversation_history: ConversationHistory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::ConversationTurn;

    #[test]
    fn test_new_session_request_serializes_nulls() {
        let request = SessionExchangeRequest::turn(None, "   ", "Hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sessionId": null,
                "directoryPath": null,
                "currentPrompt": "Hello"
            })
        );
        assert!(request.starts_new_session());
    }

    #[test]
    fn test_turn_request_trims_inputs() {
        let request = SessionExchangeRequest::turn(Some("abc"), "  ./src \n", "  explain  ");
        assert_eq!(request.session_id.as_deref(), Some("abc"));
        assert_eq!(request.directory_path.as_deref(), Some("./src"));
        assert_eq!(request.current_prompt, "explain");
    }

    #[test]
    fn test_fetch_history_request() {
        let request = SessionExchangeRequest::fetch_history("abc");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sessionId": "abc",
                "directoryPath": null,
                "currentPrompt": ""
            })
        );
    }

    #[test]
    fn test_response_deserializes_camel_case() {
        let json = r#"{
            "sessionId": "abc",
            "modelResponse": "Hi",
            "fullConversationHistory": [
                {"role": "user", "parts": [{"text": "Hello"}]},
                {"role": "model", "parts": [{"text": "Hi"}]}
            ]
        }"#;
        let response: SessionExchangeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.session_id, "abc");
        assert_eq!(response.model_response, "Hi");
        assert_eq!(
            response.full_conversation_history.turns(),
            &[ConversationTurn::user("Hello"), ConversationTurn::model("Hi")]
        );
    }

    #[test]
    fn test_response_without_history_is_rejected() {
        let json = r#"{"sessionId": "abc", "modelResponse": "Hi"}"#;
        assert!(serde_json::from_str::<SessionExchangeResponse>(json).is_err());
    }
}

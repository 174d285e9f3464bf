//! Provider trait — the abstraction over the hosted text-generation backend.
//!
//! A Provider knows how to send an assembled request to a backend and return
//! the generated reply. Each invocation is independent: conversation
//! continuity, if any, lives in the system instruction, never in
//! backend-side session state.

use crate::error::ProviderError;
use crate::message::Turn;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The fixed set of backend models a session may select from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelChoice {
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,

    #[serde(rename = "gpt-4o")]
    Gpt4o,

    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ModelChoice {
    /// All selectable models, default first.
    pub const ALL: [ModelChoice; 3] = [Self::Gpt4oMini, Self::Gpt4o, Self::Gpt35Turbo];

    /// The wire identifier sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gpt4oMini => "gpt-4o-mini",
            Self::Gpt4o => "gpt-4o",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|m| m.as_str()).collect();
                format!("unknown model '{s}' (valid: {})", valid.join(", "))
            })
    }
}

/// A single request to the backend: the assembled system/user turns plus
/// generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Which backend model to use
    pub model: ModelChoice,

    /// The request turns — one system entry, one user entry
    pub messages: Vec<Turn>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

pub fn default_temperature() -> f32 {
    0.7
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated assistant turn
    pub message: Turn,

    /// Which model actually responded (may differ from requested)
    pub model: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Provider trait.
///
/// One blocking call per user turn — no retry, no streaming. Failures are
/// returned as values and handled at the call site; a failed turn never
/// terminates the session.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a request and get the complete generated reply.
    async fn complete(
        &self,
        request: ChatRequest,
    ) -> std::result::Result<ChatResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_wire_ids() {
        assert_eq!(ModelChoice::Gpt4oMini.as_str(), "gpt-4o-mini");
        assert_eq!(ModelChoice::Gpt4o.as_str(), "gpt-4o");
        assert_eq!(ModelChoice::Gpt35Turbo.as_str(), "gpt-3.5-turbo");
    }

    #[test]
    fn model_parses_from_wire_id() {
        for model in ModelChoice::ALL {
            let parsed: ModelChoice = model.as_str().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn unknown_model_lists_valid_choices() {
        let err = "gpt-9".parse::<ModelChoice>().unwrap_err();
        assert!(err.contains("gpt-9"));
        assert!(err.contains("gpt-4o-mini"));
    }

    #[test]
    fn default_model_is_mini() {
        assert_eq!(ModelChoice::default(), ModelChoice::Gpt4oMini);
    }

    #[test]
    fn request_defaults() {
        let req = ChatRequest {
            model: ModelChoice::default(),
            messages: vec![],
            temperature: default_temperature(),
            max_tokens: None,
        };
        assert!((req.temperature - 0.7).abs() < f32::EPSILON);
        assert!(req.max_tokens.is_none());
    }

    #[test]
    fn model_choice_serializes_as_wire_id() {
        let json = serde_json::to_string(&ModelChoice::Gpt35Turbo).unwrap();
        assert_eq!(json, "\"gpt-3.5-turbo\"");
        let back: ModelChoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModelChoice::Gpt35Turbo);
    }
}

//! The session pipeline — one user action, one linear sequence.
//!
//! `submit` appends the user turn, assembles the request, makes the one
//! blocking backend call, and either appends the reply or reports the
//! failure. A failed call leaves the conversation with the user turn only
//! and the session stays usable for subsequent turns.

use crate::prompt::PromptAssembler;
use crate::state::SessionState;
use mentor_core::{DetailLevel, ModelChoice, Provider, Result, Turn};
use std::sync::Arc;
use tracing::{debug, warn};

/// Orchestrates a single interactive session against a backend provider.
///
/// The curriculum text is fixed at construction (it was loaded once at
/// process start) and rendered into every request's system instruction
/// unchanged.
pub struct MentorSession {
    provider: Arc<dyn Provider>,
    curriculum_text: String,
    assembler: PromptAssembler,
    state: SessionState,
}

impl MentorSession {
    /// Create a new session over the given provider and curriculum text.
    pub fn new(
        provider: Arc<dyn Provider>,
        curriculum_text: impl Into<String>,
        detail: DetailLevel,
        model: ModelChoice,
    ) -> Self {
        Self {
            provider,
            curriculum_text: curriculum_text.into(),
            assembler: PromptAssembler::default(),
            state: SessionState::new(detail, model),
        }
    }

    /// Override the generation settings.
    pub fn with_generation(mut self, temperature: f32, max_tokens: Option<u32>) -> Self {
        self.assembler = PromptAssembler::new(temperature, max_tokens);
        self
    }

    /// Submit one user input: append → assemble → invoke → append or report.
    ///
    /// On success the conversation gains two turns (user, then assistant)
    /// and the assistant's text is returned. On failure the conversation
    /// keeps only the user turn and the error is returned for display.
    pub async fn submit(&mut self, input: &str) -> Result<String> {
        self.state.conversation.append(Turn::user(input));

        let request = self.assembler.build_request(
            &self.curriculum_text,
            self.state.detail,
            self.state.model,
            input,
        );

        debug!(
            provider = %self.provider.name(),
            model = %self.state.model,
            detail = %self.state.detail,
            "Submitting user turn"
        );

        match self.provider.complete(request).await {
            Ok(response) => {
                let content = response.message.content.clone();
                self.state.conversation.append(response.message);
                Ok(content)
            }
            Err(e) => {
                warn!(error = %e, "Backend call failed; no assistant turn recorded");
                Err(e.into())
            }
        }
    }

    /// Clear the conversation (explicit user action).
    pub fn clear(&mut self) {
        self.state.conversation.clear();
    }

    /// The full ordered transcript, for rendering.
    pub fn transcript(&self) -> &[Turn] {
        self.state.conversation.read()
    }

    /// Change the response detail level.
    pub fn set_detail(&mut self, detail: DetailLevel) {
        self.state.detail = detail;
    }

    /// Change the backend model.
    pub fn set_model(&mut self, model: ModelChoice) {
        self.state.model = model;
    }

    pub fn detail(&self) -> DetailLevel {
        self.state.detail
    }

    pub fn model(&self) -> ModelChoice {
        self.state.model
    }

    /// The curriculum text this session was grounded with.
    pub fn curriculum_text(&self) -> &str {
        &self.curriculum_text
    }
}

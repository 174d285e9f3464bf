//! Explicit per-session state.
//!
//! One of these exists per interactive session. It is created at session
//! start, passed through the pipeline, and dropped at session end — no
//! ambient globals. Detail level and model choice change only on explicit
//! user selection.

use mentor_core::{Conversation, DetailLevel, ModelChoice};
use serde::{Deserialize, Serialize};

/// Everything a session owns: the transcript plus the two user-tunable
/// settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// The append-only transcript
    pub conversation: Conversation,

    /// Current response verbosity
    pub detail: DetailLevel,

    /// Current backend model
    pub model: ModelChoice,
}

impl SessionState {
    /// Create a fresh session with the given settings.
    pub fn new(detail: DetailLevel, model: ModelChoice) -> Self {
        Self {
            conversation: Conversation::new(),
            detail,
            model,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DetailLevel::default(), ModelChoice::default())
    }
}

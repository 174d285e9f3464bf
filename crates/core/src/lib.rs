//! # Mentor Core
//!
//! Domain types, traits, and error definitions for the Mentor chat runtime.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The backend seam (the `Provider` trait) is defined here; implementations
//! live in their own crates. This enables:
//! - Swapping backends via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod curriculum;
pub mod detail;
pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use curriculum::{CurriculumDocument, Section};
pub use detail::DetailLevel;
pub use error::{CurriculumError, Error, ProviderError, Result};
pub use message::{Conversation, ConversationId, Role, Turn};
pub use provider::{ChatRequest, ChatResponse, ModelChoice, Provider, Usage};

//! Backend implementations for Mentor.
//!
//! All providers implement the `mentor_core::Provider` trait; the session
//! pipeline calls `complete()` without knowing which backend is behind it.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

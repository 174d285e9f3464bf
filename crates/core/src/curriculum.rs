//! Curriculum document types and the text rendering contract.
//!
//! A curriculum is fetched from the document store exactly once per process
//! start, rendered to markdown, and then baked unchanged into the system
//! prompt for the lifetime of the session.

use serde::{Deserialize, Serialize};

/// Heading used when a document carries no title of its own.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Curriculum";

/// Subheading used for sections without a title.
pub const UNTITLED_SECTION: &str = "Untitled Section";

/// Body used for sections without content.
pub const EMPTY_SECTION_CONTENT: &str = "No content available";

/// A structured learning document: a title plus an ordered sequence of
/// sections. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumDocument {
    /// The document store identifier this document was fetched under.
    #[serde(default)]
    pub id: String,

    /// Document title; `None` renders as [`DEFAULT_DOCUMENT_TITLE`].
    #[serde(default)]
    pub title: Option<String>,

    /// Ordered sections. One level — no nesting.
    pub sections: Vec<Section>,
}

/// A single curriculum section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    /// Optional practical exercise text, rendered as its own block.
    #[serde(default)]
    pub hands_on: Option<String>,
}

impl CurriculumDocument {
    /// Flatten the document into the human-readable text that goes into the
    /// system prompt: title heading, then per section a subheading, the
    /// content, and a "Hands-on" block when one is present and non-empty.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "# {}\n\n",
            self.title.as_deref().unwrap_or(DEFAULT_DOCUMENT_TITLE)
        );

        for section in &self.sections {
            out.push_str(&format!(
                "## {}\n",
                section.title.as_deref().unwrap_or(UNTITLED_SECTION)
            ));
            out.push_str(&format!(
                "{}\n\n",
                section.content.as_deref().unwrap_or(EMPTY_SECTION_CONTENT)
            ));
            if let Some(hands_on) = section.hands_on.as_deref().filter(|h| !h.is_empty()) {
                out.push_str(&format!("### Hands-on:\n{hands_on}\n\n"));
            }
        }

        out
    }
}

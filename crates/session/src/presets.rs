//! Preset queries and topic suggestions.
//!
//! The quick-action prompts a control surface can offer alongside free-text
//! input. Each preset maps to a fixed question that enters the pipeline
//! exactly as typed input would.

use serde::{Deserialize, Serialize};

/// The fixed set of quick-action queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetQuery {
    ExplainConcept,
    PracticeExercises,
    LearningPath,
    StudyTips,
}

impl PresetQuery {
    /// All presets in display order.
    pub const ALL: [PresetQuery; 4] = [
        Self::ExplainConcept,
        Self::PracticeExercises,
        Self::LearningPath,
        Self::StudyTips,
    ];

    /// Short label for the control surface.
    pub fn label(self) -> &'static str {
        match self {
            Self::ExplainConcept => "Explain a concept",
            Self::PracticeExercises => "Practice exercises",
            Self::LearningPath => "Learning path",
            Self::StudyTips => "Study tips",
        }
    }

    /// The question submitted to the pipeline.
    pub fn question(self) -> &'static str {
        match self {
            Self::ExplainConcept => {
                "Can you explain the most important concept in this curriculum?"
            }
            Self::PracticeExercises => {
                "Can you give me some practice exercises related to the curriculum?"
            }
            Self::LearningPath => "What's the recommended learning path for this curriculum?",
            Self::StudyTips => "What are some effective study strategies for this material?",
        }
    }
}

/// Topic suggestions offered for quick access.
pub const SUGGESTED_TOPICS: [&str; 5] = [
    "Introduction to the Course",
    "Key Concepts",
    "Practice Exercises",
    "Quiz Preparation",
    "Project Ideas",
];

/// The question submitted when a suggested topic is selected.
pub fn topic_question(topic: &str) -> String {
    format!("Tell me about {topic}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn preset_questions_nonempty_and_distinct() {
        let questions: HashSet<&str> = PresetQuery::ALL.iter().map(|p| p.question()).collect();
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(|q| !q.is_empty()));
    }

    #[test]
    fn labels_match_controls() {
        assert_eq!(PresetQuery::ExplainConcept.label(), "Explain a concept");
        assert_eq!(PresetQuery::StudyTips.label(), "Study tips");
    }

    #[test]
    fn topic_question_template() {
        assert_eq!(
            topic_question("Key Concepts"),
            "Tell me about Key Concepts"
        );
    }

    #[test]
    fn five_suggested_topics() {
        assert_eq!(SUGGESTED_TOPICS.len(), 5);
    }
}

//! Prompt assembly — turns the loaded curriculum, the session's detail
//! setting, and the latest user input into a single backend request.
//!
//! The system instruction is a fixed-order concatenation: persona statement,
//! curriculum text, detail instruction, behavioral guidance. The request
//! carries exactly two entries — the system instruction and the latest user
//! turn. Prior conversation turns are never replayed to the backend; any
//! continuity the mentor shows comes from the system instruction alone.

use mentor_core::provider::default_temperature;
use mentor_core::{ChatRequest, DetailLevel, ModelChoice, Turn};

/// Persona/role statement. The curriculum text follows it directly.
const PERSONA: &str = "You are a helpful assistant and a personal mentor. \
You are familiar with the following curriculum:";

/// Behavioral guidance appended after the detail instruction.
const GUIDANCE: &str = "Please respond to the user queries based on the curriculum, \
helping them navigate through the learning material and providing guidance as a mentor.\n\
Use friendly, encouraging language and occasionally ask follow-up questions to check understanding.";

/// Stateless assembler carrying the session's generation settings.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    temperature: f32,
    max_tokens: Option<u32>,
}

impl PromptAssembler {
    /// Create an assembler with the given generation settings.
    pub fn new(temperature: f32, max_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    /// Compose the system instruction:
    /// persona → curriculum → detail instruction → guidance.
    pub fn system_instruction(&self, curriculum_text: &str, detail: DetailLevel) -> String {
        format!(
            "{PERSONA}\n{curriculum_text}\n\n{}\n\n{GUIDANCE}",
            detail.instruction()
        )
    }

    /// Build the two-entry request for the latest user input.
    pub fn build_request(
        &self,
        curriculum_text: &str,
        detail: DetailLevel,
        model: ModelChoice,
        user_input: &str,
    ) -> ChatRequest {
        ChatRequest {
            model,
            messages: vec![
                Turn::system(self.system_instruction(curriculum_text, detail)),
                Turn::user(format!("Question: {user_input}")),
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new(default_temperature(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::Role;

    const CURRICULUM: &str = "# Sample\n\n## Module 1\nBasics\n";

    #[test]
    fn system_instruction_ordering_is_fixed() {
        let assembler = PromptAssembler::default();
        let system = assembler.system_instruction(CURRICULUM, DetailLevel::Brief);

        let persona_at = system.find("personal mentor").unwrap();
        let curriculum_at = system.find("## Module 1").unwrap();
        let detail_at = system.find(DetailLevel::Brief.instruction()).unwrap();
        let guidance_at = system.find("friendly, encouraging language").unwrap();

        assert!(persona_at < curriculum_at);
        assert!(curriculum_at < detail_at);
        assert!(detail_at < guidance_at);
    }

    #[test]
    fn curriculum_text_is_embedded_unchanged() {
        let assembler = PromptAssembler::default();
        let system = assembler.system_instruction(CURRICULUM, DetailLevel::Balanced);
        assert!(system.contains(CURRICULUM));
    }

    #[test]
    fn detail_instruction_tracks_level() {
        let assembler = PromptAssembler::default();
        for detail in DetailLevel::ALL {
            let system = assembler.system_instruction(CURRICULUM, detail);
            assert!(system.contains(detail.instruction()));
        }
    }

    #[test]
    fn request_has_exactly_system_and_user_entries() {
        let assembler = PromptAssembler::new(0.2, Some(512));
        let request = assembler.build_request(
            CURRICULUM,
            DetailLevel::Balanced,
            ModelChoice::Gpt4o,
            "What is Module 1?",
        );

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.messages[1].content, "Question: What is Module 1?");
        assert_eq!(request.model, ModelChoice::Gpt4o);
        assert!((request.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(request.max_tokens, Some(512));
    }
}

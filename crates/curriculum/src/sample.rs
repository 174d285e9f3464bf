//! The fixed fallback content used when no curriculum can be loaded.

/// Multi-module sample curriculum. Substituted verbatim whenever the
/// document store is unconfigured, unreachable, or returns a document the
/// renderer cannot use.
pub const SAMPLE_CURRICULUM: &str = "\
# Sample Curriculum

## Module 1: Introduction
- Overview of the subject
- Key terminology
- Historical context

## Module 2: Core Concepts
- Fundamental principles
- Theoretical frameworks
- Practical applications

## Module 3: Advanced Topics
- Specialized techniques
- Current research
- Future directions
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_covers_three_modules() {
        assert!(SAMPLE_CURRICULUM.starts_with("# Sample Curriculum"));
        assert!(SAMPLE_CURRICULUM.contains("## Module 1: Introduction"));
        assert!(SAMPLE_CURRICULUM.contains("## Module 2: Core Concepts"));
        assert!(SAMPLE_CURRICULUM.contains("## Module 3: Advanced Topics"));
    }
}

//! Detail-level policy — maps the 1–5 verbosity setting to its instruction
//! fragment.
//!
//! A closed enumeration: the five levels are the only values that exist.
//! Out-of-range integers are rejected at the control surface via
//! [`DetailLevel::from_level`] and never reach the policy itself.

use serde::{Deserialize, Serialize};

/// The response verbosity setting, one current value per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// 1 — key points only
    Brief,
    /// 2 — short with essential details
    Short,
    /// 3 — the default
    #[default]
    Balanced,
    /// 4 — explanations with examples
    Comprehensive,
    /// 5 — in-depth, multiple examples
    Exhaustive,
}

impl DetailLevel {
    /// All levels in ascending order.
    pub const ALL: [DetailLevel; 5] = [
        Self::Brief,
        Self::Short,
        Self::Balanced,
        Self::Comprehensive,
        Self::Exhaustive,
    ];

    /// Parse a 1–5 integer as supplied by an input control.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Brief),
            2 => Some(Self::Short),
            3 => Some(Self::Balanced),
            4 => Some(Self::Comprehensive),
            5 => Some(Self::Exhaustive),
            _ => None,
        }
    }

    /// The numeric level, 1–5.
    pub fn level(self) -> u8 {
        match self {
            Self::Brief => 1,
            Self::Short => 2,
            Self::Balanced => 3,
            Self::Comprehensive => 4,
            Self::Exhaustive => 5,
        }
    }

    /// The instruction fragment appended to the system prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Brief => "Provide very brief, concise responses focusing only on key points.",
            Self::Short => "Keep explanations short but include essential details.",
            Self::Balanced => "Balance detail with clarity in your explanations.",
            Self::Comprehensive => {
                "Provide comprehensive explanations with examples where helpful."
            }
            Self::Exhaustive => {
                "Give detailed, in-depth explanations with multiple examples and elaborations."
            }
        }
    }
}

// Display shows the numeric level, matching the control the setting came from.
impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn five_instructions_nonempty_and_distinct() {
        let instructions: Vec<&str> = DetailLevel::ALL.iter().map(|d| d.instruction()).collect();
        assert_eq!(instructions.len(), 5);
        assert!(instructions.iter().all(|i| !i.is_empty()));

        let unique: HashSet<&str> = instructions.iter().copied().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn level_roundtrip() {
        for level in 1..=5u8 {
            let detail = DetailLevel::from_level(level).unwrap();
            assert_eq!(detail.level(), level);
        }
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(DetailLevel::from_level(0).is_none());
        assert!(DetailLevel::from_level(6).is_none());
        assert!(DetailLevel::from_level(255).is_none());
    }

    #[test]
    fn default_is_balanced() {
        assert_eq!(DetailLevel::default(), DetailLevel::Balanced);
        assert_eq!(DetailLevel::default().level(), 3);
    }
}

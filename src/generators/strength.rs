// src/generators/strength.rs
use std::collections::HashSet;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::StrengthLabel;

pub const MIN_STRONG_LENGTH: usize = 12;
pub const MIN_UNIQUE_RATIO: f64 = 0.7;

/// Outcome of each strength criterion for a single password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub diverse: bool,
}

impl StrengthReport {
    pub fn evaluate(password: &str) -> Self {
        let length = password.chars().count();
        let unique = password.chars().collect::<HashSet<_>>().len();

        Self {
            long_enough: length >= MIN_STRONG_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
            diverse: unique as f64 >= length as f64 * MIN_UNIQUE_RATIO,
        }
    }

    pub fn satisfied(&self) -> usize {
        [
            self.long_enough,
            self.has_uppercase,
            self.has_lowercase,
            self.has_digit,
            self.has_symbol,
            self.diverse,
        ]
        .iter()
        .filter(|met| **met)
        .count()
    }

    pub fn label(&self) -> StrengthLabel {
        match self.satisfied() {
            0..=2 => StrengthLabel::VeryWeak,
            3 => StrengthLabel::Weak,
            4 => StrengthLabel::Moderate,
            5 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// Suggestions for each unmet criterion.
    pub fn feedback(&self) -> Vec<String> {
        let mut feedback = Vec::new();
        if !self.long_enough {
            feedback.push(format!("Increase password length to at least {} characters", MIN_STRONG_LENGTH));
        }
        if !self.has_uppercase {
            feedback.push("Add uppercase letters".to_string());
        }
        if !self.has_lowercase {
            feedback.push("Add lowercase letters".to_string());
        }
        if !self.has_digit {
            feedback.push("Add numbers".to_string());
        }
        if !self.has_symbol {
            feedback.push("Add symbols".to_string());
        }
        if !self.diverse {
            feedback.push("Avoid repeating the same characters".to_string());
        }
        feedback
    }
}

/// First entry of a newline-joined batch.
pub fn first_entry(batch: &str) -> &str {
    batch.split('\n').next().unwrap_or_default()
}

/// Rates the first password of a (possibly multi-line) batch.
pub fn score(password: &str) -> StrengthLabel {
    StrengthReport::evaluate(first_entry(password)).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_mixed_password_is_very_strong() {
        assert_eq!(score("Tr0ub4dor&3X9"), StrengthLabel::VeryStrong);
    }

    #[test]
    fn repeated_lowercase_is_very_weak() {
        assert_eq!(score("aaaa"), StrengthLabel::VeryWeak);
        assert_eq!(score(""), StrengthLabel::VeryWeak);
    }

    #[test]
    fn each_count_maps_to_its_label() {
        // lowercase, diverse
        assert_eq!(score("abc"), StrengthLabel::VeryWeak);
        // lowercase, digit, diverse
        assert_eq!(score("abc1"), StrengthLabel::Weak);
        // upper, lower, digit, diverse
        assert_eq!(score("Abc1"), StrengthLabel::Moderate);
        // upper, lower, digit, symbol, diverse
        assert_eq!(score("Abc1!"), StrengthLabel::Strong);
        // all six
        assert_eq!(score("Abcdefgh1!xyz"), StrengthLabel::VeryStrong);
    }

    #[test]
    fn only_first_line_is_scored() {
        assert_eq!(score("aaaa\nTr0ub4dor&3X9"), StrengthLabel::VeryWeak);
        assert_eq!(score("Tr0ub4dor&3X9\naaaa"), StrengthLabel::VeryStrong);
    }

    #[test]
    fn diversity_uses_distinct_ratio() {
        // 7 distinct of 10
        assert!(StrengthReport::evaluate("abcdefgaaa").diverse);
        // 6 distinct of 10
        assert!(!StrengthReport::evaluate("abcdefaaaa").diverse);
    }

    #[test]
    fn segment_hyphens_count_as_symbols() {
        let report = StrengthReport::evaluate("abcde-fghij");
        assert!(report.has_symbol);
        assert!(!report.has_digit);
    }

    #[test]
    fn feedback_lists_unmet_criteria() {
        let feedback = StrengthReport::evaluate("abc").feedback();
        assert_eq!(feedback.len(), 4);
        assert!(StrengthReport::evaluate("Tr0ub4dor&3X9").feedback().is_empty());
    }
}

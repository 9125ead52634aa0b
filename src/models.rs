// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// One selectable dictionary word and its relative likelihood.
///
/// Weights are relative, they do not need to sum to one. Older exports
/// name the text field `option`, so both keys are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightedOption {
    #[serde(alias = "option")]
    pub text: String,
    pub weight: f64,
}

impl WeightedOption {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && self.weight.is_finite() && self.weight > 0.0
    }
}

// Word mode request
#[derive(Debug, Clone)]
pub struct WordRequest {
    pub options: Vec<WeightedOption>,
    pub num_parts: usize,
    pub substitute_chars: bool,
    pub count: usize,
}

// Character mode request
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRequest {
    pub use_segments: bool,
    pub segment_count: usize,
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub include_uppercase: bool,
    pub count: usize,
}

impl Default for CharacterRequest {
    fn default() -> Self {
        Self {
            use_segments: true,
            segment_count: 3,
            length: 12,
            include_numbers: false,
            include_symbols: false,
            include_uppercase: false,
            count: 1,
        }
    }
}

/// Ordered passwords produced by one generation call.
///
/// `Display` renders the newline-joined transport form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedBatch {
    passwords: Vec<String>,
}

impl GeneratedBatch {
    pub fn passwords(&self) -> &[String] {
        &self.passwords
    }

    pub fn first(&self) -> Option<&str> {
        self.passwords.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.passwords
    }
}

impl From<Vec<String>> for GeneratedBatch {
    fn from(passwords: Vec<String>) -> Self {
        Self { passwords }
    }
}

impl FromIterator<String> for GeneratedBatch {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            passwords: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for GeneratedBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.passwords.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Saved generator preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub num_options: usize,
    pub password_length: usize,
    pub segment_count: usize,
    pub use_segments: bool,
    pub use_custom_list: bool,
    pub use_default_list: bool,
    pub replace_chars: bool,
    pub is_advanced: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub include_uppercase: bool,
    pub password_amount: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            num_options: 2,
            password_length: 12,
            segment_count: 3,
            use_segments: true,
            use_custom_list: false,
            use_default_list: true,
            replace_chars: true,
            is_advanced: false,
            include_numbers: false,
            include_symbols: false,
            include_uppercase: false,
            password_amount: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_option_key_is_accepted() {
        let parsed: WeightedOption =
            serde_json::from_str(r#"{"option": "river", "weight": 2}"#).unwrap();
        assert_eq!(parsed, WeightedOption::new("river", 2.0));
    }

    #[test]
    fn options_serialize_with_text_key() {
        let json = serde_json::to_value(WeightedOption::new("cloud", 1.5)).unwrap();
        assert_eq!(json["text"], "cloud");
        assert_eq!(json["weight"], 1.5);
    }

    #[test]
    fn invalid_options_are_detected() {
        assert!(WeightedOption::new("a", 1.0).is_valid());
        assert!(!WeightedOption::new("", 1.0).is_valid());
        assert!(!WeightedOption::new("   ", 1.0).is_valid());
        assert!(!WeightedOption::new("a", 0.0).is_valid());
        assert!(!WeightedOption::new("a", -3.0).is_valid());
        assert!(!WeightedOption::new("a", f64::NAN).is_valid());
    }

    #[test]
    fn batch_display_joins_with_newlines() {
        let batch = GeneratedBatch::from(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(batch.to_string(), "one\ntwo");
        assert_eq!(batch.first(), Some("one"));

        let empties = GeneratedBatch::from(vec![String::new(); 3]);
        assert_eq!(empties.to_string(), "\n\n");
    }

    #[test]
    fn strength_labels_serialize_as_display_text() {
        let json = serde_json::to_string(&StrengthLabel::VeryStrong).unwrap();
        assert_eq!(json, "\"Very Strong\"");
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
    }

    #[test]
    fn partial_preferences_fill_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"numOptions": 4}"#).unwrap();
        assert_eq!(prefs.num_options, 4);
        assert_eq!(prefs.password_length, 12);
        assert!(prefs.use_default_list);
    }
}

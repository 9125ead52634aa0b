// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::generators::StrengthReport;
use crate::models::{StrengthLabel, WeightedOption};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StandardOptionsResponse {
    /// Built-in dictionary entries
    pub options: Vec<WeightedOption>,
}

// Password generation types
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordGenerationRequest {
    /// Word list to draw from (default list and custom list, already merged)
    #[serde(default)]
    pub options: Vec<WeightedOption>,
    /// Number of words per password (default: server setting)
    pub num_options: Option<usize>,
    /// Apply leet substitution (default: true)
    pub replace_chars: Option<bool>,
    /// Number of passwords to generate (default: 1)
    pub amount: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterGenerationRequest {
    /// Build hyphen-joined five character segments (default: true)
    pub use_segments: Option<bool>,
    /// Number of segments (default: server setting)
    pub segment_count: Option<usize>,
    /// Password length when not segmenting (default: server setting)
    pub password_length: Option<usize>,
    /// Include digits (default: false)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: false)
    pub include_symbols: Option<bool>,
    /// Include uppercase letters (default: false)
    pub include_uppercase: Option<bool>,
    /// Number of passwords to generate (default: 1)
    pub amount: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated passwords, newline-joined
    pub password: Option<String>,
    /// Strength of the first generated password
    pub strength: Option<StrengthLabel>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            strength: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength label
    pub strength: StrengthLabel,
    /// Outcome of each criterion
    pub criteria: StrengthReport,
    /// Suggestions for improvement
    pub feedback: Vec<String>,
}

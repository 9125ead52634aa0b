// src/wordlist/standard.rs
use std::sync::OnceLock;

use crate::models::WeightedOption;

static STANDARD_OPTIONS_JSON: &str = include_str!("standard_options.json");

static STANDARD_OPTIONS: OnceLock<Vec<WeightedOption>> = OnceLock::new();

/// The built-in dictionary.
pub fn standard_options() -> &'static [WeightedOption] {
    STANDARD_OPTIONS.get_or_init(|| match serde_json::from_str(STANDARD_OPTIONS_JSON) {
        Ok(options) => options,
        Err(e) => {
            log::error!("Built-in word list is malformed: {}", e);
            Vec::new()
        }
    })
}

/// Concatenates the built-in list and the custom list, in that order.
pub fn merge_sources(use_default: bool, use_custom: bool, custom: &[WeightedOption]) -> Vec<WeightedOption> {
    let mut options = Vec::new();
    if use_default {
        options.extend_from_slice(standard_options());
    }
    if use_custom {
        options.extend_from_slice(custom);
    }
    options
}

// src/wordlist/transfer.rs
use std::fs;
use std::path::Path;
use serde_json::Value;

use crate::models::WeightedOption;
use super::{Result, WordListError};

pub const DEFAULT_EXPORT_FILE: &str = "passwordOptions.json";

/// Rejects blank texts and non-positive or non-finite weights.
pub fn validate_options(options: &[WeightedOption]) -> Result<()> {
    for (index, opt) in options.iter().enumerate() {
        if opt.text.trim().is_empty() {
            return Err(WordListError::InvalidOption(index, "text is empty".to_string()));
        }
        if !opt.is_valid() {
            return Err(WordListError::InvalidOption(
                index,
                format!("weight {} for '{}' must be a positive number", opt.weight, opt.text),
            ));
        }
    }
    Ok(())
}

/// Parses a word list document. The top-level value must be an array.
pub fn parse_options(content: &str) -> Result<Vec<WeightedOption>> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(WordListError::NotAnArray);
    }
    let options: Vec<WeightedOption> = serde_json::from_value(value)?;
    validate_options(&options)?;
    Ok(options)
}

pub fn import_options(path: &Path) -> Result<Vec<WeightedOption>> {
    let content = fs::read_to_string(path)?;
    let options = parse_options(&content)?;
    log::info!("Imported {} word list entries from {}", options.len(), path.display());
    Ok(options)
}

pub fn export_options(path: &Path, options: &[WeightedOption]) -> Result<()> {
    if options.is_empty() {
        return Err(WordListError::NothingToExport);
    }
    let content = serde_json::to_string_pretty(options)?;
    fs::write(path, content)?;
    log::info!("Exported {} word list entries to {}", options.len(), path.display());
    Ok(())
}

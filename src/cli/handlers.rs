// src/cli/handlers.rs
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::core::Config;
use crate::generators::{PasswordGenerator, RandomSource, StrengthReport};
use crate::models::{CharacterRequest, GeneratedBatch, Preferences, WeightedOption, WordRequest};
use crate::wordlist::{self, WordListStore};
use super::commands::{CharArgs, WordArgs};

// Handlers for CLI commands

pub fn load_preferences(store: &WordListStore, config: &Config) -> Result<Preferences, Box<dyn Error>> {
    match store.load_preferences() {
        Ok(Some(prefs)) => Ok(prefs),
        Ok(None) => Ok(config.default_preferences()),
        Err(e) => {
            log::warn!("Saved preferences are unreadable, using defaults: {}", e);
            Ok(config.default_preferences())
        }
    }
}

pub fn word_request(prefs: &Preferences, store: &WordListStore) -> Result<WordRequest, Box<dyn Error>> {
    let custom = if prefs.use_custom_list {
        store.load_custom_options()?
    } else {
        Vec::new()
    };

    Ok(WordRequest {
        options: wordlist::merge_sources(prefs.use_default_list, prefs.use_custom_list, &custom),
        num_parts: prefs.num_options,
        substitute_chars: prefs.replace_chars,
        count: prefs.password_amount,
    })
}

pub fn character_request(prefs: &Preferences) -> CharacterRequest {
    CharacterRequest {
        use_segments: prefs.use_segments,
        segment_count: prefs.segment_count,
        length: prefs.password_length,
        include_numbers: prefs.include_numbers,
        include_symbols: prefs.include_symbols,
        include_uppercase: prefs.include_uppercase,
        count: prefs.password_amount,
    }
}

/// Generates word passwords from complete preferences and saves them.
pub fn generate_words<S: RandomSource>(
    generator: &mut PasswordGenerator<S>,
    store: &WordListStore,
    mut prefs: Preferences,
) -> Result<GeneratedBatch, Box<dyn Error>> {
    prefs.is_advanced = false;
    let request = word_request(&prefs, store)?;
    if request.options.is_empty() {
        log::warn!("No word list selected, word passwords will be empty");
    }
    let batch = generator.compose_word_batch(&request);

    store.save_preferences(&prefs)?;
    Ok(batch)
}

/// Generates character passwords from complete preferences and saves them.
pub fn generate_chars<S: RandomSource>(
    generator: &mut PasswordGenerator<S>,
    store: &WordListStore,
    mut prefs: Preferences,
) -> Result<GeneratedBatch, Box<dyn Error>> {
    prefs.is_advanced = true;
    let batch = generator.compose_character_batch(&character_request(&prefs));

    store.save_preferences(&prefs)?;
    Ok(batch)
}

pub fn handle_words<S: RandomSource>(
    generator: &mut PasswordGenerator<S>,
    store: &WordListStore,
    config: &Config,
    args: &WordArgs,
) -> Result<GeneratedBatch, Box<dyn Error>> {
    let mut prefs = load_preferences(store, config)?;
    args.apply(&mut prefs);
    generate_words(generator, store, prefs)
}

pub fn handle_chars<S: RandomSource>(
    generator: &mut PasswordGenerator<S>,
    store: &WordListStore,
    config: &Config,
    args: &CharArgs,
) -> Result<GeneratedBatch, Box<dyn Error>> {
    let mut prefs = load_preferences(store, config)?;
    args.apply(&mut prefs);
    generate_chars(generator, store, prefs)
}

/// Writes a batch to a text file, one password per line.
pub fn save_batch(batch: &GeneratedBatch, path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, batch.to_string())?;
    log::info!("Saved {} password(s) to {}", batch.len(), path.display());
    Ok(())
}

pub fn handle_score(password: &str) -> StrengthReport {
    StrengthReport::evaluate(crate::generators::strength::first_entry(password))
}

pub fn handle_list(store: &WordListStore) -> Result<Vec<WeightedOption>, Box<dyn Error>> {
    Ok(store.load_custom_options()?)
}

pub fn handle_add(store: &WordListStore, text: &str, weight: f64) -> Result<Vec<WeightedOption>, Box<dyn Error>> {
    Ok(store.add_option(WeightedOption::new(text, weight))?)
}

pub fn handle_remove(store: &WordListStore, text: &str) -> Result<bool, Box<dyn Error>> {
    Ok(store.remove_option(text)?)
}

/// Merges the file into the custom list. Returns the number of imported
/// entries.
pub fn handle_import(store: &WordListStore, path: &Path) -> Result<usize, Box<dyn Error>> {
    let options = wordlist::import_options(path)?;
    let count = options.len();
    store.merge_options(options)?;
    Ok(count)
}

pub fn handle_export(store: &WordListStore, path: &Path) -> Result<usize, Box<dyn Error>> {
    let options = store.load_custom_options()?;
    wordlist::export_options(path, &options)?;
    Ok(options.len())
}

// src/wordlist/store.rs
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::models::{Preferences, WeightedOption};
use super::{Result, WordListError};

pub const CUSTOM_OPTIONS_FILE: &str = "passwordOptions.json";
pub const PREFERENCES_FILE: &str = "genpassOptions.json";

fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Custom word list and generator preferences kept as JSON files in one
/// directory.
#[derive(Debug, Clone)]
pub struct WordListStore {
    dir: PathBuf,
}

impl WordListStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `dir`, or at the platform config directory.
    pub fn open(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Ok(Self::new(dir)),
            None => crate::utils::get_app_config_dir()
                .map(Self::new)
                .ok_or(WordListError::NoDataDir),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let temp_file = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        temp_file.persist(self.dir.join(name))?;
        Ok(())
    }

    /// Saved custom list, empty when nothing was saved yet.
    pub fn load_custom_options(&self) -> Result<Vec<WeightedOption>> {
        Ok(self.read_json(CUSTOM_OPTIONS_FILE)?.unwrap_or_default())
    }

    pub fn save_custom_options(&self, options: &[WeightedOption]) -> Result<()> {
        self.write_json(CUSTOM_OPTIONS_FILE, options)?;
        log::debug!("Saved {} custom word list entries", options.len());
        Ok(())
    }

    /// Adds `option`, replacing the weight of an entry with the same text.
    /// The text is trimmed and lowercased first.
    pub fn add_option(&self, option: WeightedOption) -> Result<Vec<WeightedOption>> {
        let option = WeightedOption::new(normalize_text(&option.text), option.weight);
        self.merge_options(vec![option])
    }

    /// Merges `incoming` into the saved list. Entries whose text is already
    /// present take the incoming weight; the rest are appended in order.
    pub fn merge_options(&self, incoming: Vec<WeightedOption>) -> Result<Vec<WeightedOption>> {
        super::validate_options(&incoming)?;

        let mut options = self.load_custom_options()?;
        for option in incoming {
            match options.iter_mut().find(|existing| existing.text == option.text) {
                Some(existing) => existing.weight = option.weight,
                None => options.push(option),
            }
        }
        self.save_custom_options(&options)?;
        Ok(options)
    }

    /// Returns whether an entry with `text` was removed. Matches the text as
    /// given or in its normalised form.
    pub fn remove_option(&self, text: &str) -> Result<bool> {
        let normalized = normalize_text(text);
        let mut options = self.load_custom_options()?;
        let before = options.len();
        options.retain(|opt| opt.text != text && opt.text != normalized);
        if options.len() == before {
            return Ok(false);
        }
        self.save_custom_options(&options)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.save_custom_options(&[])
    }

    /// Saved preferences, `None` when nothing was saved yet.
    pub fn load_preferences(&self) -> Result<Option<Preferences>> {
        self.read_json(PREFERENCES_FILE)
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        self.write_json(PREFERENCES_FILE, preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_load_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());
        assert!(store.load_custom_options().unwrap().is_empty());
        assert!(store.load_preferences().unwrap().is_none());
    }

    #[test]
    fn custom_options_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path().join("nested"));
        let options = vec![WeightedOption::new("copper", 2.0)];

        store.save_custom_options(&options).unwrap();
        assert_eq!(store.load_custom_options().unwrap(), options);
        assert!(dir.path().join("nested").join(CUSTOM_OPTIONS_FILE).exists());
    }

    #[test]
    fn add_replaces_existing_weight() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());

        store.add_option(WeightedOption::new("violet", 1.0)).unwrap();
        store.add_option(WeightedOption::new("maple", 1.0)).unwrap();
        let options = store.add_option(WeightedOption::new("violet", 5.0)).unwrap();

        assert_eq!(
            options,
            vec![WeightedOption::new("violet", 5.0), WeightedOption::new("maple", 1.0)]
        );
        assert_eq!(store.load_custom_options().unwrap(), options);
    }

    #[test]
    fn add_rejects_invalid_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());
        assert!(store.add_option(WeightedOption::new("thunder", -1.0)).is_err());
        assert!(store.load_custom_options().unwrap().is_empty());
    }

    #[test]
    fn added_words_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());

        store.add_option(WeightedOption::new("  River ", 2.0)).unwrap();
        let options = store.add_option(WeightedOption::new("RIVER", 3.0)).unwrap();
        assert_eq!(options, vec![WeightedOption::new("river", 3.0)]);

        assert!(store.add_option(WeightedOption::new("   ", 1.0)).is_err());
        assert_eq!(store.load_custom_options().unwrap().len(), 1);

        assert!(store.remove_option(" River").unwrap());
        assert!(store.load_custom_options().unwrap().is_empty());
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());
        store.add_option(WeightedOption::new("harbor", 1.0)).unwrap();
        store.add_option(WeightedOption::new("cedar", 1.0)).unwrap();

        let merged = store
            .merge_options(vec![WeightedOption::new("cedar", 4.0), WeightedOption::new("Ember", 2.0)])
            .unwrap();
        assert_eq!(
            merged,
            vec![
                WeightedOption::new("harbor", 1.0),
                WeightedOption::new("cedar", 4.0),
                WeightedOption::new("Ember", 2.0),
            ]
        );
        assert_eq!(store.load_custom_options().unwrap(), merged);
    }

    #[test]
    fn remove_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());
        store.add_option(WeightedOption::new("stone", 1.0)).unwrap();
        store.add_option(WeightedOption::new("forest", 1.0)).unwrap();

        assert!(store.remove_option("stone").unwrap());
        assert!(!store.remove_option("stone").unwrap());
        assert_eq!(store.load_custom_options().unwrap().len(), 1);

        store.clear().unwrap();
        assert!(store.load_custom_options().unwrap().is_empty());
    }

    #[test]
    fn preferences_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordListStore::new(dir.path());
        let prefs = Preferences {
            num_options: 3,
            include_symbols: true,
            ..Preferences::default()
        };

        store.save_preferences(&prefs).unwrap();
        assert_eq!(store.load_preferences().unwrap(), Some(prefs));
    }
}

// src/cli/commands.rs
use std::path::PathBuf;
use clap::{Args as ClapArgs, Subcommand};

use crate::models::Preferences;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate word-based passwords
    Words(WordArgs),

    /// Generate character-based passwords
    Chars(CharArgs),

    /// Rate the strength of a password
    Score {
        /// Password to rate (only the first line is considered)
        #[arg(required = true)]
        password: String,
    },

    /// Show the custom word list
    List,

    /// Add a word to the custom list, or change its weight
    Add {
        /// Word to add
        #[arg(required = true)]
        text: String,

        /// Relative likelihood of the word
        #[arg(long, short, default_value_t = 1.0)]
        weight: f64,
    },

    /// Remove a word from the custom list
    Remove {
        /// Word to remove
        #[arg(required = true)]
        text: String,
    },

    /// Remove every word from the custom list
    Clear,

    /// Merge a JSON file into the custom list
    Import {
        /// Path to a JSON array of {text, weight} records
        #[arg(required = true)]
        path: PathBuf,
    },

    /// Write the custom list to a JSON file
    Export {
        /// Destination (default: passwordOptions.json)
        path: Option<PathBuf>,
    },

    /// Run the HTTP generation service
    Serve {
        /// API server port
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Resolves a `--flag`/`--no-flag` pair. Clap keeps only the last of the
/// two, so at most one is set.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Word mode flags. Omitted flags fall back to saved preferences.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct WordArgs {
    /// Number of words per password
    #[arg(long, short)]
    pub parts: Option<usize>,

    /// Apply leet substitution
    #[arg(long, overrides_with = "no_substitute")]
    pub substitute: bool,

    /// Keep words as drawn
    #[arg(long, overrides_with = "substitute")]
    pub no_substitute: bool,

    /// Draw from the built-in word list
    #[arg(long, overrides_with = "no_default_list")]
    pub default_list: bool,

    /// Skip the built-in word list
    #[arg(long, overrides_with = "default_list")]
    pub no_default_list: bool,

    /// Draw from the custom word list
    #[arg(long, overrides_with = "no_custom_list")]
    pub custom_list: bool,

    /// Skip the custom word list
    #[arg(long, overrides_with = "custom_list")]
    pub no_custom_list: bool,

    /// Number of passwords
    #[arg(long, short)]
    pub count: Option<usize>,

    /// Also write the passwords to this file, one per line
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl WordArgs {
    pub fn apply(&self, prefs: &mut Preferences) {
        prefs.is_advanced = false;
        if let Some(parts) = self.parts {
            prefs.num_options = parts;
        }
        if let Some(substitute) = switch(self.substitute, self.no_substitute) {
            prefs.replace_chars = substitute;
        }
        if let Some(use_default) = switch(self.default_list, self.no_default_list) {
            prefs.use_default_list = use_default;
        }
        if let Some(use_custom) = switch(self.custom_list, self.no_custom_list) {
            prefs.use_custom_list = use_custom;
        }
        if let Some(count) = self.count {
            prefs.password_amount = count;
        }
    }
}

/// Character mode flags. Omitted flags fall back to saved preferences.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct CharArgs {
    /// Build hyphen-joined five character segments
    #[arg(long, overrides_with = "no_segments")]
    pub segments: bool,

    /// Draw a single run of `--length` characters
    #[arg(long, overrides_with = "segments")]
    pub no_segments: bool,

    /// Number of segments
    #[arg(long)]
    pub segment_count: Option<usize>,

    /// Password length when not segmenting
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include digits
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Leave out digits
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,

    /// Leave out uppercase letters
    #[arg(long, overrides_with = "uppercase")]
    pub no_uppercase: bool,

    /// Number of passwords
    #[arg(long, short)]
    pub count: Option<usize>,

    /// Also write the passwords to this file, one per line
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl CharArgs {
    pub fn apply(&self, prefs: &mut Preferences) {
        prefs.is_advanced = true;
        if let Some(segments) = switch(self.segments, self.no_segments) {
            prefs.use_segments = segments;
        }
        if let Some(count) = self.segment_count {
            prefs.segment_count = count;
        }
        if let Some(length) = self.length {
            prefs.password_length = length;
        }
        if let Some(numbers) = switch(self.numbers, self.no_numbers) {
            prefs.include_numbers = numbers;
        }
        if let Some(symbols) = switch(self.symbols, self.no_symbols) {
            prefs.include_symbols = symbols;
        }
        if let Some(uppercase) = switch(self.uppercase, self.no_uppercase) {
            prefs.include_uppercase = uppercase;
        }
        if let Some(count) = self.count {
            prefs.password_amount = count;
        }
    }
}

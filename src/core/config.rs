// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::generators::ComposerSettings;
use crate::models::Preferences;

// Configuration for the generator, CLI and web service
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: Option<PathBuf>,

    // Password Generation
    pub default_num_parts: usize,
    pub default_password_length: usize,
    pub default_segment_count: usize,
    pub composer: ComposerSettings,
    pub max_batch_size: usize,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            data_dir: None, // Falls back to the platform config dir

            // Password Generation
            default_num_parts: 2,
            default_password_length: 12,
            default_segment_count: 3,
            composer: ComposerSettings::default(),
            max_batch_size: 100,

            // Web Interface
            web_port: 3001,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: Option<String>, warnings: &mut Vec<String>) -> Option<T> {
    let value = value?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warnings.push(format!("Ignoring unparsable value '{}' for {}", value, key));
            None
        }
    }
}

impl Config {
    // Load configuration from environment variables. The returned warnings
    // describe ignored values and are logged by the caller once the logger
    // is installed.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_vars(|key| env::var(key).ok())
    }

    // Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Storage
        if let Some(dir) = var("GENPASS_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        // Password Generation
        if let Some(parts) = parse_var("DEFAULT_NUM_PARTS", var("DEFAULT_NUM_PARTS"), &mut warnings) {
            config.default_num_parts = parts;
        }

        if let Some(length) = parse_var("DEFAULT_PASSWORD_LENGTH", var("DEFAULT_PASSWORD_LENGTH"), &mut warnings) {
            config.default_password_length = length;
        }

        if let Some(count) = parse_var("DEFAULT_SEGMENT_COUNT", var("DEFAULT_SEGMENT_COUNT"), &mut warnings) {
            config.default_segment_count = count;
        }

        if let Some(probability) =
            parse_var::<f64>("SUBSTITUTION_PROBABILITY", var("SUBSTITUTION_PROBABILITY"), &mut warnings)
        {
            if probability.is_finite() {
                config.composer.substitution_probability = probability.clamp(0.0, 1.0);
            } else {
                warnings.push(format!("Ignoring non-finite SUBSTITUTION_PROBABILITY {}", probability));
            }
        }

        let suffix_min = parse_var("SUFFIX_MIN", var("SUFFIX_MIN"), &mut warnings)
            .unwrap_or(config.composer.suffix_min);
        let suffix_max = parse_var("SUFFIX_MAX", var("SUFFIX_MAX"), &mut warnings)
            .unwrap_or(config.composer.suffix_max);
        if suffix_min <= suffix_max {
            config.composer.suffix_min = suffix_min;
            config.composer.suffix_max = suffix_max;
        } else {
            warnings.push(format!(
                "Suffix range {}..={} is inverted, keeping {}..={}",
                suffix_min, suffix_max, config.composer.suffix_min, config.composer.suffix_max
            ));
        }

        if let Some(max) = parse_var::<usize>("MAX_BATCH_SIZE", var("MAX_BATCH_SIZE"), &mut warnings) {
            config.max_batch_size = max.max(1);
        }

        // Web Interface
        if let Some(port) = parse_var("WEB_PORT", var("WEB_PORT"), &mut warnings) {
            config.web_port = port;
        }

        if let Some(address) = var("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = var("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        (config, warnings)
    }

    // Preferences used before anything has been saved
    pub fn default_preferences(&self) -> Preferences {
        Preferences {
            num_options: self.default_num_parts,
            password_length: self.default_password_length,
            segment_count: self.default_segment_count,
            ..Preferences::default()
        }
    }
}

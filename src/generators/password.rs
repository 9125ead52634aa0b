use crate::models::{CharacterRequest, GeneratedBatch, StrengthLabel, WeightedOption, WordRequest};
use super::characters;
use super::random::{RandomSource, RngSource};
use super::sampler;
use super::strength;
use super::words::{self, ComposerSettings};

/// Owns one random source and the word-mode settings, and runs both
/// generation pipelines against it.
pub struct PasswordGenerator<S = RngSource> {
    source: S,
    settings: ComposerSettings,
}

impl PasswordGenerator<RngSource> {
    pub fn new() -> Self {
        Self::with_source(RngSource::from_entropy())
    }
}

impl Default for PasswordGenerator<RngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> PasswordGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            settings: ComposerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ComposerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ComposerSettings {
        &self.settings
    }

    pub fn sample_weighted(&mut self, pool: &mut Vec<WeightedOption>) -> Option<WeightedOption> {
        sampler::sample_weighted(pool, &mut self.source)
    }

    pub fn compose_word(&mut self, options: &[WeightedOption], num_parts: usize, substitute: bool) -> String {
        words::compose_word(options, num_parts, substitute, &self.settings, &mut self.source)
    }

    pub fn compose_word_batch(&mut self, request: &WordRequest) -> GeneratedBatch {
        words::compose_word_batch(request, &self.settings, &mut self.source)
    }

    pub fn compose_character_batch(&mut self, request: &CharacterRequest) -> GeneratedBatch {
        characters::compose_batch(request, &mut self.source)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthLabel {
        strength::score(password)
    }
}

// src/generators/mod.rs
//! Password generation: weighted word composition, random character
//! composition and strength scoring.

pub mod random;
pub mod sampler;
pub mod words;
pub mod characters;
pub mod strength;
mod password;

pub use password::PasswordGenerator;
pub use random::{RandomSource, RngSource};
pub use strength::{score, StrengthReport};
pub use words::ComposerSettings;

use crate::models::{CharacterRequest, WeightedOption, WordRequest};

/// Word-mode batch as newline-joined text, drawn from OS entropy.
pub fn compose_word_batch(options: &[WeightedOption], num_parts: usize, substitute: bool, count: usize) -> String {
    let request = WordRequest {
        options: options.to_vec(),
        num_parts,
        substitute_chars: substitute,
        count,
    };
    PasswordGenerator::new().compose_word_batch(&request).to_string()
}

/// Character-mode batch as newline-joined text, drawn from OS entropy.
pub fn compose_character_batch(
    use_segments: bool,
    segment_count: usize,
    length: usize,
    include_numbers: bool,
    include_symbols: bool,
    include_uppercase: bool,
    count: usize,
) -> String {
    let request = CharacterRequest {
        use_segments,
        segment_count,
        length,
        include_numbers,
        include_symbols,
        include_uppercase,
        count,
    };
    PasswordGenerator::new().compose_character_batch(&request).to_string()
}

/// Removes one weighted pick from `pool`.
pub fn sample_weighted(pool: &mut Vec<WeightedOption>) -> Option<WeightedOption> {
    PasswordGenerator::new().sample_weighted(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_batch_is_blank_lines() {
        assert_eq!(compose_word_batch(&[], 2, true, 3), "\n\n");
    }

    #[test]
    fn character_batch_lines_match_count() {
        let batch = compose_character_batch(true, 3, 12, true, true, true, 5);
        let lines: Vec<&str> = batch.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 17));
    }

    #[test]
    fn sample_weighted_shrinks_pool() {
        let mut pool = vec![WeightedOption::new("a", 1.0), WeightedOption::new("b", 1.0)];
        let first = sample_weighted(&mut pool).unwrap();
        let second = sample_weighted(&mut pool).unwrap();
        assert_ne!(first.text, second.text);
        assert!(sample_weighted(&mut pool).is_none());
    }
}

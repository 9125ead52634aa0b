// src/generators/words.rs
use log::debug;

use crate::models::{GeneratedBatch, WeightedOption, WordRequest};
use super::random::RandomSource;
use super::sampler::sample_weighted;

pub const DEFAULT_SUBSTITUTION_PROBABILITY: f64 = 0.3;
pub const DEFAULT_SUFFIX_MIN: u32 = 10;
pub const DEFAULT_SUFFIX_MAX: u32 = 99;

/// Leet glyphs keyed by lowercase letter.
const LEET_MAP: [(char, char); 8] = [
    ('e', '3'),
    ('a', '@'),
    ('s', '$'),
    ('o', '0'),
    ('i', '!'),
    ('b', '8'),
    ('l', '1'),
    ('t', '+'),
];

/// Tunable constants of word mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposerSettings {
    /// Chance that an eligible character is swapped for its leet glyph.
    pub substitution_probability: f64,
    /// Inclusive bounds of the numeric suffix. An inverted pair is read in
    /// ascending order.
    pub suffix_min: u32,
    pub suffix_max: u32,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            substitution_probability: DEFAULT_SUBSTITUTION_PROBABILITY,
            suffix_min: DEFAULT_SUFFIX_MIN,
            suffix_max: DEFAULT_SUFFIX_MAX,
        }
    }
}

fn leet_glyph(c: char) -> Option<char> {
    let lower = c.to_ascii_lowercase();
    LEET_MAP
        .iter()
        .find(|(letter, _)| *letter == lower)
        .map(|(_, glyph)| *glyph)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Draws up to `num_parts` words from a scratch copy of `options` and
/// concatenates them, capitalising every word after the first.
///
/// Stops early once the pool runs dry.
pub fn join_parts<R: RandomSource + ?Sized>(
    options: &[WeightedOption],
    num_parts: usize,
    rng: &mut R,
) -> String {
    let mut pool = options.to_vec();
    let mut password = String::new();

    for i in 0..num_parts {
        let Some(opt) = sample_weighted(&mut pool, rng) else {
            break;
        };
        if i == 0 {
            password.push_str(&opt.text);
        } else {
            password.push_str(&capitalize(&opt.text));
        }
    }

    password
}

/// Swaps each eligible character for its leet glyph with probability
/// `probability`. Only eligible characters consume a random draw.
pub fn substitute_chars<R: RandomSource + ?Sized>(
    input: &str,
    probability: f64,
    rng: &mut R,
) -> String {
    input
        .chars()
        .map(|c| match leet_glyph(c) {
            Some(glyph) if rng.next_bool(probability) => glyph,
            _ => c,
        })
        .collect()
}

/// Builds one word-mode password. Empty `options` give an empty string.
pub fn compose_word<R: RandomSource + ?Sized>(
    options: &[WeightedOption],
    num_parts: usize,
    substitute: bool,
    settings: &ComposerSettings,
    rng: &mut R,
) -> String {
    if options.is_empty() {
        return String::new();
    }

    let mut password = join_parts(options, num_parts, rng);
    if substitute {
        password = substitute_chars(&password, settings.substitution_probability, rng);
    }

    let suffix = rng.next_in_range(settings.suffix_min, settings.suffix_max);
    password.push_str(&suffix.to_string());
    password
}

/// Runs [`compose_word`] `count` times, each against the full option set.
pub fn compose_word_batch<R: RandomSource + ?Sized>(
    request: &WordRequest,
    settings: &ComposerSettings,
    rng: &mut R,
) -> GeneratedBatch {
    debug!(
        "Composing {} word password(s) from {} options, {} parts, substitution {}",
        request.count,
        request.options.len(),
        request.num_parts,
        request.substitute_chars
    );

    (0..request.count)
        .map(|_| {
            compose_word(
                &request.options,
                request.num_parts,
                request.substitute_chars,
                settings,
                rng,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::random::{RngSource, ScriptedSource};

    fn options(words: &[&str]) -> Vec<WeightedOption> {
        words.iter().map(|w| WeightedOption::new(*w, 1.0)).collect()
    }

    fn split_suffix(password: &str) -> (&str, u32) {
        let (body, digits) = password.split_at(password.len() - 2);
        (body, digits.parse().unwrap())
    }

    #[test]
    fn parts_are_joined_and_capitalised() {
        let mut rng = RngSource::seeded(11);
        let words = options(&["apple", "river", "cloud", "tiger"]);

        for _ in 0..200 {
            let joined = join_parts(&words, 3, &mut rng);
            let mut rest = joined.as_str();
            let mut found = Vec::new();

            // First word is lowercase, later ones start upper-case
            let first = words.iter().find(|w| rest.starts_with(w.text.as_str())).unwrap();
            found.push(first.text.clone());
            rest = &rest[first.text.len()..];
            while !rest.is_empty() {
                assert!(rest.chars().next().unwrap().is_ascii_uppercase());
                let next = words
                    .iter()
                    .find(|w| rest.starts_with(capitalize(&w.text).as_str()))
                    .unwrap();
                found.push(next.text.clone());
                rest = &rest[next.text.len()..];
            }

            assert_eq!(found.len(), 3);
            found.sort();
            found.dedup();
            assert_eq!(found.len(), 3, "repeated word in {joined}");
        }
    }

    #[test]
    fn sampling_stops_when_pool_runs_dry() {
        let mut rng = RngSource::seeded(3);
        let joined = join_parts(&options(&["sun", "moon"]), 5, &mut rng);
        assert!(joined == "sunMoon" || joined == "moonSun", "{joined}");
    }

    #[test]
    fn empty_options_give_empty_password() {
        let mut rng = RngSource::seeded(3);
        let password = compose_word(&[], 3, true, &ComposerSettings::default(), &mut rng);
        assert_eq!(password, "");
    }

    #[test]
    fn suffix_is_two_digits_in_range() {
        let mut rng = RngSource::seeded(8);
        let settings = ComposerSettings::default();
        let words = options(&["pasta"]);
        for _ in 0..500 {
            let password = compose_word(&words, 1, false, &settings, &mut rng);
            let (body, suffix) = split_suffix(&password);
            assert_eq!(body, "pasta");
            assert!((10..=99).contains(&suffix));
        }
    }

    #[test]
    fn substitution_replaces_only_mapped_characters() {
        let mut always = ScriptedSource::new(&[0.0]);
        assert_eq!(substitute_chars("BeLtSoIx", 0.3, &mut always), "831+$0!x");

        let mut never = ScriptedSource::new(&[0.99]);
        assert_eq!(substitute_chars("BeLtSoIx", 0.3, &mut never), "BeLtSoIx");
    }

    #[test]
    fn substitution_rate_tracks_probability() {
        let mut rng = RngSource::seeded(77);
        let input = "e".repeat(10_000);
        let output = substitute_chars(&input, 0.3, &mut rng);
        let swapped = output.chars().filter(|c| *c == '3').count();
        let share = swapped as f64 / 10_000.0;
        assert!((share - 0.3).abs() < 0.03, "swap share {share}");
    }

    #[test]
    fn scripted_word_password_is_exact() {
        // pick "ab", pick "cd", no swaps, suffix 10 + floor(0.5 * 90) = 55
        let mut rng = ScriptedSource::new(&[0.1, 0.1, 0.5]);
        let settings = ComposerSettings::default();
        let password = compose_word(&options(&["ab", "cd"]), 2, false, &settings, &mut rng);
        assert_eq!(password, "abCd55");
    }

    #[test]
    fn custom_settings_change_suffix_range() {
        let mut rng = RngSource::seeded(21);
        let settings = ComposerSettings {
            substitution_probability: 1.0,
            suffix_min: 7,
            suffix_max: 7,
        };
        let password = compose_word(&options(&["sea"]), 1, true, &settings, &mut rng);
        assert_eq!(password, "$3@7");
    }

    #[test]
    fn inverted_suffix_bounds_still_compose() {
        let mut rng = RngSource::seeded(5);
        let settings = ComposerSettings {
            substitution_probability: 0.0,
            suffix_min: 50,
            suffix_max: 20,
        };
        for _ in 0..200 {
            let password = compose_word(&options(&["sea"]), 1, false, &settings, &mut rng);
            let (body, suffix) = split_suffix(&password);
            assert_eq!(body, "sea");
            assert!((20..=50).contains(&suffix), "{password}");
        }
    }

    #[test]
    fn batch_of_empty_options_is_blank_lines() {
        let mut rng = RngSource::seeded(0);
        let request = WordRequest {
            options: Vec::new(),
            num_parts: 2,
            substitute_chars: true,
            count: 3,
        };
        let batch = compose_word_batch(&request, &ComposerSettings::default(), &mut rng);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.to_string(), "\n\n");
    }

    #[test]
    fn batch_entries_draw_from_full_pool() {
        let mut rng = RngSource::seeded(4);
        let request = WordRequest {
            options: options(&["solo"]),
            num_parts: 1,
            substitute_chars: false,
            count: 5,
        };
        let batch = compose_word_batch(&request, &ComposerSettings::default(), &mut rng);
        assert_eq!(batch.len(), 5);
        for password in batch.passwords() {
            assert!(password.starts_with("solo"), "{password}");
        }
    }
}

// src/generators/characters.rs
use log::debug;

use crate::models::{CharacterRequest, GeneratedBatch};
use super::random::RandomSource;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()";

pub const SEGMENT_LENGTH: usize = 5;
pub const SEGMENT_DELIMITER: char = '-';

/// Builds the character set for a request. Lowercase letters are always
/// present, so the result is never empty.
pub fn build_alphabet(include_numbers: bool, include_symbols: bool, include_uppercase: bool) -> Vec<char> {
    let mut alphabet: Vec<char> = LOWERCASE.chars().collect();

    if include_numbers {
        alphabet.extend(NUMBERS.chars());
    }
    if include_symbols {
        alphabet.extend(SYMBOLS.chars());
    }
    if include_uppercase {
        alphabet.extend(LOWERCASE.chars().map(|c| c.to_ascii_uppercase()));
    }

    alphabet
}

fn draw<R: RandomSource + ?Sized>(alphabet: &[char], len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| alphabet[rng.next_index(alphabet.len())])
        .collect()
}

/// Five independent draws from `alphabet`.
pub fn compose_segment<R: RandomSource + ?Sized>(alphabet: &[char], rng: &mut R) -> String {
    draw(alphabet, SEGMENT_LENGTH, rng)
}

/// One character-mode password: either `segment_count` hyphen-joined
/// segments or `length` characters.
pub fn compose<R: RandomSource + ?Sized>(
    request: &CharacterRequest,
    alphabet: &[char],
    rng: &mut R,
) -> String {
    if request.use_segments {
        let segments: Vec<String> = (0..request.segment_count)
            .map(|_| compose_segment(alphabet, rng))
            .collect();
        segments.join(&SEGMENT_DELIMITER.to_string())
    } else {
        draw(alphabet, request.length, rng)
    }
}

/// Runs [`compose`] `count` times over a single alphabet.
pub fn compose_batch<R: RandomSource + ?Sized>(request: &CharacterRequest, rng: &mut R) -> GeneratedBatch {
    let alphabet = build_alphabet(
        request.include_numbers,
        request.include_symbols,
        request.include_uppercase,
    );
    debug!(
        "Composing {} character password(s) over {} symbols, segmented {}",
        request.count,
        alphabet.len(),
        request.use_segments
    );

    (0..request.count)
        .map(|_| compose(request, &alphabet, rng))
        .collect()
}

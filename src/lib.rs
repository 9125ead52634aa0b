//! GenPass: memorable word-based and random character password generation.
//!
//! The generation core lives in [`generators`]; word lists, persistence,
//! the HTTP service and the command line are thin layers around it.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;
pub mod wordlist;

pub use crate::generators::{
    compose_character_batch, compose_word_batch, sample_weighted, score, PasswordGenerator,
};
pub use crate::models::{GeneratedBatch, StrengthLabel, WeightedOption};

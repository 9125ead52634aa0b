// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;
use std::path::Path;

use crate::core::Config;
use crate::generators::PasswordGenerator;
use crate::models::GeneratedBatch;
use crate::wordlist::WordListStore;
use super::handlers;

const WORD_MODE: &str = "🔤  Generate word password";
const CHARACTER_MODE: &str = "🎲  Generate character password";
const CHECK_STRENGTH: &str = "🔍  Check password strength";
const EXIT: &str = "❌  Exit";

fn prompt_number(message: &str, default: usize) -> Result<usize, Box<dyn Error>> {
    let value: usize = Text::new(message)
        .with_default(&default.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))?;
    Ok(value)
}

fn show_batch(batch: &GeneratedBatch) -> Result<(), Box<dyn Error>> {
    let output = batch.to_string();
    println!("\n{}\n", output);
    println!("Strength: {}", handlers::handle_score(&output).label());

    let save = Confirm::new("Save to a file?").with_default(false).prompt()?;
    if save {
        let path = Text::new("File name:").with_default("passwords.txt").prompt()?;
        handlers::save_batch(batch, Path::new(path.trim()))?;
        println!("✅ Saved to {}", path.trim());
    }
    Ok(())
}

pub fn run_cli_menu(store: &WordListStore, config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║               GENPASS                ║");
    println!("╚══════════════════════════════════════╝");

    let mut generator = PasswordGenerator::new().with_settings(config.composer);

    loop {
        let prefs = handlers::load_preferences(store, config)?;
        let options = vec![WORD_MODE, CHARACTER_MODE, CHECK_STRENGTH, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select.")
            .prompt_skippable()?;

        match selection {
            Some(WORD_MODE) => {
                let mut prefs = prefs;
                prefs.num_options = prompt_number("Words per password:", prefs.num_options)?;
                prefs.replace_chars = Confirm::new("Replace characters (leet)?")
                    .with_default(prefs.replace_chars)
                    .prompt()?;
                prefs.use_default_list = Confirm::new("Use the built-in word list?")
                    .with_default(prefs.use_default_list)
                    .prompt()?;
                prefs.use_custom_list = Confirm::new("Use your custom word list?")
                    .with_default(prefs.use_custom_list)
                    .prompt()?;
                prefs.password_amount = prompt_number("How many passwords?", prefs.password_amount)?;

                let batch = handlers::generate_words(&mut generator, store, prefs)?;
                show_batch(&batch)?;
            }
            Some(CHARACTER_MODE) => {
                let mut prefs = prefs;
                prefs.use_segments = Confirm::new("Use segments?")
                    .with_default(prefs.use_segments)
                    .prompt()?;
                if prefs.use_segments {
                    prefs.segment_count = prompt_number("Number of segments:", prefs.segment_count)?;
                } else {
                    prefs.password_length = prompt_number("Password length:", prefs.password_length)?;
                }
                prefs.include_numbers = Confirm::new("Include numbers?").with_default(prefs.include_numbers).prompt()?;
                prefs.include_symbols = Confirm::new("Include symbols?").with_default(prefs.include_symbols).prompt()?;
                prefs.include_uppercase = Confirm::new("Include uppercase letters?").with_default(prefs.include_uppercase).prompt()?;
                prefs.password_amount = prompt_number("How many passwords?", prefs.password_amount)?;

                let batch = handlers::generate_chars(&mut generator, store, prefs)?;
                show_batch(&batch)?;
            }
            Some(CHECK_STRENGTH) => {
                let password = Text::new("Password:").prompt()?;
                let report = handlers::handle_score(&password);
                println!("Strength: {}", report.label());
                for tip in report.feedback() {
                    println!("  • {}", tip);
                }
            }
            Some(EXIT) | None => break,
            Some(_) => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

// src/cli/mod.rs
use std::error::Error;
use std::path::{Path, PathBuf};
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

use crate::core::Config;
use crate::generators::PasswordGenerator;
use crate::models::GeneratedBatch;
use crate::wordlist::{transfer::DEFAULT_EXPORT_FILE, WordListStore};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the custom word list and preferences
    #[arg(long, env = "GENPASS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

fn print_strength(password: &str) {
    let report = handlers::handle_score(password);
    println!("Strength: {}", report.label());
    for tip in report.feedback() {
        println!("  • {}", tip);
    }
}

fn print_batch(batch: &GeneratedBatch, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = batch.to_string();
    println!("{}", text);
    print_strength(&text);
    if let Some(path) = output {
        handlers::save_batch(batch, path)?;
        println!("✅ Saved to {}", path.display());
    }
    Ok(())
}

pub async fn run_command(command: CliCommand, store: &WordListStore, mut config: Config) -> Result<(), Box<dyn Error>> {
    let mut generator = PasswordGenerator::new().with_settings(config.composer);

    match command {
        CliCommand::Words(args) => {
            let batch = handlers::handle_words(&mut generator, store, &config, &args)?;
            print_batch(&batch, args.output.as_deref())?;
        }
        CliCommand::Chars(args) => {
            let batch = handlers::handle_chars(&mut generator, store, &config, &args)?;
            print_batch(&batch, args.output.as_deref())?;
        }
        CliCommand::Score { password } => {
            print_strength(&password);
        }
        CliCommand::List => {
            let options = handlers::handle_list(store)?;
            if options.is_empty() {
                println!("Custom word list is empty.");
            }
            for opt in options {
                println!("{:<20} {}", opt.text, opt.weight);
            }
        }
        CliCommand::Add { text, weight } => {
            let options = handlers::handle_add(store, &text, weight)?;
            println!("✅ '{}' saved ({} words in custom list)", text, options.len());
        }
        CliCommand::Remove { text } => {
            if handlers::handle_remove(store, &text)? {
                println!("✅ '{}' removed", text);
            } else {
                println!("❌ '{}' is not in the custom list", text);
            }
        }
        CliCommand::Clear => {
            store.clear()?;
            println!("✅ Custom word list cleared");
        }
        CliCommand::Import { path } => {
            let count = handlers::handle_import(store, &path)?;
            println!("✅ Imported {} words from {}", count, path.display());
        }
        CliCommand::Export { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
            let count = handlers::handle_export(store, &path)?;
            println!("✅ Exported {} words to {}", count, path.display());
        }
        CliCommand::Serve { port } => {
            if let Some(port) = port {
                config.web_port = port;
            }
            println!("🚀 API server starting on {}:{}", config.web_address, config.web_port);
            crate::api::start_server(config).await?;
        }
    }

    Ok(())
}

use clap::Parser;
use std::io;
use std::path::Path;

use genpass::cli::{self, Args};
use genpass::core::Config;
use genpass::logging;
use genpass::wordlist::WordListStore;

fn to_io_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (mut config, config_warnings) = Config::load();
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }

    logging::init_logging(&config).map_err(to_io_error)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let store = WordListStore::open(config.data_dir.as_deref()).map_err(|e| {
        log::error!("Failed to open word list store: {}", e);
        to_io_error(e)
    })?;
    log::info!("Using data directory {}", store.dir().display());

    match args.command {
        Some(command) => cli::run_command(command, &store, config).await.map_err(|e| {
            log::error!("Command failed: {}", e);
            to_io_error(e)
        }),
        // Interactive menu
        None => cli::menu::run_cli_menu(&store, &config).map_err(|e| {
            log::error!("CLI menu error: {}", e);
            to_io_error(e)
        }),
    }
}

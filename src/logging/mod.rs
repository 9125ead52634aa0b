// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

fn open_log_file(config: &Config) -> Result<Option<File>> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Some(file))
}

/// Install the global logger: configured level, second timestamps and
/// module paths, writing to the log file when one is set or stderr
/// otherwise. `RUST_LOG` directives refine the configured level.
pub fn init_logging(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(file) = open_log_file(config)? {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("logs").join("genpass.log")),
            ..Config::default()
        };

        assert!(open_log_file(&config).unwrap().is_some());
        assert!(dir.path().join("logs").join("genpass.log").exists());
    }

    #[test]
    fn no_log_file_means_stderr() {
        assert!(open_log_file(&Config::default()).unwrap().is_none());
    }
}

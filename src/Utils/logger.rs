use chrono::Local;
use log::{info, warn};
use simplelog::*;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::config::ConfigError;

/// log_<date>_<time>.txt in the current directory
pub fn log_file_name() -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("log_{}.txt", date_and_time))
}

/// terminal logger, plus a file logger when `log_file` is given.
/// If a logger is already installed the call only warns and returns Ok
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<(), ConfigError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    match CombinedLogger::init(loggers) {
        Ok(()) => {
            info!("program started with loglevel: {}", level);
        }
        Err(_) => {
            warn!("logger already initialized, keeping the existing one");
        }
    }
    Ok(())
}

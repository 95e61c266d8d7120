#![allow(non_snake_case)]
//! Interactive trigonometric calculator.
//! usage: RustedTrig [path/to/settings]
//! The optional settings file has the form
//! ```text
//! logging
//! loglevel: info
//! log_to_file: false
//! output
//! precision: 6
//! ```
use RustedTrig::Utils::config::CalcConfig;
use RustedTrig::Utils::logger::{init_logger, log_file_name};
use RustedTrig::menu::Menu;
use std::error::Error;
use std::io;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CalcConfig::from_file(Path::new(&path))?,
        None => CalcConfig::default(),
    };
    if let Some(level) = config.level_filter()? {
        let log_file = config.log_to_file.then(log_file_name);
        init_logger(level, log_file.as_deref())?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), config.precision);
    menu.run()?;
    Ok(())
}

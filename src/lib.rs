pub mod alert;
pub mod app_data;
pub mod commands;
pub mod competition;
pub mod config;
pub mod database;
pub mod delegation;
pub mod error;
pub mod game;
pub mod io;
pub mod packages;
pub mod resources;
pub mod schedule;
pub mod service;
pub mod session;
pub mod team;
pub mod time;
pub mod types;

use std::{fs::File, path::Path};

use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

use crate::{app_data::AppData, config::ResolvedConfig, error::AppError};

// Log to the configured file, or to stderr when there is none.
pub fn init_logging(config: &ResolvedConfig) -> Result<(), AppError> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let result = match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| AppError::Logging(format!("{path}: {e}")))?;
            WriteLogger::init(config.log_level, log_config, file)
        }
        None => TermLogger::init(config.log_level, log_config, TerminalMode::Stderr, ColorChoice::Auto),
    };
    result.map_err(|e| AppError::Logging(e.to_string()))
}

// Build the store from a tournament file if one is given, otherwise from the built-in data.
pub fn open_store(config: &ResolvedConfig, data_file: Option<&Path>) -> Result<AppData, AppError> {
    let data_file = data_file.or(config.data_file.as_deref().map(Path::new));

    let data = match data_file {
        Some(path) => io::load_tournament(path, config)?,
        None => database::initialise(config)?,
    };
    Ok(data)
}

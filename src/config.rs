//! Console settings
//!
//! Read from the command line at startup and adjustable at runtime with
//! `set <name> <value>`.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use thiserror::Error;

pub const DEFAULT_SIZE: usize = 8;

/// Largest board the console will create
pub const MAX_SIZE: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for '{name}'")]
    InvalidValue { name: String, value: String },
}

#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(
    name = "queens_board",
    about = "Place pieces on an n x n board and check queen and rook conflicts"
)]
pub struct Config {
    /// Side length of the starting board
    #[arg(long, short = 'n', default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Do not redraw the board after each change
    #[arg(long = "no-autodraw", action = ArgAction::SetFalse)]
    pub autodraw: bool,

    /// Log debug messages to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            autodraw: true,
            verbose: false,
        }
    }
}

impl Config {
    /// Apply a named setting. Names are case-insensitive and ignore `_` and `-`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let opt = name.to_lowercase().replace(['_', '-'], "");
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match opt.as_str() {
            "autodraw" => self.autodraw = parse_flag(value).ok_or_else(invalid)?,
            "verbose" => self.verbose = parse_flag(value).ok_or_else(invalid)?,
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        crate::logging::level_for(self.verbose)
    }
}

fn parse_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if (1..=MAX_SIZE).contains(&n) => Ok(n),
        _ => Err(format!("'{}' is not a board size from 1 to {}", value, MAX_SIZE)),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["queens_board"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_parse_flags() {
        let config =
            Config::try_parse_from(["queens_board", "--size", "5", "--no-autodraw", "-v"]).unwrap();
        assert_eq!(config.size, 5);
        assert!(!config.autodraw);
        assert!(config.verbose);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(Config::try_parse_from(["queens_board", "--size", "0"]).is_err());
        assert!(Config::try_parse_from(["queens_board", "--size", "65"]).is_err());
        assert!(Config::try_parse_from(["queens_board", "--size", "18446744073709551615"]).is_err());
        assert_eq!(Config::try_parse_from(["queens_board", "-n", "64"]).unwrap().size, MAX_SIZE);
        assert!(Config::try_parse_from(["queens_board", "--size"]).is_err());
        assert!(Config::try_parse_from(["queens_board", "--fast"]).is_err());
    }

    #[test]
    fn test_set_by_name() {
        let mut config = Config::default();
        config.set("AutoDraw", "off").unwrap();
        assert!(!config.autodraw);
        config.set("verbose", "on").unwrap();
        assert!(config.verbose);
        assert!(config.set("verbose", "maybe").is_err());
        assert_eq!(
            config.set("size", "12").unwrap_err(),
            ConfigError::UnknownOption("size".to_string())
        );
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(
            config.set("colour", "red").unwrap_err(),
            ConfigError::UnknownOption("colour".to_string())
        );
    }
}

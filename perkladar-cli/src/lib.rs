//! Perkladar CLI library
//!
//! This library provides the command-line interface for the Perkladar
//! Polish to Proto-Slavic reconstruction engine.

pub mod commands;
pub mod config;
pub mod data_source;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

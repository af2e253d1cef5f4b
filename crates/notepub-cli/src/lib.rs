//! # notepub-cli
//!
//! Command-line front end for selective note publishing.
//!
//! - [`cli`]: argument parsing and action selection
//! - [`config`]: config file loading and override layering
//! - [`logging`]: stderr diagnostics setup
//! - [`commands`]: action dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Action, Args};
pub use config::CliConfig;

//! Library exports for vigna-config-cli.
//!
//! This module exports the CLI structure so that integration tools can build
//! the full command, including the schema-derived option flags.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::{command_with_option_flags, Cli};

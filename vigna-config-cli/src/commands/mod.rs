//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `presets`: List predefined configurations
//! - `options`: List configuration options
//! - `generate`: Assemble, validate and write a configuration header
//! - `validate`: Assemble and validate a configuration
//! - `show`: Parse a header and display its configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod generate;
pub mod options;
pub mod presets;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
pub use options::OptionsCommand;
pub use presets::PresetsCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;

//! CLI structure and command definitions.
//!
//! The static part of the interface is declared with clap's derive macros.
//! The per-option flags (`--enable-<name>`, `--disable-<name>` and
//! `--<name> VALUE`) come from the option schema and are added to the
//! `generate` and `validate` subcommands with the builder API.

use crate::commands::{
    CompletionsCommand, GenerateCommand, OptionsCommand, PresetsCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Arg, ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use vigna_config::{FlagNames, FlagTable};

/// Subcommands that accept the per-option flags.
pub const OPTION_FLAG_COMMANDS: [&str; 2] = ["generate", "validate"];

const OPTION_FLAGS_HEADING: &str = "Option flags";

/// Command-line tool for VIGNA core configuration headers.
#[derive(Parser)]
#[command(name = "vigna-config")]
#[command(
    version,
    about = "Generate and validate VIGNA core configuration headers",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user settings directory
    #[arg(long, value_name = "PATH", global = true, env = "VIGNA_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List predefined configurations
    Presets(PresetsCommand),

    /// List configuration options
    Options(OptionsCommand),

    /// Generate a configuration header
    Generate(GenerateCommand),

    /// Validate a configuration without writing it
    Validate(ValidateCommand),

    /// Show the configuration held by a header
    Show(ShowCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// The full command, with the per-option flags of `table`.
pub fn command_with_option_flags(table: &FlagTable) -> clap::Command {
    let mut cmd = Cli::command();
    for name in OPTION_FLAG_COMMANDS {
        cmd = cmd.mut_subcommand(name, |sub| add_option_flags(sub, table));
    }
    cmd
}

fn add_option_flags(mut cmd: clap::Command, table: &FlagTable) -> clap::Command {
    for entry in table {
        match entry {
            FlagNames::Toggle {
                description,
                enable,
                disable,
                ..
            } => {
                cmd = cmd
                    .arg(
                        Arg::new(enable.clone())
                            .long(enable.clone())
                            .help(format!("Enable: {description}"))
                            .action(ArgAction::SetTrue)
                            .conflicts_with(disable.clone())
                            .help_heading(OPTION_FLAGS_HEADING),
                    )
                    .arg(
                        Arg::new(disable.clone())
                            .long(disable.clone())
                            .help(format!("Disable: {description}"))
                            .action(ArgAction::SetTrue)
                            .help_heading(OPTION_FLAGS_HEADING),
                    );
            }
            FlagNames::Value {
                description,
                flag,
                default,
                ..
            } => {
                cmd = cmd.arg(
                    Arg::new(flag.clone())
                        .long(flag.clone())
                        .value_name("VALUE")
                        .help(format!("{description} (default: {default})"))
                        .action(ArgAction::Set)
                        .help_heading(OPTION_FLAGS_HEADING),
                );
            }
        }
    }
    cmd
}

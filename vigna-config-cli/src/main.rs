//! Main entry point for the vigna-config CLI.
//!
//! This is the command-line interface for VIGNA core configuration headers.
//! It provides commands for working with the header:
//! - `presets`: List predefined configurations
//! - `options`: List configuration options
//! - `generate`: Validate a configuration and write the header
//! - `validate`: Validate a configuration without writing it
//! - `show`: Show the configuration held by an existing header

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::FromArgMatches;
use cli::{command_with_option_flags, Cli, Command};
use utils::{option_flag_values, GlobalOptions};
use vigna_config::OptionSchema;

fn main() {
    let schema = match OptionSchema::builtin() {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(6);
        }
    };

    // Parse CLI arguments, including the schema-derived option flags
    let table = schema.flag_table();
    let matches = command_with_option_flags(&table).get_matches();
    let mut cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Some((_, sub)) = matches.subcommand() {
        match &mut cli.command {
            Command::Generate(cmd) => cmd.inputs.option_flags = option_flag_values(&table, sub),
            Command::Validate(cmd) => cmd.inputs.option_flags = option_flag_values(&table, sub),
            _ => {}
        }
    }

    // Initialize logging based on verbosity
    let logger = vigna_config::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        Command::Presets(cmd) => cmd.execute(&global),
        Command::Options(cmd) => cmd.execute(&global),
        Command::Generate(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Show(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

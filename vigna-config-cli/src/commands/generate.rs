//! Generate command implementation.
//!
//! Assembles a configuration, validates it and writes the header. Nothing
//! is written when validation fails.

use crate::error::CliError;
use crate::utils::{assemble, check, load_settings, ConfigInputs, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use vigna_config::{render, write_header, OptionSchema, DEFAULT_TITLE};

/// Generate a configuration header.
#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub inputs: ConfigInputs,

    /// Output header file [default: vigna_conf_generated.vh]
    #[arg(long, short, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the header to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Title comment of the header
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let schema = OptionSchema::builtin()?;
        let settings = load_settings(global)?;

        // 1. Assemble and validate
        let assembled = assemble(schema, &self.inputs, &settings, &global.logger)?;
        check(schema, &assembled)?;

        // 2. Pick the title
        let title = match self.title {
            Some(title) => {
                validate_title(&title)?;
                title
            }
            None => settings
                .title
                .clone()
                .or_else(|| assembled.preset.map(|p| p.display_name.to_string()))
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        };

        // 3. Emit
        if self.stdout {
            print!("{}", render(schema, &assembled.config, &title));
            return Ok(());
        }

        let path = self
            .output
            .unwrap_or_else(|| settings.output_path().to_path_buf());
        write_header(&path, schema, &assembled.config, &title)?;

        if !global.quiet {
            println!("Generated configuration file: {}", path.display());
        }
        global
            .logger
            .debug(&format!("{} option(s) specified", assembled.config.len()));

        Ok(())
    }
}

/// The title is written inside a single-line `/* */` comment.
fn validate_title(title: &str) -> Result<(), CliError> {
    if title.contains(['\n', '\r']) || title.contains("*/") {
        return Err(CliError::InvalidArguments(
            "title must be a single line without '*/'".to_string(),
        ));
    }
    Ok(())
}

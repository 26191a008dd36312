//! Show command implementation.
//!
//! Parses an existing header and prints the options it sets. A missing file
//! shows as an empty configuration.

use crate::error::CliError;
use crate::output::{Listing, OutputFormat};
use crate::utils::{check, Assembled, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use vigna_config::{HeaderParser, OptionSchema, ValidationMode};

/// Column headers for table and CSV output.
const COLUMN_HEADERS: [&str; 4] = ["name", "directive", "state", "value"];

/// Show the configuration held by a header.
#[derive(Args)]
pub struct ShowCommand {
    /// Header file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,

    /// Also validate the parsed configuration
    #[arg(long)]
    pub check: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let schema = OptionSchema::builtin()?;
        let parser = HeaderParser::new(schema)?;

        if !self.file.exists() {
            global
                .logger
                .info(&format!("{} does not exist", self.file.display()));
        }
        let config = parser.parse_file(&self.file)?;

        let rows = schema
            .iter_grouped()
            .filter_map(|spec| {
                config.get(spec.name).map(|value| {
                    let state = if value.is_enabled() {
                        "enabled"
                    } else {
                        "disabled"
                    };
                    vec![
                        spec.name.to_string(),
                        spec.directive.to_string(),
                        state.to_string(),
                        value.literal().unwrap_or("").to_string(),
                    ]
                })
            })
            .collect();

        Listing {
            headers: &COLUMN_HEADERS,
            rows,
            data: &config,
        }
        .print(self.format)?;

        if self.check {
            let assembled = Assembled {
                config,
                preset: None,
                mode: ValidationMode::Lenient,
            };
            check(schema, &assembled)?;
        }

        Ok(())
    }
}

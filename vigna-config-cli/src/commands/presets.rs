//! Presets command implementation.

use crate::error::CliError;
use crate::output::{Listing, OutputFormat};
use crate::utils::GlobalOptions;
use clap::Args;
use vigna_config::PresetCatalog;

/// Column headers for every format.
const COLUMN_HEADERS: [&str; 3] = ["name", "display_name", "description"];

/// List predefined configurations.
#[derive(Args)]
pub struct PresetsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl PresetsCommand {
    /// Execute the presets command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let presets = PresetCatalog::list();
        let rows = presets
            .iter()
            .map(|p| {
                vec![
                    p.name.to_string(),
                    p.display_name.to_string(),
                    p.description.to_string(),
                ]
            })
            .collect();

        Listing {
            headers: &COLUMN_HEADERS,
            rows,
            data: &presets,
        }
        .print(self.format)
    }
}

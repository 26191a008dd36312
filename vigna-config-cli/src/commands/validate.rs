//! Validate command implementation.

use crate::error::CliError;
use crate::utils::{assemble, check, load_settings, ConfigInputs, GlobalOptions};
use clap::Args;
use vigna_config::OptionSchema;

/// Validate a configuration without writing it.
#[derive(Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub inputs: ConfigInputs,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let schema = OptionSchema::builtin()?;
        let settings = load_settings(global)?;

        let assembled = assemble(schema, &self.inputs, &settings, &global.logger)?;
        check(schema, &assembled)?;

        println!("Configuration is valid");
        Ok(())
    }
}

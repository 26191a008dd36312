//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell. The scripts include the
//! per-option flags of `generate` and `validate`.

use crate::cli::command_with_option_flags;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Parser;
use clap_complete::{generate, Shell};
use std::io;
use vigna_config::OptionSchema;

/// Name of the installed binary.
const BIN_NAME: &str = "vigna-config";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let table = OptionSchema::builtin()?.flag_table();
        let mut cmd = command_with_option_flags(&table);

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            eprintln!("# Run the following command to enable completions:");

            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   vigna-config completions bash > ~/.local/share/bash-completion/completions/vigna-config"
                    );
                    eprintln!("# Or source it directly in ~/.bashrc:");
                    eprintln!("#   eval \"$(vigna-config completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   vigna-config completions zsh > ~/.zsh/completions/_vigna-config");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   vigna-config completions fish > ~/.config/fish/completions/vigna-config.fish"
                    );
                    eprintln!("# Or add to config.fish:");
                    eprintln!("#   vigna-config completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("#   vigna-config completions powershell > $PROFILE");
                }
                _ => {}
            }

            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared by the `generate` and `validate`
//! commands: global options, settings loading, and assembling a
//! configuration from a preset, an existing header, settings and flags.

use crate::error::CliError;
use clap::{ArgMatches, Args};
use std::path::PathBuf;
use vigna_config::{
    Configuration, FlagTable, HeaderParser, Logger, OptionSchema, Preset, PresetCatalog, Settings,
    SettingsBuilder, ValidationMode, ValidationReport, Validator,
};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user settings directory.
    pub config_dir: Option<PathBuf>,

    /// Logger configured from the flags above.
    pub logger: Logger,
}

/// Inputs shared by commands that assemble a configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigInputs {
    /// Start from a predefined configuration
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Start from an existing header (applied after the preset)
    #[arg(long, value_name = "FILE")]
    pub parse: Option<PathBuf>,

    /// Report unknown options and mistyped values as violations
    #[arg(long)]
    pub strict: bool,

    /// Values of the per-option flags, filled in from the parsed matches.
    #[arg(skip)]
    pub option_flags: Configuration,
}

/// A configuration assembled from every input.
#[derive(Debug)]
pub struct Assembled {
    /// The resulting configuration.
    pub config: Configuration,
    /// The preset it started from, if any.
    pub preset: Option<&'static Preset>,
    /// Validation mode requested by flags or settings.
    pub mode: ValidationMode,
}

/// Load settings from files and environment.
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = SettingsBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Collects the per-option flags given on the command line.
///
/// `matches` are the matches of the subcommand that carries the flags.
pub fn option_flag_values(table: &FlagTable, matches: &ArgMatches) -> Configuration {
    let mut config = Configuration::new();
    table.apply(&mut config, |id| {
        if let Ok(Some(value)) = matches.try_get_one::<String>(id) {
            return Some(value.clone());
        }
        matches
            .try_get_one::<bool>(id)
            .ok()
            .flatten()
            .filter(|set| **set)
            .map(|_| String::new())
    });
    config
}

/// Assemble a configuration.
///
/// Sources are applied in this order, later ones winning: preset (from the
/// flag, else from settings), parsed header, settings option values,
/// per-option flags.
pub fn assemble(
    schema: &OptionSchema,
    inputs: &ConfigInputs,
    settings: &Settings,
    logger: &Logger,
) -> Result<Assembled, CliError> {
    let mut config = Configuration::new();

    let preset_name = inputs.preset.as_deref().or(settings.preset.as_deref());
    let preset = match preset_name {
        Some(name) => {
            let preset = PresetCatalog::resolve(name)?;
            config.merge(&preset.configuration());
            logger.info(&format!("Using predefined configuration: {name}"));
            Some(preset)
        }
        None => None,
    };

    if let Some(ref path) = inputs.parse {
        let parser = HeaderParser::new(schema)?;
        let parsed = parser.parse_file(path)?;
        if parsed.is_empty() {
            logger.warn(&format!("No options found in {}", path.display()));
        }
        config.merge(&parsed);
        logger.info(&format!("Parsed configuration from: {}", path.display()));
    }

    config.merge(&settings.option_overrides());
    config.merge(&inputs.option_flags);

    let mode = if inputs.strict {
        ValidationMode::Strict
    } else {
        settings.validation_mode()
    };

    Ok(Assembled {
        config,
        preset,
        mode,
    })
}

/// Validate and print violations to stderr.
///
/// Returns a semantic failure if the configuration is invalid.
pub fn check(schema: &OptionSchema, assembled: &Assembled) -> Result<ValidationReport, CliError> {
    let report = Validator::new(schema)
        .with_mode(assembled.mode)
        .validate(&assembled.config);

    if report.is_ok() {
        return Ok(report);
    }

    eprintln!("Configuration validation errors:");
    for message in report.messages() {
        eprintln!("  - {message}");
    }
    Err(CliError::SemanticFailure(format!(
        "Configuration is invalid ({} violation(s))",
        report.violations().len()
    )))
}

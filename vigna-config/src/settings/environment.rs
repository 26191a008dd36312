//! Environment variable overrides for settings.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::settings::schema::Settings;

/// Preset name.
pub const PRESET_ENV: &str = "VIGNA_PRESET";
/// Header output path.
pub const OUTPUT_ENV: &str = "VIGNA_OUTPUT";
/// Header title.
pub const TITLE_ENV: &str = "VIGNA_TITLE";
/// Strict validation (boolean).
pub const STRICT_ENV: &str = "VIGNA_STRICT";

/// Applies `VIGNA_*` environment variables to settings.
///
/// # Examples
///
/// ```no_run
/// use vigna_config::settings::{EnvironmentSettings, Settings};
///
/// let mut settings = Settings::default();
/// EnvironmentSettings::apply_overrides(&mut settings).unwrap();
/// ```
pub struct EnvironmentSettings;

impl EnvironmentSettings {
    /// Overwrites fields whose variable is set.
    ///
    /// # Errors
    ///
    /// Returns an error if `VIGNA_STRICT` is not a recognized boolean.
    pub fn apply_overrides(settings: &mut Settings) -> Result<()> {
        if let Ok(preset) = env::var(PRESET_ENV) {
            settings.preset = Some(preset);
        }

        if let Some(output) = env::var_os(OUTPUT_ENV) {
            settings.output = Some(PathBuf::from(output));
        }

        if let Ok(title) = env::var(TITLE_ENV) {
            settings.title = Some(title);
        }

        if let Ok(val) = env::var(STRICT_ENV) {
            settings.strict = Some(Self::parse_bool(STRICT_ENV, &val)?);
        }

        Ok(())
    }

    /// Parses a boolean.
    ///
    /// Accepts true/1/yes/on and false/0/no/off, case-insensitively.
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

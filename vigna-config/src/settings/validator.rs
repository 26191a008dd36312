//! Settings validation.

use crate::error::{Error, Result};
use crate::preset::PresetCatalog;
use crate::schema::OptionSchema;
use crate::settings::schema::Settings;

/// Checks merged settings against the presets and the option schema.
///
/// # Examples
///
/// ```
/// use vigna_config::settings::{Settings, SettingsValidator};
/// use vigna_config::OptionSchema;
///
/// let schema = OptionSchema::builtin().unwrap();
/// let settings = Settings { preset: Some("rv64gc".into()), ..Default::default() };
/// assert!(SettingsValidator::validate(&settings, schema).is_err());
/// ```
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validates every set field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(settings: &Settings, schema: &OptionSchema) -> Result<()> {
        if let Some(ref preset) = settings.preset {
            if PresetCatalog::find(preset).is_none() {
                return Err(Error::Validation {
                    field: "preset".into(),
                    message: format!(
                        "unknown preset '{preset}' (available: {})",
                        PresetCatalog::names().join(", ")
                    ),
                });
            }
        }

        if let Some(ref output) = settings.output {
            if output.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "output".into(),
                    message: "output path cannot be empty".into(),
                });
            }
        }

        if let Some(ref title) = settings.title {
            Self::validate_title(title)?;
        }

        if let Some(ref options) = settings.options {
            for name in options.keys() {
                if !schema.contains(name) {
                    return Err(Error::Validation {
                        field: format!("options.{name}"),
                        message: format!("unknown option '{name}'"),
                    });
                }
            }
        }

        Ok(())
    }

    /// A title lands inside a `/* */` comment on a single line.
    fn validate_title(title: &str) -> Result<()> {
        if title.contains('\n') || title.contains('\r') {
            return Err(Error::Validation {
                field: "title".into(),
                message: "title must be a single line".into(),
            });
        }
        if title.contains("*/") {
            return Err(Error::Validation {
                field: "title".into(),
                message: "title cannot contain '*/'".into(),
            });
        }
        Ok(())
    }
}

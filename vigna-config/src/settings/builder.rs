//! Builder assembling settings from every source.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::schema::OptionSchema;
use crate::settings::environment::EnvironmentSettings;
use crate::settings::loader::SettingsLoader;
use crate::settings::merger::SettingsMerger;
use crate::settings::schema::Settings;
use crate::settings::validator::SettingsValidator;

/// Builds [`Settings`] from files, environment and overrides.
///
/// # Examples
///
/// ```
/// use vigna_config::{Settings, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_settings(Settings {
///         preset: Some("rv32ic".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.preset.as_deref(), Some("rv32ic"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Settings>,
}

impl SettingsBuilder {
    /// Creates a builder reading every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the project file search at `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Reads user settings from `dir` instead of the default location.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignores settings files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `VIGNA_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.overrides = Some(settings);
        self
    }

    /// Loads, merges and validates settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be read or decoded, an
    /// environment value is invalid, or the merged settings fail
    /// validation.
    pub fn build(self) -> Result<Settings> {
        let mut settings = if self.skip_files {
            Settings::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = SettingsLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            log::debug!("merging {} settings file(s)", sources.len());
            SettingsMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentSettings::apply_overrides(&mut settings)?;
        }

        if let Some(ref overrides) = self.overrides {
            SettingsMerger::merge_into(&mut settings, overrides);
        }

        SettingsValidator::validate(&settings, OptionSchema::builtin()?)?;
        Ok(settings)
    }
}

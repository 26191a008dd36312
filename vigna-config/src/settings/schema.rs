//! Settings file format.
//!
//! Settings are tool-level defaults, not a configuration of the core. A
//! settings file looks like:
//!
//! ```yaml
//! preset: rv32imc
//! output: rtl/vigna_conf.vh
//! title: Board build
//! strict: true
//! options:
//!   interrupt: true
//!   reset_addr: "32'h8000_0000"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::configuration::{Configuration, OptionValue};
use crate::validator::ValidationMode;

/// Output file used when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "vigna_conf_generated.vh";

/// Tool settings, merged from files, environment and callers.
///
/// # Examples
///
/// ```
/// use vigna_config::{Settings, ValidationMode};
///
/// let settings: Settings = serde_yaml::from_str("preset: rv32im\nstrict: true\n").unwrap();
/// assert_eq!(settings.preset.as_deref(), Some("rv32im"));
/// assert_eq!(settings.validation_mode(), ValidationMode::Strict);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Preset applied when the caller names none.
    pub preset: Option<String>,

    /// Default header output path.
    pub output: Option<PathBuf>,

    /// Default title comment of the header.
    pub title: Option<String>,

    /// Validate in strict mode.
    pub strict: Option<bool>,

    /// Option values applied on top of the preset or parsed header.
    pub options: Option<BTreeMap<String, OptionValue>>,
}

impl Settings {
    /// Validation mode selected by `strict`.
    #[must_use]
    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict.unwrap_or(false) {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }

    /// The option overrides as a configuration.
    #[must_use]
    pub fn option_overrides(&self) -> Configuration {
        self.options.clone().map(Configuration::from).unwrap_or_default()
    }

    /// Output path, falling back to [`DEFAULT_OUTPUT`].
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.output
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT))
    }
}

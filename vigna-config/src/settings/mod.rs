//! Tool settings for vigna-config.
//!
//! Settings hold the defaults a project wants every run to use: which
//! preset to start from, where to write the header, its title, whether to
//! validate strictly, and option values to apply on top of the preset.
//!
//! # Precedence
//!
//! Sources are merged from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. User settings (`~/.vigna/config.yaml`, or `$VIGNA_CONFIG_DIR/config.yaml`)
//! 3. Project settings (nearest `vigna.yaml` walking up from the working directory)
//! 4. Environment variables (`VIGNA_PRESET`, `VIGNA_OUTPUT`, `VIGNA_TITLE`, `VIGNA_STRICT`)
//! 5. Programmatic overrides (via `SettingsBuilder::with_settings`)
//!
//! Scalar fields are replaced by higher sources; `options` maps are merged
//! key by key.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use vigna_config::SettingsBuilder;
//!
//! let settings = SettingsBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! println!("writing to {}", settings.output_path().display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::SettingsBuilder;
pub use environment::EnvironmentSettings;
pub use loader::{SettingsLoader, SettingsSource};
pub use merger::SettingsMerger;
pub use schema::{Settings, DEFAULT_OUTPUT};
pub use validator::SettingsValidator;

//! Settings file discovery and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::settings::schema::Settings;

/// File name of project settings.
pub const PROJECT_FILE: &str = "vigna.yaml";

/// File name of user settings inside the user settings directory.
pub const USER_FILE: &str = "config.yaml";

/// Environment variable relocating the user settings directory.
pub const CONFIG_DIR_ENV: &str = "VIGNA_CONFIG_DIR";

/// A loaded settings file with its precedence.
#[derive(Debug, Clone)]
pub struct SettingsSource {
    /// Path of the file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed settings.
    pub settings: Settings,
}

/// Discovers and loads settings files.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vigna_config::settings::SettingsLoader;
///
/// let sources = SettingsLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} settings file(s)", sources.len());
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads the user file and the nearest project file.
    ///
    /// The user file is `{config_dir}/config.yaml`, where `config_dir`
    /// defaults to [`default_config_dir`](Self::default_config_dir). The
    /// project file is the first `vigna.yaml` found walking up from
    /// `working_dir`. Sources are returned lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or decoded.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<SettingsSource>> {
        let mut sources = Vec::new();

        if let Some(user) = Self::load_user_settings(config_dir)? {
            sources.push(user);
        }
        if let Some(project) = Self::discover_project_settings(working_dir)? {
            sources.push(project);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_settings(config_dir: Option<&Path>) -> Result<Option<SettingsSource>> {
        let dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => match Self::default_config_dir() {
                Ok(dir) => dir,
                Err(e) => {
                    log::debug!("skipping user settings: {e}");
                    return Ok(None);
                }
            },
        };

        let path = dir.join(USER_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let settings = Self::load_file(&path)?;
        Ok(Some(SettingsSource {
            path,
            precedence: 1,
            settings,
        }))
    }

    /// Finds the nearest `vigna.yaml` at or above `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file found cannot be read or decoded.
    pub fn discover_project_settings(start_dir: &Path) -> Result<Option<SettingsSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_FILE);
            if candidate.is_file() {
                let settings = Self::load_file(&candidate)?;
                return Ok(Some(SettingsSource {
                    path: candidate,
                    precedence: 2,
                    settings,
                }));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Reads and decodes one settings file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Configuration`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read settings file: {e}"),
        })?;

        log::debug!("loading settings from {}", path.display());
        let settings = serde_yaml::from_str(&contents)?;
        Ok(settings)
    }

    /// The user settings directory: `$VIGNA_CONFIG_DIR`, else `~/.vigna`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the variable nor a home directory is
    /// available.
    pub fn default_config_dir() -> Result<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(".vigna"))
    }
}

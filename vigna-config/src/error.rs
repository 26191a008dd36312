//! Error types for the vigna-config library.
//!
//! This module provides the error hierarchy for schema construction,
//! header I/O and settings loading, using `thiserror` for ergonomic error
//! handling. Validation findings are not errors; they are reported as data
//! through [`ValidationReport`](crate::ValidationReport).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vigna-config error.
///
/// # Examples
///
/// ```
/// use vigna_config::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(14)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vigna-config library.
#[derive(Debug, Error)]
pub enum Error {
    /// The option schema is internally inconsistent.
    #[error("invalid option schema: {0}")]
    Schema(#[from] SchemaError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A settings value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A settings file could not be decoded.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A directive pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The requested preset does not exist.
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// The preset name that was requested.
        name: String,
    },

    /// The requested option does not exist in the schema.
    #[error("unknown option '{name}'")]
    UnknownOption {
        /// The option name that was requested.
        name: String,
    },
}

impl Error {
    /// Check if error is a lookup miss (unknown preset or option).
    ///
    /// # Examples
    ///
    /// ```
    /// use vigna_config::Error;
    ///
    /// let err = Error::UnknownPreset { name: "rv64gc".to_string() };
    /// assert!(err.is_unknown_name());
    /// ```
    #[must_use]
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::UnknownPreset { .. } | Self::UnknownOption { .. })
    }

    /// Check if error comes from an inconsistent schema.
    #[must_use]
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Self-check failures of an option schema.
///
/// These are data errors in the schema table itself and are raised when the
/// schema is built, never while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A `depends_on` or `conflicts_with` entry names an unknown option.
    #[error("option '{option}' references unknown option '{reference}'")]
    UnresolvedReference {
        /// The option holding the dangling reference.
        option: String,
        /// The name that could not be resolved.
        reference: String,
    },

    /// Two entries share the same name.
    #[error("duplicate option name '{name}'")]
    DuplicateName {
        /// The duplicated name.
        name: String,
    },

    /// Two entries share the same directive.
    #[error("duplicate directive '{directive}'")]
    DuplicateDirective {
        /// The duplicated directive.
        directive: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_reference_error() {
        let err: Error = SchemaError::UnresolvedReference {
            option: "m_fpga_fast".to_string(),
            reference: "m_ext".to_string(),
        }
        .into();
        let display = format!("{err}");
        assert!(display.contains("invalid option schema"));
        assert!(display.contains("m_fpga_fast"));
        assert!(display.contains("unknown option 'm_ext'"));
        assert!(err.is_schema_error());
        assert!(!err.is_unknown_name());
    }

    #[test]
    fn test_duplicate_schema_entries() {
        let name = SchemaError::DuplicateName {
            name: "alignment".to_string(),
        };
        let directive = SchemaError::DuplicateDirective {
            directive: "VIGNA_CORE_ALIGNMENT".to_string(),
        };
        assert_eq!(format!("{name}"), "duplicate option name 'alignment'");
        assert_eq!(
            format!("{directive}"),
            "duplicate directive 'VIGNA_CORE_ALIGNMENT'"
        );
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/vigna.yaml"),
            reason: "permission denied".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/vigna.yaml"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "preset".to_string(),
            message: "unknown preset 'rv64'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("preset"));
        assert!(display.contains("rv64"));
    }

    #[test]
    fn test_unknown_lookups() {
        let preset = Error::UnknownPreset {
            name: "rv64".to_string(),
        };
        let option = Error::UnknownOption {
            name: "f_extension".to_string(),
        };
        assert_eq!(format!("{preset}"), "unknown preset 'rv64'");
        assert_eq!(format!("{option}"), "unknown option 'f_extension'");
        assert!(preset.is_unknown_name());
        assert!(option.is_unknown_name());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::UnknownOption {
                name: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}

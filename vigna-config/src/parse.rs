//! Header parsing.
//!
//! [`HeaderParser`] reconstructs a [`Configuration`] from an existing
//! header. It recognizes the two directive forms written by
//! [`render`](crate::render) and by hand:
//!
//! - active: `` `define DIRECTIVE [value]``
//! - inactive: `` //`define DIRECTIVE``
//!
//! Each option is looked up independently. An active line wins over an
//! inactive one, and among lines of the same form the first one wins.
//! Options whose directive does not appear at all stay unspecified.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::configuration::{Configuration, OptionValue};
use crate::error::Result;
use crate::render::{ACTIVE_MARKER, INACTIVE_MARKER};
use crate::schema::{OptionKind, OptionSchema, OptionSpec};

/// Compiled patterns of one option.
#[derive(Debug, Clone)]
struct DirectivePattern {
    name: &'static str,
    kind: OptionKind,
    active: Regex,
    inactive: Regex,
}

impl DirectivePattern {
    fn compile(spec: &OptionSpec) -> Result<Self> {
        let directive = regex::escape(spec.directive);
        let active_marker = regex::escape(ACTIVE_MARKER);
        let inactive_marker = regex::escape(INACTIVE_MARKER);
        let active = Regex::new(&format!(
            r"^{active_marker}[ \t]+{directive}(?:[ \t]+(.*?))?[ \t]*$"
        ))?;
        let inactive = Regex::new(&format!(
            r"^{inactive_marker}[ \t]+{directive}(?:[ \t].*)?$"
        ))?;

        Ok(Self {
            name: spec.name,
            kind: spec.kind,
            active,
            inactive,
        })
    }

    /// Value recorded for this option, if any line mentions it.
    fn scan(&self, lines: &[&str]) -> Option<OptionValue> {
        if let Some(captures) = lines.iter().find_map(|line| self.active.captures(line)) {
            return match self.kind {
                OptionKind::Flag { .. } => Some(OptionValue::Flag(true)),
                OptionKind::Value { .. } => captures
                    .get(1)
                    .map(|m| m.as_str().trim())
                    .filter(|value| !value.is_empty())
                    .map(OptionValue::from),
            };
        }

        lines
            .iter()
            .any(|line| self.inactive.is_match(line))
            .then_some(OptionValue::Flag(false))
    }
}

/// Parses header text back into a configuration.
///
/// # Examples
///
/// ```
/// use vigna_config::{HeaderParser, OptionSchema, OptionValue};
///
/// let schema = OptionSchema::builtin().unwrap();
/// let parser = HeaderParser::new(schema).unwrap();
/// let config = parser.parse(
///     "`define VIGNA_CORE_M_EXTENSION\n\
///      //`define VIGNA_CORE_C_EXTENSION\n\
///      `define VIGNA_CORE_RESET_ADDR 32'h8000_0000\n",
/// );
///
/// assert_eq!(config.get("m_extension"), Some(&OptionValue::Flag(true)));
/// assert_eq!(config.get("c_extension"), Some(&OptionValue::Flag(false)));
/// assert_eq!(config.get("reset_addr"), Some(&OptionValue::from("32'h8000_0000")));
/// assert!(!config.contains("interrupt"));
/// ```
#[derive(Debug, Clone)]
pub struct HeaderParser {
    patterns: Vec<DirectivePattern>,
}

impl HeaderParser {
    /// Compiles the directive patterns of every option in `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`](crate::Error::Pattern) if a pattern fails
    /// to compile.
    pub fn new(schema: &OptionSchema) -> Result<Self> {
        let patterns = schema
            .iter()
            .map(DirectivePattern::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Parses header text.
    #[must_use]
    pub fn parse(&self, text: &str) -> Configuration {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let config: Configuration = self
            .patterns
            .iter()
            .filter_map(|pattern| pattern.scan(&lines).map(|value| (pattern.name, value)))
            .collect();

        log::debug!(
            "parsed {} of {} option(s) from {} line(s)",
            config.len(),
            self.patterns.len(),
            lines.len()
        );
        config
    }

    /// Reads and parses a header file.
    ///
    /// A missing file parses as an empty configuration. Bytes that are not
    /// valid UTF-8 are replaced before parsing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn parse_file(&self, path: &Path) -> Result<Configuration> {
        match fs::read(path) {
            Ok(bytes) => Ok(self.parse(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} does not exist, nothing to parse", path.display());
                Ok(Configuration::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

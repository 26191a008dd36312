//! Command-line flag identifiers derived from the schema.
//!
//! Every option gets fixed external identifiers, computed once from its
//! name: flag options get `enable-<name>` and `disable-<name>`, value
//! options get `<name>`, with underscores turned into dashes. Front ends map
//! parsed flags back to options through this table instead of deriving
//! names at lookup time.

use super::{OptionKind, OptionSchema};
use crate::configuration::{Configuration, OptionValue};

/// Flag identifiers of one option (without the leading `--`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagNames {
    /// A flag option, switched by a pair of flags.
    Toggle {
        /// The option name.
        option: &'static str,
        /// Description used for help text.
        description: &'static str,
        /// Identifier that enables the option.
        enable: String,
        /// Identifier that disables the option.
        disable: String,
    },
    /// A value option, set by a flag taking the literal.
    Value {
        /// The option name.
        option: &'static str,
        /// Description used for help text.
        description: &'static str,
        /// Identifier that carries the value.
        flag: String,
        /// Default literal, shown in help text.
        default: &'static str,
    },
}

impl FlagNames {
    /// The option these flags control.
    #[must_use]
    pub fn option(&self) -> &'static str {
        match self {
            Self::Toggle { option, .. } | Self::Value { option, .. } => *option,
        }
    }

    /// All identifiers of this option.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Self::Toggle {
                enable, disable, ..
            } => vec![enable.as_str(), disable.as_str()],
            Self::Value { flag, .. } => vec![flag.as_str()],
        }
    }
}

/// Schema-derived table of flag identifiers, in schema order.
///
/// # Examples
///
/// ```
/// use vigna_config::{FlagNames, OptionSchema};
///
/// let table = OptionSchema::builtin().unwrap().flag_table();
/// let (names, enabled) = table.resolve("enable-m-fpga-fast").unwrap();
/// assert_eq!(names.option(), "m_fpga_fast");
/// assert_eq!(enabled, Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    entries: Vec<FlagNames>,
}

impl FlagTable {
    /// Computes the identifiers of every option in `schema`.
    #[must_use]
    pub fn from_schema(schema: &OptionSchema) -> Self {
        let entries = schema
            .iter()
            .map(|spec| {
                let stem = spec.name.replace('_', "-");
                match spec.kind {
                    OptionKind::Flag { .. } => FlagNames::Toggle {
                        option: spec.name,
                        description: spec.description,
                        enable: format!("enable-{stem}"),
                        disable: format!("disable-{stem}"),
                    },
                    OptionKind::Value { default } => FlagNames::Value {
                        option: spec.name,
                        description: spec.description,
                        flag: stem,
                        default,
                    },
                }
            })
            .collect();
        Self { entries }
    }

    /// Iterates entries in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlagNames> {
        self.entries.iter()
    }

    /// Finds the entry of an option.
    #[must_use]
    pub fn for_option(&self, option: &str) -> Option<&FlagNames> {
        self.entries.iter().find(|e| e.option() == option)
    }

    /// Resolves an identifier to its entry.
    ///
    /// The second element is `Some(true)` for an enable flag, `Some(false)`
    /// for a disable flag and `None` for a value flag.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> Option<(&FlagNames, Option<bool>)> {
        self.entries.iter().find_map(|entry| match entry {
            FlagNames::Toggle {
                enable, disable, ..
            } => {
                if enable == identifier {
                    Some((entry, Some(true)))
                } else if disable == identifier {
                    Some((entry, Some(false)))
                } else {
                    None
                }
            }
            FlagNames::Value { flag, .. } => (flag == identifier).then_some((entry, None)),
        })
    }

    /// Applies parsed flags to a configuration.
    ///
    /// `lookup` reports, for an identifier, whether it was given and with
    /// which value. An enable flag wins over its disable flag; empty values
    /// are ignored.
    pub fn apply<F>(&self, config: &mut Configuration, mut lookup: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        for entry in &self.entries {
            match entry {
                FlagNames::Toggle {
                    option,
                    enable,
                    disable,
                    ..
                } => {
                    if lookup(enable.as_str()).is_some() {
                        config.set(*option, OptionValue::Flag(true));
                    } else if lookup(disable.as_str()).is_some() {
                        config.set(*option, OptionValue::Flag(false));
                    }
                }
                FlagNames::Value { option, flag, .. } => {
                    if let Some(value) = lookup(flag.as_str()).filter(|v| !v.is_empty()) {
                        config.set(*option, OptionValue::Value(value));
                    }
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a FlagTable {
    type Item = &'a FlagNames;
    type IntoIter = std::slice::Iter<'a, FlagNames>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

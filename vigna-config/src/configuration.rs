//! The configuration model: chosen values for named options.
//!
//! A [`Configuration`] maps option names to an [`OptionValue`]. Entries that
//! are absent are "unspecified" and are treated as disabled when validating
//! and rendering. Configurations are plain values owned by their caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::OptionSchema;

/// The value chosen for one option.
///
/// Serialized untagged, so YAML/JSON `true`/`false` map to [`Flag`](Self::Flag)
/// and strings map to [`Value`](Self::Value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Enabled (`true`) or disabled (`false`).
    Flag(bool),
    /// A literal emitted after the directive, e.g. `32'h0000_0000`.
    Value(String),
}

impl OptionValue {
    /// Returns `true` if the option counts as enabled.
    ///
    /// `Flag(true)` and any `Value` with non-blank text are enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigna_config::OptionValue;
    ///
    /// assert!(OptionValue::Flag(true).is_enabled());
    /// assert!(OptionValue::from("32'h0000_1000").is_enabled());
    /// assert!(!OptionValue::from("  ").is_enabled());
    /// assert!(!OptionValue::Flag(false).is_enabled());
    /// ```
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Value(value) => !value.trim().is_empty(),
        }
    }

    /// The literal, for enabled values carrying one.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Value(value) if !value.trim().is_empty() => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(enabled) => write!(f, "{enabled}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(enabled: bool) -> Self {
        Self::Flag(enabled)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// A mapping from option name to chosen value.
///
/// Iteration is ordered by option name.
///
/// # Examples
///
/// ```
/// use vigna_config::{Configuration, OptionValue};
///
/// let config: Configuration = [
///     ("m_extension", OptionValue::Flag(true)),
///     ("reset_addr", OptionValue::from("32'h0000_0000")),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(config.is_enabled("m_extension"));
/// assert!(!config.is_enabled("c_extension"));
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: BTreeMap<String, OptionValue>,
}

impl Configuration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration holding every option's schema default.
    #[must_use]
    pub fn with_defaults(schema: &OptionSchema) -> Self {
        schema
            .iter()
            .map(|spec| (spec.name, spec.default_value()))
            .collect()
    }

    /// Sets an option, returning the previous value.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the value of an option, if specified.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    /// Removes an option, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        self.entries.remove(name)
    }

    /// Returns `true` if the option is specified (enabled or not).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns `true` if the option is specified and enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(OptionValue::is_enabled)
    }

    /// Number of specified options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no option is specified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates specified options in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names that the schema does not declare, in name order.
    pub fn unknown_names<'a>(
        &'a self,
        schema: &'a OptionSchema,
    ) -> impl Iterator<Item = &'a str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|name| !schema.contains(name))
    }

    /// Overlays `other` onto this configuration; its entries win.
    pub fn merge(&mut self, other: &Configuration) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        config.extend(iter);
        config
    }
}

impl<K, V> Extend<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl From<BTreeMap<String, OptionValue>> for Configuration {
    fn from(entries: BTreeMap<String, OptionValue>) -> Self {
        Self { entries }
    }
}

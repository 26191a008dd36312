//! The option schema: the catalog of configuration options.
//!
//! Each [`OptionSpec`] describes one option of the core: its symbolic name,
//! the directive emitted into the header, a description, its kind and
//! default, the category it is grouped under, and its dependency and
//! conflict rules.
//!
//! An [`OptionSchema`] is immutable once built. Construction checks that
//! names and directives are unique and that every `depends_on` and
//! `conflicts_with` reference resolves, so the rest of the crate can assume
//! a consistent catalog.
//!
//! # Examples
//!
//! ```
//! use vigna_config::OptionSchema;
//!
//! let schema = OptionSchema::builtin().unwrap();
//! let fast = schema.get("m_fpga_fast").unwrap();
//! assert_eq!(fast.directive, "VIGNA_CORE_M_FPGA_FAST");
//! assert_eq!(fast.depends_on, Some("m_extension"));
//! assert!(schema.get("f_extension").is_none());
//! ```

mod builtin;
pub mod flags;

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::configuration::OptionValue;
use crate::error::{Result, SchemaError};

pub use builtin::BUILTIN_OPTIONS;
pub use flags::{FlagNames, FlagTable};

/// The kind of an option, carrying its kind-specific default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Present/absent option.
    Flag {
        /// Whether the option is enabled by default.
        default: bool,
    },
    /// Option carrying a literal value after the directive.
    Value {
        /// The default literal, e.g. `32'h0000_0000`.
        default: &'static str,
    },
}

/// Declaration of a single configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Unique symbolic name, the key used in configurations.
    pub name: &'static str,
    /// Token emitted after `` `define`` in the header.
    pub directive: &'static str,
    /// Human-readable text, emitted as a comment.
    pub description: &'static str,
    /// Flag or value, with its default.
    pub kind: OptionKind,
    /// Grouping label used to lay out the header.
    pub category: &'static str,
    /// Option that must be enabled for this one to be enabled.
    pub depends_on: Option<&'static str>,
    /// Options that must not be enabled together with this one.
    pub conflicts_with: &'static [&'static str],
}

impl OptionSpec {
    /// Declares a flag option without dependency or conflicts.
    #[must_use]
    pub const fn flag(
        name: &'static str,
        directive: &'static str,
        description: &'static str,
        category: &'static str,
        default: bool,
    ) -> Self {
        Self {
            name,
            directive,
            description,
            kind: OptionKind::Flag { default },
            category,
            depends_on: None,
            conflicts_with: &[],
        }
    }

    /// Declares a value option without dependency or conflicts.
    #[must_use]
    pub const fn value(
        name: &'static str,
        directive: &'static str,
        description: &'static str,
        category: &'static str,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            directive,
            description,
            kind: OptionKind::Value { default },
            category,
            depends_on: None,
            conflicts_with: &[],
        }
    }

    /// Returns this spec with a dependency on `option`.
    #[must_use]
    pub const fn requires(self, option: &'static str) -> Self {
        Self {
            depends_on: Some(option),
            ..self
        }
    }

    /// Returns this spec with the given conflict list.
    #[must_use]
    pub const fn conflicts(self, options: &'static [&'static str]) -> Self {
        Self {
            conflicts_with: options,
            ..self
        }
    }

    /// Returns `true` for flag options.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self.kind, OptionKind::Flag { .. })
    }

    /// Returns `true` for value options.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.kind, OptionKind::Value { .. })
    }

    /// The default of this option as a configuration value.
    #[must_use]
    pub fn default_value(&self) -> OptionValue {
        match self.kind {
            OptionKind::Flag { default } => OptionValue::Flag(default),
            OptionKind::Value { default } => OptionValue::Value(default.to_string()),
        }
    }
}

/// Options sharing a category, in schema order.
#[derive(Debug, Clone)]
pub struct Category<'a> {
    /// The category label.
    pub name: &'static str,
    /// Options of this category, in declaration order.
    pub options: Vec<&'a OptionSpec>,
}

/// An immutable, self-consistent catalog of options.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    options: Vec<OptionSpec>,
}

static BUILTIN: OnceLock<std::result::Result<OptionSchema, SchemaError>> = OnceLock::new();

impl OptionSchema {
    /// Builds a schema from declarations, checking its consistency.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] (wrapped in [`Error::Schema`](crate::Error::Schema))
    /// if a name or directive is declared twice, or if a dependency or
    /// conflict names an option that is not declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigna_config::{OptionSchema, OptionSpec};
    ///
    /// let broken = OptionSchema::new(vec![
    ///     OptionSpec::flag("fast", "FAST", "Fast path", "Misc", false).requires("base"),
    /// ]);
    /// assert!(broken.unwrap_err().is_schema_error());
    /// ```
    pub fn new(options: Vec<OptionSpec>) -> Result<Self> {
        Self::check(&options)?;
        Ok(Self { options })
    }

    /// The built-in VIGNA schema, checked once per process.
    ///
    /// # Errors
    ///
    /// Returns the self-check failure if the built-in table is inconsistent.
    pub fn builtin() -> Result<&'static Self> {
        let schema = BUILTIN.get_or_init(|| {
            let options = BUILTIN_OPTIONS.to_vec();
            Self::check(&options).map(|()| Self { options })
        });
        schema.as_ref().map_err(|e| e.clone().into())
    }

    fn check(options: &[OptionSpec]) -> std::result::Result<(), SchemaError> {
        let mut names = HashSet::new();
        let mut directives = HashSet::new();
        for spec in options {
            if !names.insert(spec.name) {
                return Err(SchemaError::DuplicateName {
                    name: spec.name.to_string(),
                });
            }
            if !directives.insert(spec.directive) {
                return Err(SchemaError::DuplicateDirective {
                    directive: spec.directive.to_string(),
                });
            }
        }

        for spec in options {
            let references = spec.depends_on.iter().chain(spec.conflicts_with.iter());
            for reference in references {
                if !names.contains(reference) {
                    return Err(SchemaError::UnresolvedReference {
                        option: spec.name.to_string(),
                        reference: (*reference).to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Looks up an option by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|spec| spec.name == name)
    }

    /// Returns `true` if an option with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates options in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the schema declares no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options grouped by category.
    ///
    /// Categories appear in order of their first declaration, options keep
    /// declaration order within a category. This order defines the header
    /// layout.
    #[must_use]
    pub fn categories(&self) -> Vec<Category<'_>> {
        let mut categories: Vec<Category<'_>> = Vec::new();
        for spec in &self.options {
            match categories.iter_mut().find(|c| c.name == spec.category) {
                Some(category) => category.options.push(spec),
                None => categories.push(Category {
                    name: spec.category,
                    options: vec![spec],
                }),
            }
        }
        categories
    }

    /// Iterates options in category order, the order used by the header and
    /// by validation reports.
    pub fn iter_grouped(&self) -> impl Iterator<Item = &OptionSpec> {
        self.categories().into_iter().flat_map(|c| c.options)
    }

    /// Builds the command-line flag table for this schema.
    #[must_use]
    pub fn flag_table(&self) -> FlagTable {
        FlagTable::from_schema(self)
    }
}

impl<'a> IntoIterator for &'a OptionSchema {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schema_is_consistent() {
        let schema = OptionSchema::builtin().unwrap();
        assert_eq!(schema.len(), 14);
        assert!(OptionSchema::new(BUILTIN_OPTIONS.to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = OptionSchema::builtin().unwrap();
        let b = OptionSchema::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_lookup() {
        let schema = OptionSchema::builtin().unwrap();
        let reset = schema.get("reset_addr").unwrap();
        assert_eq!(reset.kind, OptionKind::Value { default: "32'h0000_0000" });
        assert!(reset.is_value());
        assert!(schema.get("RESET_ADDR").is_none());
        assert!(!schema.contains("VIGNA_CORE_RESET_ADDR"));
    }

    #[test]
    fn test_categories_in_declaration_order() {
        let schema = OptionSchema::builtin().unwrap();
        let names: Vec<_> = schema.categories().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Core Architecture",
                "Bus Architecture",
                "Memory Configuration",
                "Performance",
                "RISC-V Extensions",
                "Bus Interface",
            ]
        );

        let categories = schema.categories();
        let memory = &categories[2];
        let options: Vec<_> = memory.options.iter().map(|o| o.name).collect();
        assert_eq!(
            options,
            vec!["reset_addr", "stack_reset_enable", "stack_reset_value"]
        );
    }

    #[test]
    fn test_grouping_of_interleaved_categories() {
        let schema = OptionSchema::new(vec![
            OptionSpec::flag("a", "A", "a", "First", false),
            OptionSpec::flag("b", "B", "b", "Second", false),
            OptionSpec::flag("c", "C", "c", "First", false),
        ])
        .unwrap();

        let grouped: Vec<_> = schema.iter_grouped().map(|o| o.name).collect();
        assert_eq!(grouped, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_unresolved_dependency_rejected() {
        let err = OptionSchema::new(vec![
            OptionSpec::flag("fast", "FAST", "Fast path", "Misc", false).requires("base"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            crate::Error::Schema(SchemaError::UnresolvedReference { ref option, ref reference })
                if option == "fast" && reference == "base"
        ));
    }

    #[test]
    fn test_unresolved_conflict_rejected() {
        let err = OptionSchema::new(vec![
            OptionSpec::flag("a", "A", "a", "Misc", false).conflicts(&["b"]),
        ])
        .unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_duplicates_rejected() {
        let names = OptionSchema::new(vec![
            OptionSpec::flag("a", "A", "a", "Misc", false),
            OptionSpec::flag("a", "B", "b", "Misc", false),
        ]);
        assert!(matches!(
            names,
            Err(crate::Error::Schema(SchemaError::DuplicateName { .. }))
        ));

        let directives = OptionSchema::new(vec![
            OptionSpec::flag("a", "A", "a", "Misc", false),
            OptionSpec::flag("b", "A", "b", "Misc", false),
        ]);
        assert!(matches!(
            directives,
            Err(crate::Error::Schema(SchemaError::DuplicateDirective { .. }))
        ));
    }

    #[test]
    fn test_default_values() {
        let schema = OptionSchema::builtin().unwrap();
        assert_eq!(
            schema.get("bus_binding").unwrap().default_value(),
            OptionValue::Flag(true)
        );
        assert_eq!(
            schema.get("stack_reset_value").unwrap().default_value(),
            OptionValue::Value("32'h0000_1000".to_string())
        );
    }
}

//! Configuration validation against the option schema.
//!
//! The validator enforces the dependency and conflict rules declared in the
//! schema. Findings are returned as data in a [`ValidationReport`]; a
//! violation is never an error, the caller decides whether to abort,
//! prompt or carry on.
//!
//! Violations are reported in a fixed order so that output is reproducible:
//! all dependency violations in header order, then all conflict violations
//! in header order, then literals that would not read back from the header,
//! then (strict mode only) findings about names and value kinds.

use std::collections::HashSet;
use std::fmt;

use crate::configuration::{Configuration, OptionValue};
use crate::schema::{OptionKind, OptionSchema};

/// How entries the schema does not describe are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Unknown names and kind mismatches pass through unchecked.
    #[default]
    Lenient,
    /// Unknown names and kind mismatches are reported as violations.
    Strict,
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `option` is enabled but the option it depends on is not.
    Dependency {
        /// The enabled option.
        option: String,
        /// The option it requires.
        requires: String,
    },
    /// Two conflicting options are both enabled.
    Conflict {
        /// The option declaring the conflict.
        option: String,
        /// The option it conflicts with.
        conflicts_with: String,
    },
    /// The literal would not read back unchanged from the rendered header.
    MalformedValue {
        /// The option name.
        option: String,
        /// What is wrong with the literal.
        problem: &'static str,
    },
    /// The name is not declared by the schema (strict mode).
    UnknownOption {
        /// The undeclared name.
        name: String,
    },
    /// The value does not match the option kind (strict mode).
    KindMismatch {
        /// The option name.
        option: String,
        /// What the schema expects.
        expected: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dependency { option, requires } => {
                write!(f, "'{option}' requires '{requires}' to be enabled")
            }
            Self::Conflict {
                option,
                conflicts_with,
            } => write!(f, "'{option}' conflicts with '{conflicts_with}'"),
            Self::MalformedValue { option, problem } => {
                write!(f, "'{option}' value {problem}")
            }
            Self::UnknownOption { name } => write!(f, "unknown option '{name}'"),
            Self::KindMismatch { option, expected } => {
                write!(f, "'{option}' expects {expected}")
            }
        }
    }
}

/// Outcome of validating one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if no violation was found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations rendered as human-readable lines.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Consumes the report, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks configurations against a schema.
///
/// # Examples
///
/// ```
/// use vigna_config::{Configuration, OptionSchema, Validator};
///
/// let schema = OptionSchema::builtin().unwrap();
/// let config = Configuration::new()
///     .with("m_fpga_fast", true)
///     .with("m_extension", false);
///
/// let report = Validator::new(schema).validate(&config);
/// assert!(!report.is_ok());
/// assert_eq!(
///     report.messages(),
///     vec!["'m_fpga_fast' requires 'm_extension' to be enabled"]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a OptionSchema,
    mode: ValidationMode,
}

impl<'a> Validator<'a> {
    /// Creates a lenient validator.
    #[must_use]
    pub fn new(schema: &'a OptionSchema) -> Self {
        Self {
            schema,
            mode: ValidationMode::Lenient,
        }
    }

    /// Sets the validation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The active validation mode.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validates `config`.
    #[must_use]
    pub fn validate(&self, config: &Configuration) -> ValidationReport {
        let mut violations = Vec::new();
        self.check_dependencies(config, &mut violations);
        self.check_conflicts(config, &mut violations);
        self.check_literals(config, &mut violations);
        if self.mode == ValidationMode::Strict {
            self.check_names_and_kinds(config, &mut violations);
        }

        log::debug!(
            "validated {} option(s): {} violation(s)",
            config.len(),
            violations.len()
        );
        ValidationReport { violations }
    }

    fn check_dependencies(&self, config: &Configuration, out: &mut Vec<Violation>) {
        for spec in self.schema.iter_grouped() {
            let Some(requires) = spec.depends_on else {
                continue;
            };
            if config.is_enabled(spec.name) && !config.is_enabled(requires) {
                out.push(Violation::Dependency {
                    option: spec.name.to_string(),
                    requires: requires.to_string(),
                });
            }
        }
    }

    fn check_conflicts(&self, config: &Configuration, out: &mut Vec<Violation>) {
        let mut reported: HashSet<(&str, &str)> = HashSet::new();
        for spec in self.schema.iter_grouped() {
            if !config.is_enabled(spec.name) {
                continue;
            }
            for &other in spec.conflicts_with {
                if !config.is_enabled(other) {
                    continue;
                }
                let pair = if spec.name <= other {
                    (spec.name, other)
                } else {
                    (other, spec.name)
                };
                if reported.insert(pair) {
                    out.push(Violation::Conflict {
                        option: spec.name.to_string(),
                        conflicts_with: other.to_string(),
                    });
                }
            }
        }
    }

    fn check_literals(&self, config: &Configuration, out: &mut Vec<Violation>) {
        for spec in self.schema.iter_grouped() {
            let Some(literal) = config.get(spec.name).and_then(OptionValue::literal) else {
                continue;
            };
            // The parser reads one line and trims it.
            let problem = if literal.contains(['\n', '\r']) {
                "must be a single line"
            } else if literal.trim() != literal {
                "must not have leading or trailing whitespace"
            } else {
                continue;
            };
            out.push(Violation::MalformedValue {
                option: spec.name.to_string(),
                problem,
            });
        }
    }

    fn check_names_and_kinds(&self, config: &Configuration, out: &mut Vec<Violation>) {
        for spec in self.schema.iter_grouped() {
            let expected = match (spec.kind, config.get(spec.name)) {
                (OptionKind::Flag { .. }, Some(OptionValue::Value(_))) => "true or false",
                (OptionKind::Value { .. }, Some(OptionValue::Flag(true))) => "a literal value",
                _ => continue,
            };
            out.push(Violation::KindMismatch {
                option: spec.name.to_string(),
                expected,
            });
        }

        for name in config.unknown_names(self.schema) {
            out.push(Violation::UnknownOption {
                name: name.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OptionSpec;

    fn builtin() -> &'static OptionSchema {
        OptionSchema::builtin().unwrap()
    }

    fn conflicting_schema() -> OptionSchema {
        OptionSchema::new(vec![
            OptionSpec::flag("simple_bus", "SIMPLE_BUS", "Simple bus", "Bus", true)
                .conflicts(&["axi_lite", "wishbone"]),
            OptionSpec::flag("axi_lite", "AXI_LITE", "AXI4-Lite bus", "Bus", false),
            OptionSpec::flag("wishbone", "WISHBONE", "Wishbone bus", "Bus", false)
                .conflicts(&["simple_bus"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_configuration_is_valid() {
        assert!(Validator::new(builtin()).validate(&Configuration::new()).is_ok());
    }

    #[test]
    fn test_dependency_satisfied() {
        let config = Configuration::new()
            .with("m_extension", true)
            .with("m_fpga_fast", true);
        assert!(Validator::new(builtin()).validate(&config).is_ok());
    }

    #[test]
    fn test_dependency_violation_reported_once() {
        let config = Configuration::new().with("m_fpga_fast", true);
        let report = Validator::new(builtin()).validate(&config);

        assert!(!report.is_ok());
        assert_eq!(
            report.violations(),
            &[Violation::Dependency {
                option: "m_fpga_fast".to_string(),
                requires: "m_extension".to_string(),
            }]
        );
    }

    #[test]
    fn test_disabled_dependent_is_not_checked() {
        let config = Configuration::new()
            .with("m_fpga_fast", false)
            .with("stack_reset_value", "");
        assert!(Validator::new(builtin()).validate(&config).is_ok());
    }

    #[test]
    fn test_value_option_dependency() {
        let config = Configuration::new().with("stack_reset_value", "32'h0000_2000");
        let report = Validator::new(builtin()).validate(&config);
        assert_eq!(
            report.messages(),
            vec!["'stack_reset_value' requires 'stack_reset_enable' to be enabled"]
        );
    }

    #[test]
    fn test_dependency_order_follows_header() {
        let config = Configuration::new()
            .with("m_fpga_fast", true)
            .with("stack_reset_value", "32'h0000_2000");
        let report = Validator::new(builtin()).validate(&config);
        let options: Vec<_> = report
            .violations()
            .iter()
            .map(|v| match v {
                Violation::Dependency { option, .. } => option.as_str(),
                other => panic!("unexpected violation {other}"),
            })
            .collect();
        assert_eq!(options, vec!["stack_reset_value", "m_fpga_fast"]);
    }

    #[test]
    fn test_conflict_reported_once() {
        let schema = conflicting_schema();
        let config = Configuration::new()
            .with("simple_bus", true)
            .with("axi_lite", true);
        let report = Validator::new(&schema).validate(&config);

        assert_eq!(report.messages(), vec!["'simple_bus' conflicts with 'axi_lite'"]);
    }

    #[test]
    fn test_symmetric_declaration_reported_once() {
        let schema = conflicting_schema();
        let config = Configuration::new()
            .with("simple_bus", true)
            .with("wishbone", true);
        let report = Validator::new(&schema).validate(&config);

        assert_eq!(report.violations().len(), 1);
        assert_eq!(
            report.violations()[0],
            Violation::Conflict {
                option: "simple_bus".to_string(),
                conflicts_with: "wishbone".to_string(),
            }
        );
    }

    #[test]
    fn test_one_sided_declaration() {
        let schema = conflicting_schema();
        let config = Configuration::new()
            .with("axi_lite", true)
            .with("simple_bus", true);
        let report = Validator::new(&schema).validate(&config);

        // only simple_bus declares this conflict
        assert_eq!(report.messages(), vec!["'simple_bus' conflicts with 'axi_lite'"]);
    }

    #[test]
    fn test_conflict_requires_both_enabled() {
        let schema = conflicting_schema();
        let config = Configuration::new()
            .with("simple_bus", true)
            .with("axi_lite", false);
        assert!(Validator::new(&schema).validate(&config).is_ok());
    }

    #[test]
    fn test_lenient_ignores_unknown_names() {
        let config = Configuration::new()
            .with("f_extension", true)
            .with("m_extension", true);
        let validator = Validator::new(builtin());
        assert_eq!(validator.mode(), ValidationMode::Lenient);
        assert!(validator.validate(&config).is_ok());
    }

    #[test]
    fn test_strict_reports_unknown_names() {
        let config = Configuration::new()
            .with("f_extension", true)
            .with("a_extension", false);
        let report = Validator::new(builtin())
            .with_mode(ValidationMode::Strict)
            .validate(&config);

        assert_eq!(
            report.messages(),
            vec!["unknown option 'a_extension'", "unknown option 'f_extension'"]
        );
    }

    #[test]
    fn test_strict_reports_kind_mismatch() {
        let config = Configuration::new()
            .with("reset_addr", true)
            .with("alignment", "yes");
        let report = Validator::new(builtin())
            .with_mode(ValidationMode::Strict)
            .validate(&config);

        assert_eq!(
            report.messages(),
            vec![
                "'reset_addr' expects a literal value",
                "'alignment' expects true or false",
            ]
        );
    }

    #[test]
    fn test_multiline_literal_is_malformed() {
        let config = Configuration::new()
            .with("e_extension", false)
            .with("reset_addr", "32'h0\n`define VIGNA_CORE_E_EXTENSION");
        let report = Validator::new(builtin()).validate(&config);

        assert_eq!(
            report.violations(),
            &[Violation::MalformedValue {
                option: "reset_addr".to_string(),
                problem: "must be a single line",
            }]
        );
        assert_eq!(
            report.messages(),
            vec!["'reset_addr' value must be a single line"]
        );
    }

    #[test]
    fn test_carriage_return_is_malformed_in_strict_mode() {
        let config = Configuration::new()
            .with("stack_reset_enable", true)
            .with("stack_reset_value", "32'h0000_2000\r");
        let report = Validator::new(builtin())
            .with_mode(ValidationMode::Strict)
            .validate(&config);

        assert_eq!(
            report.messages(),
            vec!["'stack_reset_value' value must be a single line"]
        );
    }

    #[test]
    fn test_padded_literal_is_malformed() {
        let config = Configuration::new().with("reset_addr", " 32'h0000_0100 ");
        let report = Validator::new(builtin()).validate(&config);

        assert_eq!(
            report.messages(),
            vec!["'reset_addr' value must not have leading or trailing whitespace"]
        );
    }

    #[test]
    fn test_malformed_literal_on_flag_option() {
        // lenient mode renders the text after the directive
        let config = Configuration::new().with("alignment", "yes\tno\n");
        let report = Validator::new(builtin()).validate(&config);
        assert_eq!(report.messages(), vec!["'alignment' value must be a single line"]);
    }

    #[test]
    fn test_blank_and_inner_whitespace_literals_are_accepted() {
        let config = Configuration::new()
            .with("reset_addr", "32'h0000 0100")
            .with("stack_reset_value", " \n ");
        assert!(Validator::new(builtin()).validate(&config).is_ok());
    }

    #[test]
    fn test_strict_accepts_disabled_value_option() {
        let config = Configuration::new().with("reset_addr", false);
        let report = Validator::new(builtin())
            .with_mode(ValidationMode::Strict)
            .validate(&config);
        assert!(report.is_ok());
    }
}

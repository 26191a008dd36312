//! Options command implementation.
//!
//! Lists every configuration option of the schema together with the
//! command-line flags that control it.

use crate::error::CliError;
use crate::output::{Listing, OutputFormat};
use crate::utils::GlobalOptions;
use clap::Args;
use serde::Serialize;
use vigna_config::{OptionKind, OptionSchema};

/// Column headers for table and CSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "name",
    "directive",
    "kind",
    "default",
    "category",
    "requires",
    "flags",
];

/// List configuration options.
#[derive(Args)]
pub struct OptionsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,

    /// Only list options of this category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// One option as printed by the listing.
#[derive(Serialize)]
struct OptionRow {
    name: &'static str,
    directive: &'static str,
    description: &'static str,
    kind: &'static str,
    default: String,
    category: &'static str,
    requires: Option<&'static str>,
    conflicts_with: &'static [&'static str],
    flags: Vec<String>,
}

impl OptionsCommand {
    /// Execute the options command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let schema = OptionSchema::builtin()?;
        let table = schema.flag_table();

        if let Some(ref category) = self.category {
            if !schema.categories().iter().any(|c| c.name == category.as_str()) {
                return Err(CliError::InvalidArguments(format!(
                    "unknown category '{category}'"
                )));
            }
        }

        let options: Vec<OptionRow> = schema
            .iter_grouped()
            .filter(|spec| {
                self.category
                    .as_deref()
                    .map_or(true, |category| spec.category == category)
            })
            .map(|spec| {
                let (kind, default) = match spec.kind {
                    OptionKind::Flag { default } => ("flag", default.to_string()),
                    OptionKind::Value { default } => ("value", default.to_string()),
                };
                let flags = table
                    .for_option(spec.name)
                    .map(|names| {
                        names
                            .identifiers()
                            .into_iter()
                            .map(|id| format!("--{id}"))
                            .collect()
                    })
                    .unwrap_or_default();

                OptionRow {
                    name: spec.name,
                    directive: spec.directive,
                    description: spec.description,
                    kind,
                    default,
                    category: spec.category,
                    requires: spec.depends_on,
                    conflicts_with: spec.conflicts_with,
                    flags,
                }
            })
            .collect();

        let rows = options
            .iter()
            .map(|o| {
                vec![
                    o.name.to_string(),
                    o.directive.to_string(),
                    o.kind.to_string(),
                    o.default.clone(),
                    o.category.to_string(),
                    o.requires.unwrap_or("").to_string(),
                    o.flags.join(" "),
                ]
            })
            .collect();

        Listing {
            headers: &COLUMN_HEADERS,
            rows,
            data: &options,
        }
        .print(self.format)
    }
}

//! Header generation.
//!
//! [`render`] turns a configuration into the text of `vigna_conf.vh`. The
//! layout is fixed and is what [`HeaderParser`](crate::HeaderParser) and
//! hand-written headers rely on:
//!
//! ```text
//! `ifndef VIGNA_CONF_VH
//! `define VIGNA_CONF_VH
//!
//! /* <title> */
//!
//! /* <category> */
//! /* --------------------------------------------------------------------- */
//!
//! /* <description> */
//! /* NOTE: Requires <option> to be enabled */
//! `define <DIRECTIVE> [<value>]
//! //`define <DIRECTIVE>
//!
//! `endif
//! ```

use std::fs;
use std::path::Path;

use crate::configuration::{Configuration, OptionValue};
use crate::error::Result;
use crate::schema::{OptionSchema, OptionSpec};

/// Include-guard token of the header.
pub const GUARD: &str = "VIGNA_CONF_VH";

/// Title used when the caller has no better name.
pub const DEFAULT_TITLE: &str = "Custom Configuration";

/// Marker opening an active directive.
pub const ACTIVE_MARKER: &str = "`define";

/// Marker opening an inactive directive.
pub const INACTIVE_MARKER: &str = "//`define";

const SEPARATOR_WIDTH: usize = 73;

/// Renders the header text for `config`.
///
/// Entries not described by `schema` are not rendered. Literals are written
/// as given. Rendering never fails; validate the configuration first if its
/// consistency matters, since only a valid configuration reads back
/// unchanged.
///
/// # Examples
///
/// ```
/// use vigna_config::{render, Configuration, OptionSchema};
///
/// let schema = OptionSchema::builtin().unwrap();
/// let header = render(schema, &Configuration::new().with("c_extension", true), "Demo");
///
/// assert!(header.starts_with("`ifndef VIGNA_CONF_VH\n`define VIGNA_CONF_VH\n\n/* Demo */\n"));
/// assert!(header.contains("\n`define VIGNA_CORE_C_EXTENSION\n"));
/// assert!(header.contains("\n//`define VIGNA_CORE_M_EXTENSION\n"));
/// assert!(header.ends_with("`endif\n"));
/// ```
#[must_use]
pub fn render(schema: &OptionSchema, config: &Configuration, title: &str) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    let mut lines = vec![
        format!("`ifndef {GUARD}"),
        format!("{ACTIVE_MARKER} {GUARD}"),
        String::new(),
        format!("/* {title} */"),
        String::new(),
    ];

    for category in schema.categories() {
        lines.push(format!("/* {} */", category.name));
        lines.push(format!("/* {separator} */"));
        lines.push(String::new());

        for spec in category.options {
            render_option(&mut lines, spec, config);
        }

        lines.push(String::new());
    }

    lines.push("`endif".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_option(lines: &mut Vec<String>, spec: &OptionSpec, config: &Configuration) {
    lines.push(format!("/* {} */", spec.description));

    if let Some(requires) = spec.depends_on {
        if !config.is_enabled(requires) {
            lines.push(format!("/* NOTE: Requires {requires} to be enabled */"));
        }
    }

    let directive = match config.get(spec.name) {
        Some(OptionValue::Flag(true)) => format!("{ACTIVE_MARKER} {}", spec.directive),
        Some(value) if value.is_enabled() => {
            format!("{ACTIVE_MARKER} {} {value}", spec.directive)
        }
        _ => format!("{INACTIVE_MARKER} {}", spec.directive),
    };
    lines.push(directive);
    lines.push(String::new());
}

/// Renders `config` and writes it to `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_header(
    path: &Path,
    schema: &OptionSchema,
    config: &Configuration,
    title: &str,
) -> Result<()> {
    let text = render(schema, config, title);
    fs::write(path, text)?;
    log::debug!("wrote configuration header to {}", path.display());
    Ok(())
}

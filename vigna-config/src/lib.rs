#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vigna-config
//!
//! A library for generating, validating and parsing the configuration
//! header (`vigna_conf.vh`) of the VIGNA RISC-V core.
//!
//! The header is a Verilog include file made of `` `define`` directives.
//! This crate models the set of available options, checks a chosen set of
//! options against their dependency and conflict rules, renders the header
//! deterministically and reads an existing header back.
//!
//! ## Core Types
//!
//! - [`OptionSchema`] and [`OptionSpec`]: the catalog of configuration options
//! - [`Configuration`] and [`OptionValue`]: a chosen set of option values
//! - [`Validator`] and [`ValidationReport`]: dependency and conflict checking
//! - [`render`] and [`HeaderParser`]: header generation and parsing
//! - [`PresetCatalog`]: named, predefined configurations
//! - [`Settings`] and [`SettingsBuilder`]: tool defaults from YAML and environment
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use vigna_config::{render, HeaderParser, OptionSchema, PresetCatalog, Validator};
//!
//! let schema = OptionSchema::builtin().unwrap();
//! let config = PresetCatalog::get("rv32imc").unwrap();
//!
//! let report = Validator::new(schema).validate(&config);
//! assert!(report.is_ok());
//!
//! let header = render(schema, &config, "RV32IMC");
//! assert!(header.contains("`define VIGNA_CORE_M_EXTENSION\n"));
//!
//! let parsed = HeaderParser::new(schema).unwrap().parse(&header);
//! assert_eq!(parsed.get("m_extension"), config.get("m_extension"));
//! ```

pub mod configuration;
pub mod error;
pub mod logging;
pub mod parse;
pub mod preset;
pub mod render;
pub mod schema;
pub mod settings;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use configuration::{Configuration, OptionValue};
pub use error::{Error, Result, SchemaError};
pub use logging::{init_logger, LogLevel, Logger};
pub use parse::HeaderParser;
pub use preset::{Preset, PresetCatalog, PresetSummary};
pub use render::{render, write_header, DEFAULT_TITLE, GUARD};
pub use schema::{Category, FlagNames, FlagTable, OptionKind, OptionSchema, OptionSpec};
pub use settings::{Settings, SettingsBuilder, DEFAULT_OUTPUT};
pub use validator::{ValidationMode, ValidationReport, Validator, Violation};

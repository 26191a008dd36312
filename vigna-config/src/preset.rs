//! Predefined configurations.
//!
//! Presets are read-only named configurations for the usual RV32 variants.
//! They are not validated implicitly; the test suite checks that every
//! preset passes [`Validator`](crate::Validator).

use serde::Serialize;

use crate::configuration::{Configuration, OptionValue};
use crate::error::{Error, Result};

const RESET_ADDR: (&str, &str) = ("reset_addr", "32'h0000_0000");

/// A named, predefined configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Identifier used on the command line, e.g. `rv32imc`.
    pub name: &'static str,
    /// Display name, used as the default header title.
    pub display_name: &'static str,
    /// One-line description.
    pub description: &'static str,
    enabled: &'static [&'static str],
    values: &'static [(&'static str, &'static str)],
}

impl Preset {
    /// The configuration this preset stands for.
    ///
    /// Only the options the preset names are specified.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        let flags = self
            .enabled
            .iter()
            .map(|&name| (name, OptionValue::Flag(true)));
        let values = self
            .values
            .iter()
            .map(|&(name, literal)| (name, OptionValue::from(literal)));
        flags.chain(values).collect()
    }

    /// Summary used for listings.
    #[must_use]
    pub fn summary(&self) -> PresetSummary {
        PresetSummary {
            name: self.name,
            display_name: self.display_name,
            description: self.description,
        }
    }
}

/// Listing entry of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    /// Preset identifier.
    pub name: &'static str,
    /// Display name.
    pub display_name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

static PRESETS: &[Preset] = &[
    Preset {
        name: "rv32i",
        display_name: "RV32I Base",
        description: "Minimal RISC-V base configuration",
        enabled: &["bus_binding", "two_stage_shift", "preload_negative", "alignment"],
        values: &[RESET_ADDR],
    },
    Preset {
        name: "rv32e",
        display_name: "RV32E Embedded",
        description: "Embedded configuration with 16 registers",
        enabled: &[
            "e_extension",
            "bus_binding",
            "two_stage_shift",
            "preload_negative",
            "alignment",
        ],
        values: &[RESET_ADDR],
    },
    Preset {
        name: "rv32im",
        display_name: "RV32IM",
        description: "Base + Multiply/Divide extension",
        enabled: &[
            "bus_binding",
            "two_stage_shift",
            "preload_negative",
            "alignment",
            "m_extension",
        ],
        values: &[RESET_ADDR],
    },
    Preset {
        name: "rv32ic",
        display_name: "RV32IC",
        description: "Base + Compressed instruction extension",
        enabled: &[
            "bus_binding",
            "two_stage_shift",
            "preload_negative",
            "alignment",
            "c_extension",
        ],
        values: &[RESET_ADDR],
    },
    Preset {
        name: "rv32imc",
        display_name: "RV32IMC",
        description: "Base + Multiply/Divide + Compressed instructions",
        enabled: &[
            "bus_binding",
            "two_stage_shift",
            "preload_negative",
            "alignment",
            "m_extension",
            "c_extension",
        ],
        values: &[RESET_ADDR],
    },
    Preset {
        name: "rv32im_zicsr",
        display_name: "RV32IM_Zicsr",
        description: "Base + Multiply/Divide + CSR extension",
        enabled: &[
            "bus_binding",
            "two_stage_shift",
            "preload_negative",
            "alignment",
            "m_extension",
            "interrupt",
            "zicsr_extension",
        ],
        values: &[RESET_ADDR],
    },
    Preset {
        name: "rv32imc_zicsr",
        display_name: "RV32IMC_Zicsr",
        description: "Full featured configuration",
        enabled: &[
            "bus_binding",
            "two_stage_shift",
            "preload_negative",
            "alignment",
            "m_extension",
            "c_extension",
            "interrupt",
            "zicsr_extension",
        ],
        values: &[RESET_ADDR],
    },
];

/// Access to the built-in presets.
///
/// # Examples
///
/// ```
/// use vigna_config::PresetCatalog;
///
/// let config = PresetCatalog::get("rv32im").unwrap();
/// assert!(config.is_enabled("m_extension"));
/// assert!(!config.is_enabled("c_extension"));
///
/// assert!(PresetCatalog::get("rv64gc").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetCatalog;

impl PresetCatalog {
    /// The configuration of a preset, if it exists.
    #[must_use]
    pub fn get(name: &str) -> Option<Configuration> {
        Self::find(name).map(Preset::configuration)
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|preset| preset.name == name)
    }

    /// Looks up a preset, failing for unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] if no preset has this name.
    pub fn resolve(name: &str) -> Result<&'static Preset> {
        Self::find(name).ok_or_else(|| Error::UnknownPreset {
            name: name.to_string(),
        })
    }

    /// Summaries of all presets, in declaration order.
    #[must_use]
    pub fn list() -> Vec<PresetSummary> {
        PRESETS.iter().map(Preset::summary).collect()
    }

    /// Iterates all presets in declaration order.
    pub fn iter() -> std::slice::Iter<'static, Preset> {
        PRESETS.iter()
    }

    /// Names of all presets, in declaration order.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        PRESETS.iter().map(|preset| preset.name).collect()
    }
}

//! Built-in option table of the VIGNA core.

use super::OptionSpec;

const CORE_ARCHITECTURE: &str = "Core Architecture";
const BUS_ARCHITECTURE: &str = "Bus Architecture";
const MEMORY: &str = "Memory Configuration";
const PERFORMANCE: &str = "Performance";
const EXTENSIONS: &str = "RISC-V Extensions";
const BUS_INTERFACE: &str = "Bus Interface";

/// Every option understood by `vigna_conf.vh`, in header order.
pub static BUILTIN_OPTIONS: &[OptionSpec] = &[
    OptionSpec::flag(
        "e_extension",
        "VIGNA_CORE_E_EXTENSION",
        "Enable E extension (16 registers instead of 32)",
        CORE_ARCHITECTURE,
        false,
    ),
    OptionSpec::flag(
        "bus_binding",
        "VIGNA_TOP_BUS_BINDING",
        "Enable unified bus (vs separate instruction/data buses)",
        BUS_ARCHITECTURE,
        true,
    ),
    OptionSpec::value(
        "reset_addr",
        "VIGNA_CORE_RESET_ADDR",
        "Core reset address",
        MEMORY,
        "32'h0000_0000",
    ),
    OptionSpec::flag(
        "stack_reset_enable",
        "VIGNA_CORE_STACK_ADDR_RESET_ENABLE",
        "Enable stack pointer reset (WARNING: doubles area)",
        MEMORY,
        false,
    ),
    OptionSpec::value(
        "stack_reset_value",
        "VIGNA_CORE_STACK_ADDR_RESET_VALUE",
        "Stack pointer reset value",
        MEMORY,
        "32'h0000_1000",
    )
    .requires("stack_reset_enable"),
    OptionSpec::flag(
        "two_stage_shift",
        "VIGNA_CORE_TWO_STAGE_SHIFT",
        "Two-stage shift (better timing, larger area)",
        PERFORMANCE,
        true,
    ),
    OptionSpec::flag(
        "preload_negative",
        "VIGNA_CORE_PRELOAD_NEGATIVE",
        "Preload negative numbers (better timing, more resources)",
        PERFORMANCE,
        true,
    ),
    OptionSpec::flag(
        "alignment",
        "VIGNA_CORE_ALIGNMENT",
        "Enable alignment checks",
        PERFORMANCE,
        true,
    ),
    OptionSpec::flag(
        "m_extension",
        "VIGNA_CORE_M_EXTENSION",
        "Enable M extension (multiply/divide)",
        EXTENSIONS,
        false,
    ),
    OptionSpec::flag(
        "m_fpga_fast",
        "VIGNA_CORE_M_FPGA_FAST",
        "FPGA-optimized multiply/divide (TODO)",
        EXTENSIONS,
        false,
    )
    .requires("m_extension"),
    OptionSpec::flag(
        "c_extension",
        "VIGNA_CORE_C_EXTENSION",
        "Enable C extension (compressed instructions)",
        EXTENSIONS,
        false,
    ),
    OptionSpec::flag(
        "zicsr_extension",
        "VIGNA_CORE_ZICSR_EXTENSION",
        "Enable Zicsr extension (control/status registers)",
        EXTENSIONS,
        false,
    ),
    OptionSpec::flag(
        "interrupt",
        "VIGNA_CORE_INTERRUPT",
        "Enable interrupt support",
        EXTENSIONS,
        false,
    ),
    OptionSpec::flag(
        "axi_lite",
        "VIGNA_AXI_LITE_INTERFACE",
        "Enable AXI4-Lite interface (vs simple interface)",
        BUS_INTERFACE,
        false,
    ),
];

//! Build script for vigna-config-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here in a reduced form. Per-option flags are
//! derived from the option schema at run time and are not listed.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("vigna-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate and validate VIGNA core configuration headers")
        .long_about(
            "Command-line tool for generating, validating and inspecting the \
             vigna_conf.vh configuration header of the VIGNA RISC-V core",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user settings directory")
                .value_name("PATH")
                .global(true)
                .env("VIGNA_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("presets")
                .about("List predefined configurations")
                .long_about("Display the predefined RV32 configurations in various formats"),
            Command::new("options")
                .about("List configuration options")
                .long_about(
                    "Display every configuration option with its kind, default, \
                     dependency and command-line flags",
                ),
            Command::new("generate")
                .about("Generate a configuration header")
                .long_about(
                    "Build a configuration from a preset, an existing header, settings \
                     and option flags, validate it and write the header",
                ),
            Command::new("validate")
                .about("Validate a configuration without writing it")
                .long_about("Build a configuration like generate does and only validate it"),
            Command::new("show")
                .about("Show the configuration held by a header")
                .long_about("Parse an existing header and display the options it sets"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("vigna-config.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ecs-image",
    bin_name = "ecs-image",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate ECS image build configuration",
    long_about = "ecs-image checks an image build configuration (names, snapshot \
                  names, copy regions) and reports every problem in one pass, \
                  before anything is built.",
    after_help = "EXAMPLES:\n\
        \x20 ecs-image validate image.toml\n\
        \x20 ecs-image validate image.json --skip-region-validation\n\
        \x20 ecs-image regions --format list\n\
        \x20 ecs-image completions bash > /usr/share/bash-completion/completions/ecs-image",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate an image configuration file.
    #[command(
        visible_alias = "check",
        about = "Validate an image configuration",
        after_help = "EXAMPLES:\n\
            \x20 ecs-image validate image.toml\n\
            \x20 ecs-image validate image.toml --print-normalized\n\
            \x20 ecs-image --output-format json validate image.json"
    )]
    Validate(ValidateArgs),

    /// List known regions.
    #[command(
        visible_alias = "ls",
        about = "List known regions",
        after_help = "EXAMPLES:\n\
            \x20 ecs-image regions\n\
            \x20 ecs-image regions --format json"
    )]
    Regions(RegionsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ecs-image completions bash > ~/.local/share/bash-completion/completions/ecs-image\n\
            \x20 ecs-image completions zsh  > ~/.zfunc/_ecs-image\n\
            \x20 ecs-image completions fish > ~/.config/fish/completions/ecs-image.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the application settings.
    #[command(
        about = "Settings inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ecs-image config get validation.skip_region_validation\n\
            \x20 ecs-image config list\n\
            \x20 ecs-image config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `ecs-image validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Image configuration file (`.toml` or `.json`).
    #[arg(value_name = "FILE", help = "Image configuration file")]
    pub file: PathBuf,

    /// Accept any region id, overriding the file's own setting.
    #[arg(
        long = "skip-region-validation",
        help = "Do not check regions against the known-region catalog"
    )]
    pub skip_region_validation: bool,

    /// Print the configuration after normalization when it is valid.
    #[arg(
        long = "print-normalized",
        help = "Print the normalized configuration on success"
    )]
    pub print_normalized: bool,
}

// ── regions ───────────────────────────────────────────────────────────────────

/// Arguments for `ecs-image regions`.
#[derive(Debug, Args)]
pub struct RegionsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: RegionsFormat,
}

/// Output format for the `regions` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionsFormat {
    /// Region id with location.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ecs-image completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ecs-image config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all settings.
    List,
    /// Print the path to the default settings file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

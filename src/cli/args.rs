//! CLI argument definitions.
//!
//! All Clap derive structs for `draftwizard` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;
use crate::wizard::Page;

// ============================================================================
// Root CLI
// ============================================================================

/// Build an xml2rfc Internet-Draft skeleton from a filled-in wizard form.
#[derive(Parser, Debug)]
#[command(name = "draftwizard", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a YAML configuration file.
    #[arg(long, global = true, env = "DRAFTWIZARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DRAFTWIZARD_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the document for a form as seen from a wizard page.
    Generate(GenerateArgs),

    /// Check the required fields for leaving a page.
    Check(CheckArgs),

    /// Replay a scripted wizard session and print the result.
    Replay(ReplayArgs),

    /// Submit the generated document to the processing endpoint.
    Submit(SubmitArgs),

    /// Print an example form.
    Sample(SampleArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Form file (YAML, or JSON with a `.json` extension).
    #[arg(short, long)]
    pub form: PathBuf,

    /// Highest wizard page reached (name or number 1-7).
    #[arg(short, long, default_value = "final")]
    pub reached: Page,

    /// Year for the `<date>` element (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Print the HTML-escaped preview instead of raw XML.
    #[arg(long)]
    pub preview: bool,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Form file.
    #[arg(short, long)]
    pub form: PathBuf,

    /// Page being left (name or number 1-7).
    #[arg(short, long)]
    pub page: Page,
}

/// Arguments for `replay`.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Session script (YAML).
    #[arg(short, long)]
    pub script: PathBuf,

    /// Initial form contents.
    #[arg(short, long)]
    pub form: Option<PathBuf>,

    /// Year for the `<date>` element (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Output format.
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `submit`.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Form file.
    #[arg(short, long)]
    pub form: PathBuf,

    /// Highest wizard page reached (name or number 1-7).
    #[arg(short, long, default_value = "final")]
    pub reached: Page,

    /// Year for the `<date>` element (defaults to the current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Processing endpoint (overrides the configuration file).
    #[arg(long, env = "DRAFTWIZARD_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Print the request instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `sample`.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Output format.
    #[arg(long, default_value = "yaml")]
    pub format: DataFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Serialization format for form data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DataFormat {
    #[default]
    Yaml,
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

//! Clap derive structures for the `swctl` CLI.
//!
//! Defines the command tree, global flags, and shared types. Also compiled
//! by `build.rs` for man page generation, so it may only depend on clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// swctl -- declarative VLAN management for XikeStor SKS3200 switches
#[derive(Debug, Parser)]
#[command(
    name = "swctl",
    version,
    about = "Manage VLANs on XikeStor SKS3200 switches",
    long_about = "Compile a per-port VLAN file into the switch's bridge groups and\n\
        tagged cross-connects, then push both tables over the web UI API.\n\n\
        Run `swctl plan` to inspect the compiled tables without touching the switch.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Switch profile to use
    #[arg(long, short = 'p', env = "SWCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Switch hostname or URL (overrides profile)
    #[arg(long, short = 'H', env = "SWCTL_HOST", global = true)]
    pub host: Option<String>,

    /// Web UI user (overrides profile)
    #[arg(long, short = 'u', env = "SWCTL_USER", global = true)]
    pub user: Option<String>,

    /// Web UI password
    #[arg(long, env = "SWCTL_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SWCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "SWCTL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SWCTL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one record per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show switch status
    Status,

    /// Compile the VLAN file and push it to the switch
    Apply(ApplyArgs),

    /// Persist the running VLAN configuration to flash
    Save,

    /// Compile the VLAN file and print the result without connecting
    Plan(PlanArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Apply / Plan ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// VLAN file (defaults to the profile's vlan_file, then ./vlan.yml)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub conf: Option<PathBuf>,

    /// Save to flash after a successful apply
    #[arg(long, short = 's')]
    pub save: bool,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// VLAN file (defaults to the profile's vlan_file, then ./vlan.yml)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub conf: Option<PathBuf>,

    /// Print the exact form bodies that `apply` would POST
    #[arg(long)]
    pub wire: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file location
    Path,

    /// Store the active profile's password in the system keyring
    SetPassword,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

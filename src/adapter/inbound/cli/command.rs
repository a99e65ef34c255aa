//! Command-line interface definitions.
//!
//! Defines the CLI structure for the dealfeed application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Viewer for discounted collectible card deals
#[derive(Parser, Debug)]
#[command(name = "dealfeed")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the dealfeed CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the deal feed page over HTTP
    Serve(ServeArgs),

    /// Load the feed once and write the HTML page
    Render(RenderArgs),

    /// Load the feed once and print it as a table
    List(ListArgs),

    /// Load the feed once and report records that break the deal convention
    Audit(FeedArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `dealfeed check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Probe the deals API health endpoint.
    Api(FeedArgs),
}

/// Subcommands for `dealfeed config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments shared by every command that reads the feed.
#[derive(Parser, Debug)]
pub struct FeedArgs {
    /// Path to the configuration file (defaults apply when it does not exist).
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Deals API base URL (overrides config and DEALFEED_API_URL).
    #[arg(long)]
    pub api_url: Option<String>,

    /// Page size requested from the deals API.
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Socket address to bind (overrides `[server].bind`).
    #[arg(long)]
    pub bind: Option<String>,
}

/// Arguments for the `render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub feed: FeedArgs,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

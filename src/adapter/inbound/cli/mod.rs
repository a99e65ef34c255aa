//! CLI module graph and command dispatch.

pub mod audit;
pub mod check;
pub mod command;
pub mod config;
pub mod feed;
pub mod list;
pub mod output;
pub mod paths;
pub mod render;
pub mod serve;

use std::path::Path;

use command::{CheckCommand, Cli, ColorChoice, Commands, ConfigCommand};

use crate::error::Result;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;

impl Commands {
    /// Configuration file the command reads, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Serve(args) => Some(&args.feed.config),
            Self::Render(args) => Some(&args.feed.config),
            Self::List(args) => Some(&args.feed.config),
            Self::Audit(args) | Self::Check(CheckCommand::Api(args)) => Some(&args.config),
            Self::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => {
                Some(&arg.config)
            }
            Self::Config(ConfigCommand::Init(_)) => None,
        }
    }
}

/// Apply the global output flags.
pub fn configure_output(cli: &Cli) {
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => output::detect_color(),
    };
    output::configure(output::OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        color && !cli.json,
    ));
}

/// Initialize tracing from the `[logging]` section of the command's config.
///
/// A config file that fails to load falls back to default logging; the
/// command itself reports the error.
pub fn init_logging(cli: &Cli) {
    let logging = cli
        .command
        .config_path()
        .and_then(|path| Config::load_or_default(path).ok())
        .map(|config| config.logging)
        .unwrap_or_else(LoggingConfig::default);
    logging.with_verbosity(cli.verbose, cli.quiet).init();
}

/// Run the parsed command.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Render(args) => render::execute(&args).await,
        Commands::List(args) => list::execute(&args).await,
        Commands::Audit(args) => audit::execute(&args).await,
        Commands::Check(CheckCommand::Api(args)) => check::execute_api(&args).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}

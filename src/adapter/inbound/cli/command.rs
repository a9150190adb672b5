//! Command-line interface definitions.
//!
//! Defines the CLI structure for sarwatch using `clap`: the retrieval
//! pipeline, product downloads, configuration management and diagnostics.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;

/// Sentinel-1 SAR scene retrieval for topographic change detection
#[derive(Parser, Debug)]
#[command(name = "sarwatch")]
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

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for new scenes and prepare processing requests
    Run(RunArgs),

    /// Download, extract and verify products for stored scenes
    Download(DownloadArgs),

    /// List stored scene metadata
    Scenes(ScenesArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Initialize configuration interactively
    Init(InitArgs),
}

/// Subcommands for `sarwatch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a configuration file, data directories and a `.env` template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file and report warnings.
    Validate(ConfigPathArg),
}

/// Subcommands for `sarwatch check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and report credential presence.
    Config(ConfigPathArg),
    /// Search ASF over the last week and request a Sentinel Hub token.
    Connection(ConfigPathArg),
    /// Verify Earthdata credentials and look up a known granule.
    Auth(ConfigPathArg),
    /// Inspect credential environment variables.
    Env,
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Reach this many days back for the comparison scene.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days_back: Option<u32>,

    /// Keep running on an interval.
    #[arg(long)]
    pub schedule: bool,

    /// Hours between scheduled runs.
    #[arg(long, requires = "schedule", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `download` subcommand.
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Directory holding scene metadata records (default: `<data_directory>/asf`).
    #[arg(long)]
    pub metadata_dir: Option<PathBuf>,

    /// Root for `raw_zip/` and `safe_extracted/` (default: `asf.download_directory`).
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Maximum number of scenes to acquire.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_scenes: u64,
}

/// Arguments for the `scenes` subcommand.
#[derive(Parser, Debug)]
pub struct ScenesArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Directory holding scene metadata records (default: `<data_directory>/asf`).
    #[arg(long)]
    pub metadata_dir: Option<PathBuf>,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `init`.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn download_defaults_to_one_scene() {
        let cli = Cli::try_parse_from(["sarwatch", "download"]).unwrap();
        match cli.command {
            Commands::Download(args) => {
                assert_eq!(args.max_scenes, 1);
                assert!(args.metadata_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn interval_requires_schedule() {
        assert!(Cli::try_parse_from(["sarwatch", "run", "--interval", "6"]).is_err());
        assert!(Cli::try_parse_from(["sarwatch", "run", "--schedule", "--interval", "6"]).is_ok());
    }

    #[test]
    fn zero_days_back_is_rejected() {
        assert!(Cli::try_parse_from(["sarwatch", "run", "--days-back", "0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sarwatch", "check", "env", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Env)));
    }
}

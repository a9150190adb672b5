//! Command routing.

use super::command::{CheckCommand, Commands, ConfigCommand};
use super::{check, config, download, init, paths, run, scenes};

use crate::error::Result;

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Download(args) => download::execute(&args).await,
        Commands::Scenes(args) => scenes::execute(&args),
        Commands::Config(ConfigCommand::Init(args)) => {
            if args.path == paths::default_config() {
                paths::ensure_home_dir()?;
            }
            config::execute_init(&args.path, args.force)
        }
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
        Commands::Check(CheckCommand::Config(args)) => check::config::execute_config(&args.config),
        Commands::Check(CheckCommand::Connection(args)) => {
            check::connection::execute_connection(&args.config).await
        }
        Commands::Check(CheckCommand::Auth(args)) => check::auth::execute_auth(&args.config).await,
        Commands::Check(CheckCommand::Env) => check::env::execute_env(),
        Commands::Init(args) => init::execute(args.path, args.force),
    }
}

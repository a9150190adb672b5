use clap::Parser;

use sarwatch::adapter::inbound::cli::command::{Cli, ColorChoice};
use sarwatch::adapter::inbound::cli::output::{self, OutputConfig};
use sarwatch::adapter::inbound::cli::dispatch::dispatch;
use sarwatch::adapter::inbound::cli::operator;
use sarwatch::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("CLI operator already installed");
        std::process::exit(1);
    }

    if let Err(e) = dispatch(cli.command).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

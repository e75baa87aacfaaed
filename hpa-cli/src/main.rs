//! HPA CLI - Synthetic hydropower data, regression and forecast toolkit.

use clap::Parser;
use env_logger::Env;

#[derive(Parser)]
#[command(
    name = "hpa-cli",
    version,
    about = "Hydropower plant analytics on a synthetic year of data"
)]
struct Cli {
    /// Defaults to `run` in the current directory
    #[command(subcommand)]
    command: Option<hpa_cmd::Command>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    hpa_cmd::run(cli.command.unwrap_or_default())
}

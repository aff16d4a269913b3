//! RSV CLI - Command line tool for exploring weekly RSV vaccination coverage data.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rsv-cli",
    version,
    about = "RSV vaccination coverage toolkit"
)]
struct Cli {
    /// Source CSV of weekly coverage differences (`.csv` or `.csv.gz`)
    #[arg(
        long,
        global = true,
        default_value = "Weekly_Differences_in_Cumulative_RSV_Vaccination_Coverage.csv"
    )]
    csv: PathBuf,

    #[command(subcommand)]
    command: rsv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using source file {}", cli.csv.display());
    rsv_cmd::run(&cli.csv, cli.command)
}

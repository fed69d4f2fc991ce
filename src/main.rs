//! probe-sweep - run a process analysis tool across a list of PIDs
//!
//! Each run is framed with a labeled banner so an operator can match the
//! tool's console output to the process it was pointed at.

use clap::Parser;
use probe_sweep::{cli, commands::Commands, common::logging};

#[derive(Parser)]
#[command(name = "probe-sweep", about = "Run an analysis tool once per PID")]
#[command(version, long_about = None)]
struct Cli {
    /// Enable debug logging (stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

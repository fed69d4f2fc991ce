//! CLI command definitions
//!
//! Defines the clap commands for the sweep driver.

use clap::Subcommand;

use crate::common::config::{DEFAULT_LABEL, DEFAULT_TOOL};
use crate::driver::Pid;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the analysis tool once per PID, framing each run with a banner
    Run {
        /// PIDs to test, in order. Duplicates are tested again.
        /// Defaults to the captured Firefox PIDs when neither PIDs nor --discover are given.
        pids: Vec<Pid>,

        /// Analysis tool to invoke: a path, or a name looked up on PATH
        #[arg(long, default_value = DEFAULT_TOOL)]
        tool: String,

        /// Label shown in banners ("Testing <label> PID: ...")
        #[arg(long, default_value = DEFAULT_LABEL)]
        label: String,

        /// Test every running process with this executable name instead
        #[arg(long, value_name = "NAME", conflicts_with = "pids")]
        discover: Option<String>,

        /// Exit right after the completion message instead of waiting for Enter
        #[arg(long)]
        no_pause: bool,

        /// Print the planned command lines without running anything
        #[arg(long)]
        dry_run: bool,

        /// Print the dry-run plan as JSON
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// List PIDs of running processes with the given executable name
    Discover {
        /// Executable name, e.g. "firefox" or "firefox.exe"
        name: String,
    },
}

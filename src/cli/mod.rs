//! CLI command handling
//!
//! Turns parsed commands into a PID list and settings, then hands off to
//! the driver.

use colored::Colorize;
use tokio::io::BufReader;

use crate::commands::Commands;
use crate::common::config::{self, RunSettings};
use crate::common::Result;
use crate::discovery;
use crate::driver::{self, Pid, PlannedInvocation, ProcessInvoker};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            pids,
            tool,
            label,
            discover,
            no_pause,
            dry_run,
            json,
        } => {
            let settings = RunSettings::new(tool, label, !no_pause)?;
            let pids = select_pids(pids, discover.as_deref())?;
            let invoker = ProcessInvoker::for_tool(&settings.tool);

            if dry_run {
                return print_plan(&invoker, &pids, json);
            }

            let mut out = std::io::stdout();
            let ack = BufReader::new(tokio::io::stdin());
            driver::run(&pids, &settings, &invoker, &mut out, ack).await
        }

        Commands::Discover { name } => {
            let pids = discovery::discover(&name)?;
            if pids.is_empty() {
                tracing::info!("No running process named '{}'", name);
            }
            for pid in pids {
                println!("{}", pid);
            }
            Ok(())
        }
    }
}

/// Pick the PID source: explicit PIDs, then discovery, then the captured list
fn select_pids(explicit: Vec<Pid>, discover: Option<&str>) -> Result<Vec<Pid>> {
    if !explicit.is_empty() {
        return Ok(explicit);
    }

    if let Some(name) = discover {
        let found = discovery::discover(name)?;
        tracing::info!(name, count = found.len(), "discovered processes");
        return Ok(found);
    }

    tracing::debug!("no PIDs given, using the captured list");
    Ok(config::default_pids())
}

fn print_plan(invoker: &ProcessInvoker, pids: &[Pid], json: bool) -> Result<()> {
    let plan: Vec<PlannedInvocation> = pids.iter().map(|&pid| invoker.plan(pid)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} {} invocation(s) of {}",
        "Dry run:".cyan().bold(),
        plan.len(),
        invoker.program().display().to_string().white().bold()
    );
    for step in &plan {
        println!("  {} {}", step.program.dimmed(), step.args.join(" "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(raw: &[u32]) -> Vec<Pid> {
        raw.iter().map(|&p| Pid::new(p).unwrap()).collect()
    }

    #[test]
    fn test_explicit_pids_win() {
        let selected = select_pids(pids(&[5, 5, 3]), None).unwrap();
        assert_eq!(selected, pids(&[5, 5, 3]));
    }

    #[test]
    fn test_falls_back_to_captured_list() {
        let selected = select_pids(Vec::new(), None).unwrap();
        assert_eq!(selected, config::default_pids());
    }

    #[test]
    fn test_discovery_with_no_match_is_empty() {
        let selected = select_pids(Vec::new(), Some("no-such-process-name-5d1c")).unwrap();
        assert!(selected.is_empty());
    }
}

//! The sweep loop
//!
//! Strictly sequential: one banner, one blocking invocation, one trailing
//! blank line per PID, in list order. Failed invocations never skip or stop
//! later ones.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::common::config::RunSettings;
use crate::common::Result;

use super::banner::{banner, completion, ACK_PROMPT};
use super::invoker::Invoker;
use super::Pid;

/// Run the tool once per PID, then print the completion line and, if
/// `settings.pause` is set, wait for one line on `ack`.
///
/// Only console write failures and stdin read failures are returned as
/// errors. Tool outcomes are logged and dropped.
pub async fn run<I, W, R>(
    pids: &[Pid],
    settings: &RunSettings,
    invoker: &I,
    out: &mut W,
    ack: R,
) -> Result<()>
where
    I: Invoker + ?Sized,
    W: Write,
    R: AsyncBufRead + Unpin,
{
    tracing::info!(count = pids.len(), label = %settings.label, "starting sweep");

    for (index, &pid) in pids.iter().enumerate() {
        write!(out, "{}", banner(&settings.label, pid))?;
        // The child shares the console; everything written so far must be out first
        out.flush()?;

        tracing::debug!(%pid, position = index + 1, "invoking tool");
        let outcome = invoker.invoke(pid).await;
        outcome.log(pid);

        writeln!(out)?;
        out.flush()?;
    }

    writeln!(out, "{}", completion(&settings.label))?;

    if settings.pause {
        write!(out, "{ACK_PROMPT}")?;
        out.flush()?;
        wait_for_ack(ack).await?;
    } else {
        out.flush()?;
    }

    Ok(())
}

/// Block until the operator enters a line. EOF counts as acknowledgment.
async fn wait_for_ack<R: AsyncBufRead + Unpin>(mut ack: R) -> Result<()> {
    let mut line = String::new();
    ack.read_line(&mut line).await?;
    Ok(())
}

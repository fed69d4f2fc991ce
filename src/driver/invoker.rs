//! Launching the analysis tool
//!
//! The tool runs with the driver's stdin, stdout and stderr so its output
//! lands verbatim between the banners. Its exit status is reported back as
//! an [`InvocationOutcome`] and never turned into an error.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::Serialize;
use tokio::process::Command;

use crate::common::{Error, Result};

use super::Pid;

/// What happened to a single tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The tool ran to completion. `code` is `None` when killed by a signal.
    Exited { code: Option<i32>, success: bool },
    /// The tool could not be started at all
    LaunchFailed { reason: String },
}

impl InvocationOutcome {
    /// Record the outcome in the log. The sweep continues either way.
    pub fn log(&self, pid: Pid) {
        match self {
            Self::Exited { success: true, .. } => {
                tracing::debug!(%pid, "tool exited successfully");
            }
            Self::Exited { code, .. } => {
                tracing::warn!(%pid, code = ?code, "tool exited with failure status");
            }
            Self::LaunchFailed { reason } => {
                tracing::error!(%pid, %reason, "tool could not be launched");
            }
        }
    }
}

/// Runs the analysis tool for one PID
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Run the tool to completion with `pid` as its only argument
    async fn invoke(&self, pid: Pid) -> InvocationOutcome;
}

/// One planned command line, as printed by `run --dry-run`
#[derive(Debug, Clone, Serialize)]
pub struct PlannedInvocation {
    pub pid: Pid,
    pub program: String,
    pub args: Vec<String>,
}

/// Invokes a real executable as a child process
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    program: PathBuf,
}

impl ProcessInvoker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve `tool` to an executable path
    ///
    /// Anything containing a path separator is taken as-is. Bare names are
    /// looked up on PATH.
    pub fn resolve(tool: &str) -> Result<PathBuf> {
        let path = Path::new(tool);
        if path.is_absolute() || path.components().count() > 1 {
            return Ok(path.to_path_buf());
        }
        which::which(tool).map_err(|_| Error::ToolNotFound {
            name: tool.to_string(),
        })
    }

    /// Build an invoker for `tool`, keeping the raw name if PATH lookup fails
    ///
    /// An unresolved tool is not fatal: every invocation will then report
    /// a launch failure and the sweep still visits every PID.
    pub fn for_tool(tool: &str) -> Self {
        match Self::resolve(tool) {
            Ok(program) => {
                tracing::debug!(program = %program.display(), "resolved analysis tool");
                Self::new(program)
            }
            Err(e) => {
                tracing::warn!("{e}");
                Self::new(tool)
            }
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn plan(&self, pid: Pid) -> PlannedInvocation {
        PlannedInvocation {
            pid,
            program: self.program.display().to_string(),
            args: vec![pid.to_string()],
        }
    }
}

#[async_trait]
impl Invoker for ProcessInvoker {
    async fn invoke(&self, pid: Pid) -> InvocationOutcome {
        #[cfg(unix)]
        if !process_exists(pid) {
            tracing::debug!(%pid, "no such process; invoking the tool anyway");
        }

        let status = Command::new(&self.program)
            .arg(pid.to_string())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        match status {
            Ok(status) => InvocationOutcome::Exited {
                code: status.code(),
                success: status.success(),
            },
            Err(e) => InvocationOutcome::LaunchFailed {
                reason: Error::tool_launch(&self.program.display().to_string(), &e).to_string(),
            },
        }
    }
}

/// Check whether a process with this PID is currently alive
#[cfg(unix)]
pub fn process_exists(pid: Pid) -> bool {
    let Ok(raw) = libc::pid_t::try_from(pid.get()) else {
        return false;
    };
    // Signal 0 tests process existence without side effects
    let result = unsafe { libc::kill(raw, 0) };
    if result == 0 {
        return true;
    }
    // EPERM means the process exists but belongs to someone else
    std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_relative_path() {
        let path = ProcessInvoker::resolve("./target/release/sup_mtracker").unwrap();
        assert_eq!(path, PathBuf::from("./target/release/sup_mtracker"));
    }

    #[test]
    fn test_resolve_unknown_bare_name() {
        let err = ProcessInvoker::resolve("definitely-not-a-real-tool-7f3a").unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn test_plan_passes_pid_as_single_argument() {
        let invoker = ProcessInvoker::new("/opt/tools/sup_mtracker");
        let plan = invoker.plan(Pid::new(200).unwrap());
        assert_eq!(plan.program, "/opt/tools/sup_mtracker");
        assert_eq!(plan.args, vec!["200".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_program_reports_launch_failure() {
        let invoker = ProcessInvoker::new("/nonexistent/dir/sup_mtracker");
        let outcome = invoker.invoke(Pid::new(1).unwrap()).await;
        match outcome {
            InvocationOutcome::LaunchFailed { reason } => {
                assert!(reason.contains("/nonexistent/dir/sup_mtracker"));
            }
            other => panic!("Expected LaunchFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let invoker = ProcessInvoker::new("false");
        let outcome = invoker.invoke(Pid::new(1).unwrap()).await;
        assert_eq!(
            outcome,
            InvocationOutcome::Exited {
                code: Some(1),
                success: false
            }
        );
    }

    /// Log sink for checking what reaches the operator's terminal
    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stale_pid_stays_quiet_at_default_level() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let stale = Pid::new(3_999_999).unwrap();
        assert!(!process_exists(stale));

        let outcome = ProcessInvoker::new("true").invoke(stale).await;
        tracing::warn!("capture marker");

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(matches!(outcome, InvocationOutcome::Exited { success: true, .. }));
        assert!(text.contains("capture marker"));
        assert!(!text.contains("no such process"), "log: {text}");
    }

    #[cfg(unix)]
    #[test]
    fn test_own_process_exists() {
        let pid = Pid::new(std::process::id()).unwrap();
        assert!(process_exists(pid));
    }
}

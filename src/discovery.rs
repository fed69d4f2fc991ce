//! Finding PIDs by executable name at runtime
//!
//! Replaces a hand-captured PID list when the target is running now.

use std::ffi::OsStr;
use std::path::Path;

use sysinfo::{Process, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use crate::common::{Error, Result};
use crate::driver::Pid;

/// PIDs of every live process whose executable name matches `name`
///
/// Matching ignores ASCII case and an optional `.exe` suffix on either side.
/// The kernel's short process name is truncated (15 bytes on Linux), so the
/// executable path and `argv[0]` are checked as well.
/// The result is sorted ascending so repeated runs test in a stable order.
pub fn discover(name: &str) -> Result<Vec<Pid>> {
    if normalize(name).is_empty() {
        return Err(Error::Discovery("process name must not be empty".to_string()));
    }

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing()
            .with_exe(UpdateKind::OnlyIfNotSet)
            .with_cmd(UpdateKind::OnlyIfNotSet),
    );

    let mut pids: Vec<Pid> = system
        .processes()
        .iter()
        .filter(|(_, process)| {
            process_names(process).any(|candidate| matches_name(&candidate, name))
        })
        .filter_map(|(pid, _)| Pid::new(pid.as_u32()))
        .collect();
    pids.sort();

    tracing::debug!(name, found = pids.len(), "process discovery finished");
    Ok(pids)
}

/// Short name, executable file name and `argv[0]` file name, whichever are known
fn process_names(process: &Process) -> impl Iterator<Item = String> + '_ {
    let exe = process.exe().and_then(Path::file_name);
    let argv0 = process
        .cmd()
        .first()
        .and_then(|arg| Path::new(arg.as_os_str()).file_name());

    std::iter::once(process.name())
        .chain(exe)
        .chain(argv0)
        .map(|name: &OsStr| name.to_string_lossy().into_owned())
}

/// Whether `candidate` names the same executable as `name`
pub fn matches_name(candidate: &str, name: &str) -> bool {
    let wanted = normalize(name);
    !wanted.is_empty() && normalize(candidate) == wanted
}

fn normalize(name: &str) -> String {
    let lower = name.trim().to_ascii_lowercase();
    match lower.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => lower,
    }
}

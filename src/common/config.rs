//! Run settings
//!
//! There is no configuration file. Everything comes from command-line flags,
//! whose defaults live here.

use crate::driver::Pid;

use super::{Error, Result};

/// Analysis tool invoked when `--tool` is not given
pub const DEFAULT_TOOL: &str = "sup_mtracker";

/// Label printed in banners and the completion line
pub const DEFAULT_LABEL: &str = "Firefox";

/// Firefox PIDs captured during the last manual session
pub const DEFAULT_PIDS: &[u32] = &[23664, 11876, 20480, 7316, 16052, 9928];

/// Settings for one sweep
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Tool path, or a bare name looked up on PATH
    pub tool: String,
    /// Label used in "Testing <label> PID" and "All <label> processes tested!"
    pub label: String,
    /// Wait for operator acknowledgment after the last invocation
    pub pause: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            label: DEFAULT_LABEL.to_string(),
            pause: true,
        }
    }
}

impl RunSettings {
    /// Build settings from flag values, rejecting blank tool names and labels
    pub fn new(tool: String, label: String, pause: bool) -> Result<Self> {
        if tool.trim().is_empty() {
            return Err(Error::Config("--tool must not be empty".to_string()));
        }
        if label.trim().is_empty() {
            return Err(Error::Config("--label must not be empty".to_string()));
        }
        Ok(Self { tool, label, pause })
    }
}

/// The captured PID list, in capture order
pub fn default_pids() -> Vec<Pid> {
    DEFAULT_PIDS.iter().copied().filter_map(Pid::new).collect()
}

//! Error types for the sweep driver
//!
//! Only driver-level problems are errors. A tool that fails to start or
//! exits non-zero is reported as an `InvocationOutcome`, never as an `Error`.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sweep driver
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Invalid PID '{0}'. Expected a positive decimal integer")]
    InvalidPid(String),

    // === Tool Errors ===
    #[error("Analysis tool '{name}' not found on PATH. Build it first or pass --tool <path>")]
    ToolNotFound { name: String },

    #[error("Failed to launch '{program}': {reason}")]
    ToolLaunch { program: String, reason: String },

    // === Discovery Errors ===
    #[error("Process discovery failed: {0}")]
    Discovery(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a tool launch error from the spawn failure
    pub fn tool_launch(program: &str, error: &io::Error) -> Self {
        Self::ToolLaunch {
            program: program.to_string(),
            reason: error.to_string(),
        }
    }
}

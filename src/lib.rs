//! probe-sweep - batch driver for a process analysis tool
//!
//! Invokes an external tool once per process identifier, in order, and
//! frames each invocation with a banner on the shared console.

pub mod cli;
pub mod commands;
pub mod common;
pub mod discovery;
pub mod driver;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use driver::Pid;

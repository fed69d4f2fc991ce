//! Sweep driver
//!
//! Runs an external analysis tool once per process identifier and frames
//! each run with a labeled banner so the console can be read per PID.

pub mod banner;
pub mod invoker;
mod pid;
mod runner;

pub use invoker::{InvocationOutcome, Invoker, PlannedInvocation, ProcessInvoker};
pub use pid::Pid;
pub use runner::run;

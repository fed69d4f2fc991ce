//! Common utilities: errors, logging and run settings

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

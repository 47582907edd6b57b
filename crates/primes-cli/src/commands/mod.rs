//! Command implementations for Primes CLI

pub mod check;
pub mod factor;
pub mod scan;

use anyhow::Result;

/// Trait for CLI command execution
pub trait Command {
    /// Execute the command
    fn execute(&self, json_output: bool) -> Result<()>;
}

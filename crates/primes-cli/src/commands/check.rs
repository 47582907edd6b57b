//! Check command implementation
//!
//! Tests each input for primality through the shared cache, so primes
//! confirmed here speed up later commands in the same process.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde_json::json;
use tracing::debug;

use primes_core::shared_cache;

use crate::commands::Command;

#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Integers to test
    #[arg(required = true, value_name = "N", allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}

impl Command for CheckCommand {
    fn execute(&self, json_output: bool) -> Result<()> {
        debug!("Checking {} inputs", self.numbers.len());

        let cache = shared_cache();
        let mut results = Vec::with_capacity(self.numbers.len());
        for &n in &self.numbers {
            let is_p = cache
                .is_prime(n)
                .with_context(|| format!("failed to check {}", n))?;
            results.push((n, is_p));
        }

        if json_output {
            let entries: Vec<_> = results
                .iter()
                .map(|(n, is_p)| json!({ "n": n, "prime": is_p }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for (n, is_p) in &results {
                if *is_p {
                    println!("{} is {}", n, style("prime").green().bold());
                } else {
                    println!("{} is {}", n, style("not prime").yellow());
                }
            }
        }

        Ok(())
    }
}

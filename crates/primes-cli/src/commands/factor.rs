//! Factor command implementation
//!
//! Computes the prime factorization of each input against the shared cache
//! and prints `60 = 2 x 2 x 3 x 5` lines or a JSON array.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use tracing::debug;

use primes_core::prime_factors;

use crate::commands::Command;

#[derive(Args, Debug)]
pub struct FactorCommand {
    /// Integers to factor
    #[arg(required = true, value_name = "N", allow_negative_numbers = true)]
    pub numbers: Vec<i64>,
}

impl Command for FactorCommand {
    fn execute(&self, json_output: bool) -> Result<()> {
        debug!("Factoring {} inputs", self.numbers.len());

        let mut results = Vec::with_capacity(self.numbers.len());
        for &n in &self.numbers {
            let factors = prime_factors(n)
                .with_context(|| format!("failed to factor {}", n))?;
            results.push((n, factors));
        }

        if json_output {
            let entries: Vec<_> = results
                .iter()
                .map(|(n, factors)| json!({ "n": n, "factors": factors }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for (n, factors) in &results {
                println!("{} = {}", n, format_factors(factors));
            }
        }

        Ok(())
    }
}

/// Render a factor list as a product expression
fn format_factors(factors: &[i64]) -> String {
    if factors.is_empty() {
        return "1".to_string();
    }
    factors
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" x ")
}

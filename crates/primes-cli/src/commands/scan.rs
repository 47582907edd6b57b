//! Scan command implementation
//!
//! Sweeps `1..=N` through the shared cache and prints the primes it
//! accumulated, optionally with the cache traffic counters.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde_json::json;
use tracing::debug;

use primes_core::shared_cache;

use crate::commands::Command;

#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Upper bound of the sweep (inclusive)
    #[arg(short, long, value_name = "N")]
    pub up_to: i64,

    /// Show cache statistics after the sweep
    #[arg(long)]
    pub stats: bool,
}

impl Command for ScanCommand {
    fn execute(&self, json_output: bool) -> Result<()> {
        debug!("Scanning 1..={}", self.up_to);

        let cache = shared_cache();
        for n in 1..=self.up_to {
            cache
                .is_prime(n)
                .with_context(|| format!("failed to check {}", n))?;
        }

        let primes = cache.primes();
        let stats = cache.stats();

        if json_output {
            let mut output = json!({
                "up_to": self.up_to,
                "count": primes.len(),
                "primes": primes,
            });
            if self.stats {
                output["stats"] = serde_json::to_value(stats)?;
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "{} ({} primes up to {})",
                style("Accumulated primes").bold().cyan(),
                primes.len(),
                self.up_to
            );
            println!(
                "{}",
                primes
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            if self.stats {
                println!();
                println!("{}", style("Cache statistics").bold().cyan());
                println!("Hits: {}", stats.hits);
                println!("Shortcut rejections: {}", stats.shortcut_rejections);
                println!("Tested: {}", stats.tested);
                println!("Discovered: {}", stats.discovered);
            }
        }

        Ok(())
    }
}

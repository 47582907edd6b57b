//! Prime factorization over the memoizing cache
//!
//! Candidate divisors are confirmed prime through [`PrimeCache::is_prime`],
//! so every factorization both benefits from and feeds the cache.

use tracing::debug;

use crate::cache::{shared_cache, PrimeCache};
use crate::primality::integer_sqrt;
use crate::Result;

/// Compute the prime factors of `n`, ascending, with multiplicity
/// (`12 -> [2, 2, 3]`), using the given cache for primality checks.
///
/// Fails with [`crate::PrimeError::InvalidInput`] when `n <= 0`, surfaced
/// from the underlying primality checks.
///
/// The candidate limit is fixed at `floor(sqrt(n)) + 1` from the starting
/// input, and the scan re-enters the candidate range from 2 after each full
/// pass rather than resuming where it left off.
pub fn prime_factors_with(cache: &PrimeCache, n: i64) -> Result<Vec<i64>> {
    if cache.is_prime(n)? {
        return Ok(vec![n]);
    }

    let mut facts = Vec::new();
    let mut num = n;
    let limit = integer_sqrt(n) + 1;
    while num > 1 {
        for candidate in 2..limit {
            if cache.is_prime(candidate)? && num % candidate == 0 {
                facts.push(candidate);
                num /= candidate;
                if cache.is_prime(num)? {
                    facts.push(num);
                    num = 1;
                    break;
                }
            }
        }
    }

    facts.sort_unstable();
    debug!("factored {} into {:?}", n, facts);
    Ok(facts)
}

/// Compute the prime factors of `n` against the process-wide cache.
pub fn prime_factors(n: i64) -> Result<Vec<i64>> {
    prime_factors_with(&shared_cache(), n)
}

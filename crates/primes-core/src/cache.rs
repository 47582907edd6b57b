//! Process-wide cache of discovered primes
//!
//! This module provides the memoizing layer over the pure tester in
//! [`crate::primality`]. Every prime confirmed through [`PrimeCache::is_prime`]
//! is appended to a shared list and answers later queries without
//! recomputation. The list also feeds candidate divisors during
//! factorization.
//!
//! One process-wide instance is reachable through [`shared_cache`]; private
//! instances can be constructed for isolated use (tests do).

use std::sync::{Arc, OnceLock, RwLock};

use serde::Serialize;
use tracing::{debug, trace};

use crate::primality;
use crate::Result;

/// Counters describing cache traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Queries answered by cache membership
    pub hits: u64,
    /// Queries answered false by the below-maximum shortcut
    pub shortcut_rejections: u64,
    /// Queries that fell through to the trial-division tester
    pub tested: u64,
    /// Primes appended to the cache
    pub discovered: u64,
}

/// Memoizing primality checker backed by the ordered list of primes
/// discovered so far.
///
/// The list grows monotonically and never contains duplicates. Interior
/// mutability keeps the read-check-then-append sequence safe if handles are
/// ever shared across threads.
pub struct PrimeCache {
    /// Primes in discovery order
    found: RwLock<Vec<i64>>,
    stats: RwLock<CacheStats>,
}

impl PrimeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            found: RwLock::new(Vec::new()),
            stats: RwLock::new(CacheStats::default()),
        }
    }

    /// Decide whether `n` is prime, consulting and feeding the cache.
    ///
    /// Resolution order: cached member, then the below-maximum shortcut,
    /// then the trial-division tester. A confirmed prime is appended before
    /// returning.
    ///
    /// The shortcut treats any uncached value below the largest cached prime
    /// as composite. That holds only when queries arrive in ascending order
    /// covering all smaller primes; out-of-order workloads can get a false
    /// negative for a genuine prime. Callers that need exact answers for
    /// out-of-order queries should use [`crate::primality::is_prime`]
    /// directly.
    pub fn is_prime(&self, n: i64) -> Result<bool> {
        primality::ensure_positive(n)?;

        {
            let found = self.found.read().unwrap();
            if found.contains(&n) {
                self.stats.write().unwrap().hits += 1;
                trace!("cache hit for {}", n);
                return Ok(true);
            }
            if let Some(&max) = found.iter().max() {
                if n < max {
                    self.stats.write().unwrap().shortcut_rejections += 1;
                    trace!("{} rejected below cached maximum {}", n, max);
                    return Ok(false);
                }
            }
        }

        self.stats.write().unwrap().tested += 1;
        let is_p = primality::is_prime(n)?;
        if is_p {
            let mut found = self.found.write().unwrap();
            // Re-check under the write lock so concurrent confirmations
            // cannot introduce a duplicate.
            if !found.contains(&n) {
                found.push(n);
                self.stats.write().unwrap().discovered += 1;
                debug!("discovered prime {} ({} cached)", n, found.len());
            }
        }
        Ok(is_p)
    }

    /// Snapshot of the accumulated primes in discovery order.
    pub fn primes(&self) -> Vec<i64> {
        self.found.read().unwrap().clone()
    }

    /// Largest prime discovered so far, if any.
    pub fn max_prime(&self) -> Option<i64> {
        self.found.read().unwrap().iter().max().copied()
    }

    /// Number of cached primes.
    pub fn len(&self) -> usize {
        self.found.read().unwrap().len()
    }

    /// Whether no primes have been discovered yet.
    pub fn is_empty(&self) -> bool {
        self.found.read().unwrap().is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        *self.stats.read().unwrap()
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Global cache instance
static SHARED_CACHE: OnceLock<Arc<PrimeCache>> = OnceLock::new();

/// Get a handle to the process-wide prime cache, initializing it on first
/// use. Every handle observes and mutates the same state.
pub fn shared_cache() -> Arc<PrimeCache> {
    Arc::clone(SHARED_CACHE.get_or_init(|| Arc::new(PrimeCache::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_sweep_accumulates_primes_below_ten() {
        let cache = PrimeCache::new();
        for n in 1..10 {
            cache.is_prime(n).unwrap();
        }
        assert_eq!(cache.primes(), vec![2, 3, 5, 7]);
        assert_eq!(cache.max_prime(), Some(7));
    }

    #[test]
    fn repeat_query_hits_without_growing() {
        let cache = PrimeCache::new();
        assert!(cache.is_prime(11).unwrap());
        let len_after_first = cache.len();
        assert!(cache.is_prime(11).unwrap());
        assert_eq!(cache.len(), len_after_first);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.tested, 1);
        assert_eq!(stats.discovered, 1);
    }

    #[test]
    fn composites_are_not_recorded() {
        let cache = PrimeCache::new();
        assert!(!cache.is_prime(12).unwrap());
        assert!(cache.is_empty());
        assert_eq!(cache.max_prime(), None);
    }

    #[test]
    fn shortcut_rejects_unqueried_smaller_numbers() {
        // The below-maximum shortcut misclassifies primes that were never
        // queried while they were above the cached maximum.
        let cache = PrimeCache::new();
        assert!(cache.is_prime(97).unwrap());
        assert!(!cache.is_prime(89).unwrap());
        assert_eq!(cache.stats().shortcut_rejections, 1);

        // Cached members below the maximum still report prime.
        assert!(cache.is_prime(97).unwrap());
    }

    #[test]
    fn invalid_input_surfaces_without_mutation() {
        let cache = PrimeCache::new();
        assert!(cache.is_prime(0).is_err());
        assert!(cache.is_prime(-7).is_err());
        assert!(cache.is_empty());
    }
}

//! Singleton semantics of the process-wide prime cache.
//!
//! The shared cache is one instance per process, so all assertions against
//! it live in a single test function inside this dedicated test binary;
//! splitting them across parallel test threads would interleave mutations.

use std::sync::Arc;

use primes_core::{prime_factors, shared_cache};

#[test]
fn shared_cache_is_one_instance_per_process() {
    let first = shared_cache();
    let second = shared_cache();
    assert!(
        Arc::ptr_eq(&first, &second),
        "independently obtained handles must share one cache"
    );

    // An ascending sweep through one handle is visible through the other.
    for n in 1..10 {
        first.is_prime(n).unwrap();
    }
    assert_eq!(second.primes(), vec![2, 3, 5, 7]);

    // A repeat sweep changes nothing.
    let len_before = second.len();
    for n in 1..10 {
        second.is_prime(n).unwrap();
    }
    assert_eq!(first.len(), len_before);

    // The convenience factorization feeds the same instance.
    assert_eq!(prime_factors(60).unwrap(), vec![2, 2, 3, 5]);
    assert!(first.primes().contains(&5));

    // Discoveries through the convenience path are visible to late handles.
    assert_eq!(prime_factors(23).unwrap(), vec![23]);
    assert!(shared_cache().primes().contains(&23));
}

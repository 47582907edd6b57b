//! Trial-division primality testing
//!
//! This module provides the pure primality tester. It keeps no state and is
//! deterministic; the memoizing layer lives in [`crate::cache`].
//!
//! The general test walks divisors of the form 6k-1 and 6k+1 up to the floor
//! square root of the input, after cheap exclusions for small numbers, even
//! numbers, and multiples of 3.

use crate::{PrimeError, Result};

/// Reject non-positive inputs.
///
/// Integrality is carried by the `i64` parameter type, so positivity is the
/// only runtime validation.
pub(crate) fn ensure_positive(n: i64) -> Result<()> {
    if n <= 0 {
        return Err(PrimeError::invalid_input(
            format!("only positive integers can be prime, got {}", n),
            "Pass an integer greater than zero",
            n,
        ));
    }
    Ok(())
}

/// Floor square root over non-negative `i64`.
///
/// Seeds from the float square root, then corrects with checked integer
/// arithmetic so inputs near `i64::MAX` cannot overflow.
pub(crate) fn integer_sqrt(n: i64) -> i64 {
    debug_assert!(n >= 0);
    let mut root = (n as f64).sqrt() as i64;
    while root > 0 && root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// Decide whether `n` is prime by trial division with a 6k±1 wheel.
///
/// Fails with [`PrimeError::InvalidInput`] when `n <= 0`. Non-primality is a
/// valid `Ok(false)`, never an error.
pub fn is_prime(n: i64) -> Result<bool> {
    ensure_positive(n)?;
    if matches!(n, 2 | 3 | 5 | 7) {
        return Ok(true);
    }
    if n < 2 || n % 2 == 0 || n == 9 {
        return Ok(false);
    }
    if n % 3 == 0 {
        return Ok(false);
    }

    let root = integer_sqrt(n);
    let mut fact = 5;
    while fact <= root {
        if n % fact == 0 || n % (fact + 2) == 0 {
            return Ok(false);
        }
        fact += 6;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes_are_prime() {
        for n in [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31] {
            assert!(is_prime(n).unwrap(), "{} should be prime", n);
        }
    }

    #[test]
    fn small_composites_and_one_are_not_prime() {
        for n in [1, 4, 6, 8, 9, 10, 15, 21, 25, 27, 33, 49, 121] {
            assert!(!is_prime(n).unwrap(), "{} should not be prime", n);
        }
    }

    #[test]
    fn larger_values() {
        assert!(is_prime(7919).unwrap());
        assert!(is_prime(104_729).unwrap());
        assert!(!is_prime(7917).unwrap());
        assert!(!is_prime(104_730).unwrap());
        assert!(!is_prime(7919 * 7919).unwrap());
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        for n in [0, -1, -17, i64::MIN] {
            let err = is_prime(n).unwrap_err();
            assert_eq!(err.code(), "PRIME_INVALID_INPUT");
        }
    }

    #[test]
    fn integer_sqrt_floors() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(35), 5);
        assert_eq!(integer_sqrt(36), 6);
        assert_eq!(integer_sqrt(i64::MAX), 3_037_000_499);
    }
}

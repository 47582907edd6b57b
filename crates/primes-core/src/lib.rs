//! Primes Core - Primality Testing and Factorization
//!
//! This crate provides a trial-division primality tester, a process-wide
//! cache of discovered primes, and a cache-backed prime factorization
//! routine. Primes confirmed by any query are remembered and reused by
//! later queries within the same process.

// Module declarations
pub mod cache;
pub mod factorize;
pub mod primality;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    /// Input validation errors
    #[error("Invalid input [{code}]: {message}\nSuggestion: {suggestion}")]
    InvalidInput {
        code: &'static str,
        message: String,
        suggestion: String,
        value: Option<i64>,
    },
}

pub type Result<T> = std::result::Result<T, PrimeError>;

impl PrimeError {
    /// Create an invalid input error with the offending value
    pub fn invalid_input<S1, S2>(message: S1, suggestion: S2, value: i64) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidInput {
            code: "PRIME_INVALID_INPUT",
            message: message.into(),
            suggestion: suggestion.into(),
            value: Some(value),
        }
    }

    /// Get the error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput { code, .. } => code,
        }
    }
}

/// Prelude module for common imports
pub mod prelude {
    pub use crate::{
        cache::{shared_cache, CacheStats, PrimeCache},
        factorize::{prime_factors, prime_factors_with},
        primality::is_prime,
        PrimeError, Result,
    };
}

// Re-export key operations at the crate root
pub use cache::{shared_cache, CacheStats, PrimeCache};
pub use factorize::{prime_factors, prime_factors_with};
pub use primality::is_prime;

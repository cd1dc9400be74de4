//! Numeric utilities for the rotation policy

/// Primality test
pub mod primes;

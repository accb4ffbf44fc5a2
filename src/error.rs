use thiserror::Error;

/// Errors produced by the number-theory toolkit and the exchange driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sampling range `[min, max]` with `min > max` was supplied.
    #[error("invalid sampling range: min {min} exceeds max {max}")]
    InvalidRange { min: u64, max: u64 },

    /// A modulus of zero was supplied to modular arithmetic.
    #[error("invalid modulus {0}: modulus must be at least 1")]
    InvalidModulus(u64),

    /// No prime was found in `[min, max]` within the attempt cap.
    /// Either the range contains no prime or it is too sparse to hit one.
    #[error("no prime found in [{min}, {max}] after {attempts} attempts")]
    PrimeSearchExhausted { min: u64, max: u64, attempts: u32 },

    /// The candidate search `(1, p-1]` was exhausted without finding a
    /// primitive root. Cannot happen when `p` is a genuine prime, since a
    /// primitive root always exists for one.
    #[error("no primitive root found modulo {0}")]
    GeneratorNotFound(u64),
}

pub type Result<T> = std::result::Result<T, Error>;

//! DISCLAIMER: This library is a toy demonstration of the Diffie-Hellman key
//! exchange in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic or
//! security-sensitive operations. Key sizes are deliberately tiny and nothing
//! here is hardened against side channels.
//!
//! The interesting part is the small number-theory toolkit underneath:
//! trial-division primality testing, random prime generation over a range,
//! binary modular exponentiation, and primitive-root discovery via the
//! factorization of Euler's totient.

pub mod error;
pub mod exchange;
pub mod modexp;
pub mod primality;
pub mod prime_gen;
pub mod primitive_root;

pub use error::{Error, Result};
pub use exchange::{
    run_exchange, ExchangeConfig, ExchangeParams, ExchangeTranscript, KeyPair, DEFAULT_PRIME_MAX,
    DEFAULT_PRIME_MIN,
};
pub use modexp::pow_mod;
pub use primality::is_prime;
pub use prime_gen::{generate_random_prime, MAX_SAMPLE_ATTEMPTS};
pub use primitive_root::{distinct_prime_factors, find_primitive_root};

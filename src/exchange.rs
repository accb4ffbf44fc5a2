//! DISCLAIMER: This module is a toy simulation of the Diffie-Hellman key
//! exchange in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. The primes are deliberately tiny (sub-16-bit) and
//! nothing here resists timing side channels or malicious inputs.
//!
//! If you need Diffie-Hellman in production, please use a vetted,
//! well-reviewed cryptography library.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::Result;
use crate::modexp::pow_mod;
use crate::prime_gen::generate_random_prime;
use crate::primitive_root::find_primitive_root;

/// Default lower bound of the demo prime range.
pub const DEFAULT_PRIME_MIN: u64 = 5000;
/// Default upper bound of the demo prime range.
pub const DEFAULT_PRIME_MAX: u64 = 15000;

/// Configuration for one simulated exchange.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// Lower bound (inclusive) of the prime sampling range.
    pub prime_min: u64,
    /// Upper bound (inclusive) of the prime sampling range.
    pub prime_max: u64,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        ExchangeConfig {
            prime_min: DEFAULT_PRIME_MIN,
            prime_max: DEFAULT_PRIME_MAX,
            seed: None,
        }
    }
}

/// Public parameters both parties agree on: the prime modulus `p` and a
/// primitive root `g` of its multiplicative group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeParams {
    /// The prime modulus.
    pub p: u64,
    /// A generator of the multiplicative group mod `p`.
    pub g: u64,
}

/// One party's keypair:
/// - `private_key`: a random integer in `[1, p-2]`, never shared.
/// - `public_key`: `g^private_key mod p`.
#[derive(Debug, Clone, Copy)]
pub struct KeyPair {
    /// The prime modulus, same as in [`ExchangeParams`].
    pub p: u64,
    /// The generator, same as in [`ExchangeParams`].
    pub g: u64,
    /// The private exponent.
    pub private_key: u64,
    /// The corresponding public value.
    pub public_key: u64,
}

/// The full chain of values produced by one simulated exchange, for
/// reporting. Both `shared_secret` fields are always equal when the
/// arithmetic is correct; the driver asserts nothing and exposes both so a
/// consumer can verify the property itself.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeTranscript {
    pub params: ExchangeParams,
    pub private_key_a: u64,
    pub private_key_b: u64,
    pub public_key_a: u64,
    pub public_key_b: u64,
    pub shared_secret_a: u64,
    pub shared_secret_b: u64,
}

impl ExchangeParams {
    /// Generate exchange parameters: a random prime from the configured
    /// range, and its deterministically chosen primitive root.
    pub fn generate(config: &ExchangeConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::generate_with(&mut rng, config.prime_min, config.prime_max)
    }

    /// Injected-RNG form of [`ExchangeParams::generate`].
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> Result<Self> {
        let p = generate_random_prime(rng, min, max)?;
        let g = find_primitive_root(p)?;
        Ok(ExchangeParams { p, g })
    }

    /// Create a keypair for one party: private key uniform in `[1, p-2]`,
    /// public key `g^private mod p`.
    pub fn generate_keypair<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<KeyPair> {
        let private_key = rng.gen_range(1..=self.p - 2);
        let public_key = pow_mod(self.g, private_key, self.p)?;
        Ok(KeyPair {
            p: self.p,
            g: self.g,
            private_key,
            public_key,
        })
    }
}

impl KeyPair {
    /// Given the peer's public key, compute the shared secret
    /// `peer_public^private mod p`.
    pub fn shared_secret(&self, peer_public: u64) -> Result<u64> {
        pow_mod(peer_public, self.private_key, self.p)
    }
}

/// Run one complete simulated exchange: pick parameters, sample two
/// independent private keys, and compute each side's public key and shared
/// secret. Both parties live in-process; nothing is transmitted.
pub fn run_exchange(config: &ExchangeConfig) -> Result<ExchangeTranscript> {
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let params = ExchangeParams::generate_with(&mut rng, config.prime_min, config.prime_max)?;
    let alice = params.generate_keypair(&mut rng)?;
    let bob = params.generate_keypair(&mut rng)?;

    let shared_secret_a = alice.shared_secret(bob.public_key)?;
    let shared_secret_b = bob.shared_secret(alice.public_key)?;

    Ok(ExchangeTranscript {
        params,
        private_key_a: alice.private_key,
        private_key_b: bob.private_key,
        public_key_a: alice.public_key,
        public_key_b: bob.public_key,
        shared_secret_a,
        shared_secret_b,
    })
}

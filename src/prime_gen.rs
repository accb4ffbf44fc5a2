use log::{debug, info};
use rand::Rng;

use crate::error::{Error, Result};
use crate::primality::is_prime;

/// Cap on rejection-sampling attempts before giving up on a range.
///
/// At the default demo range's prime density (roughly 1 in 9 candidates) the
/// cap is unreachable in practice; it exists so that a prime-free range fails
/// with an explicit error instead of looping forever.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 100_000;

/// Generates a random prime in the closed range `[min, max]`.
///
/// Samples uniformly from the injected `rng` and accepts the first value
/// [`is_prime`] confirms. Entropy is consumed on every attempt, including
/// rejected ones.
///
/// # Errors
/// - [`Error::InvalidRange`] if `min > max`.
/// - [`Error::PrimeSearchExhausted`] if no prime turns up within
///   [`MAX_SAMPLE_ATTEMPTS`] samples (e.g. the range contains no prime).
pub fn generate_random_prime<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> Result<u64> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }

    for attempt in 1..=MAX_SAMPLE_ATTEMPTS {
        let candidate = rng.gen_range(min..=max);
        if is_prime(candidate) {
            info!(
                "accepted prime {} from [{}, {}] after {} attempt(s)",
                candidate, min, max, attempt
            );
            return Ok(candidate);
        }
        debug!("rejected composite candidate {}", candidate);
    }

    Err(Error::PrimeSearchExhausted {
        min,
        max,
        attempts: MAX_SAMPLE_ATTEMPTS,
    })
}

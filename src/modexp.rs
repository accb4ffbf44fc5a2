use crate::error::{Error, Result};

/// Computes `base^exponent mod modulus` by binary (square-and-multiply)
/// exponentiation. The result is always in `[0, modulus)`.
///
/// `exponent == 0` short-circuits to `1` even when `modulus == 1`, where true
/// modular arithmetic would give `0`. Kept for compatibility with the behavior
/// downstream callers were written against.
///
/// Intermediates are `u128`, so multiplying two residues up to `modulus - 1`
/// cannot overflow for any `u64` modulus.
///
/// # Errors
/// [`Error::InvalidModulus`] if `modulus` is zero.
pub fn pow_mod(base: u64, exponent: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::InvalidModulus(0));
    }
    if exponent == 0 {
        return Ok(1);
    }

    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut power = base as u128 % m;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent % 2 == 1 {
            result = (result * power) % m;
        }
        power = (power * power) % m;
        exponent /= 2;
    }

    Ok(result as u64)
}

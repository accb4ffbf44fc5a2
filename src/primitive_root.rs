use log::{debug, info};

use crate::error::{Error, Result};
use crate::modexp::pow_mod;

/// Returns the distinct prime factors of `n`, in ascending order.
///
/// Trial division up to `√n`: each factor found is stripped to full
/// multiplicity before moving on, and any residual greater than 1 after the
/// loop is itself prime and appended.
pub fn distinct_prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut i: u64 = 2;
    while (i as u128) * (i as u128) <= n as u128 {
        if n % i == 0 {
            factors.push(i);
            while n % i == 0 {
                n /= i;
            }
        }
        i += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Finds a primitive root (generator of the multiplicative group) modulo the
/// prime `p`.
///
/// With `phi = p - 1` fully factored into its distinct prime factors, a
/// candidate `g` is a primitive root iff `g^(phi/f) mod p != 1` for every
/// distinct prime factor `f` of `phi` (Lucas's criterion). Checking only the
/// distinct factors is the minimal sufficient test, avoiding an O(p) order
/// computation per candidate.
///
/// Candidates are searched in descending order from `p - 1` down to `2`; the
/// first hit is returned. The descending order is a deliberate tie-break kept
/// for reproducibility: `find_primitive_root(23)` is always `21`.
///
/// # Errors
/// - [`Error::InvalidModulus`] if `p < 2`.
/// - [`Error::GeneratorNotFound`] if the search space `(1, p-1]` is
///   exhausted. A primitive root always exists modulo a genuine prime, so
///   this is only reachable for composite `p` (or `p = 2`, whose candidate
///   range is empty); callers must still handle it.
pub fn find_primitive_root(p: u64) -> Result<u64> {
    if p < 2 {
        return Err(Error::InvalidModulus(p));
    }

    let phi = p - 1;
    let factors = distinct_prime_factors(phi);
    debug!("phi = {} has distinct prime factors {:?}", phi, factors);

    for candidate in (2..=phi).rev() {
        let mut is_generator = true;
        for &factor in &factors {
            if pow_mod(candidate, phi / factor, p)? == 1 {
                is_generator = false;
                break;
            }
        }
        if is_generator {
            info!("found primitive root {} modulo {}", candidate, p);
            return Ok(candidate);
        }
    }

    Err(Error::GeneratorNotFound(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::is_prime;

    #[test]
    fn test_distinct_prime_factors() {
        assert_eq!(distinct_prime_factors(22), vec![2, 11]);
        assert_eq!(distinct_prime_factors(12), vec![2, 3]);
        assert_eq!(distinct_prime_factors(97), vec![97]);
        assert_eq!(distinct_prime_factors(360), vec![2, 3, 5]);
        assert_eq!(distinct_prime_factors(1), Vec::<u64>::new());
    }

    #[test]
    fn test_factors_divide_and_reconstruct() {
        for n in 2..500u64 {
            let factors = distinct_prime_factors(n);
            let mut rest = n;
            for &f in &factors {
                assert!(is_prime(f), "factor {} of {} is not prime", f, n);
                assert_eq!(n % f, 0, "factor {} does not divide {}", f, n);
                while rest % f == 0 {
                    rest /= f;
                }
            }
            assert_eq!(rest, 1, "factors of {} do not reconstruct it", n);
        }
    }

    #[test]
    fn test_root_of_23_is_21() {
        // phi = 22 = 2 * 11; descending search settles on 21.
        let g = find_primitive_root(23).unwrap();
        assert_eq!(g, 21);
        assert_ne!(pow_mod(g, 11, 23).unwrap(), 1);
        assert_ne!(pow_mod(g, 2, 23).unwrap(), 1);
    }

    #[test]
    fn test_roots_generate_full_group_for_small_primes() {
        // Brute-force check: the powers g^1 .. g^(p-1) must enumerate every
        // nonzero residue exactly once.
        for p in (5..=50u64).filter(|&p| is_prime(p)) {
            let g = find_primitive_root(p).unwrap();
            let mut seen = vec![false; p as usize];
            let mut value = 1u64;
            for _ in 1..p {
                value = value * g % p;
                assert!(!seen[value as usize], "g = {} repeats mod {}", g, p);
                seen[value as usize] = true;
            }
            assert!(
                (1..p).all(|r| seen[r as usize]),
                "g = {} does not generate the full group mod {}",
                g,
                p
            );
        }
    }

    #[test]
    fn test_tiny_moduli() {
        // p = 2: phi = 1 has no prime factors, but the candidate range
        // (2..=1) is empty, so the search comes up empty-handed.
        assert_eq!(find_primitive_root(2).unwrap_err(), Error::GeneratorNotFound(2));
        // p = 3: phi = 2, and 2 is a generator.
        assert_eq!(find_primitive_root(3).unwrap(), 2);
        assert_eq!(find_primitive_root(0).unwrap_err(), Error::InvalidModulus(0));
        assert_eq!(find_primitive_root(1).unwrap_err(), Error::InvalidModulus(1));
    }
}

//!
//! Generate DSA key components
//!

use super::generate_prime;
use crate::{primality::MillerRabin, random::random_bytes_integer, Components, Error, KeySize, Result};
use num_bigint::BigUint;
use num_traits::One;
use signature::rand_core::CryptoRngCore;
use tracing::{debug, trace};

/// Number of multipliers tried against one q before a fresh q is drawn
const ATTEMPTS_PER_Q: u32 = 4096;

/// Generate the prime pair (p, q) with q dividing p - 1
///
/// q is a prime of `l_bytes` bytes. p is searched as `k * q + 1` with k drawn
/// from `n_bytes - l_bytes` random bytes.
///
/// # Returns
///
/// Tuple of two `BigUint`s. Ordered like this `(p, q)`
pub fn generate_domain_parameters(
    rng: &mut impl CryptoRngCore,
    n_bytes: usize,
    l_bytes: usize,
    tester: &MillerRabin<'_>,
) -> Result<(BigUint, BigUint)> {
    if l_bytes == 0 || n_bytes <= l_bytes {
        return Err(Error::InvalidKeySize);
    }

    let k_bytes = n_bytes - l_bytes;
    loop {
        let q = generate_prime(rng, l_bytes, tester)?;

        // Attempt to find a prime p which has a subgroup of the order q
        for attempt in 1..=ATTEMPTS_PER_Q {
            let k = random_bytes_integer(rng, k_bytes);
            let p = k * &q + 1u8;

            if tester.test(&p) {
                debug!(p_bits = p.bits(), q_bits = q.bits(), attempt, "prime pair found");
                return Ok((p, q));
            }
        }

        trace!(q_bits = q.bits(), "no prime p for this q, drawing a new q");
    }
}

/// Generate the common components p, q, and a
///
/// # Returns
///
/// Tuple of three `BigUint`s. Ordered like this `(p, q, a)`
pub(crate) fn common(
    rng: &mut impl CryptoRngCore,
    size: KeySize,
    tester: &MillerRabin<'_>,
) -> Result<(BigUint, BigUint, BigUint)> {
    let (p, q) = generate_domain_parameters(rng, size.p_bytes(), size.q_bytes(), tester)?;
    let a = generator(&p, &q)?;

    Ok((p, q, a))
}

/// Find a generator of the order-q subgroup by scanning g = 2, 3, ...
fn generator(p: &BigUint, q: &BigUint) -> Result<BigUint> {
    let e = (p - BigUint::one()) / q;

    let mut g = crate::two();
    while g < *p {
        let a = g.modpow(&e, p);
        if !a.is_one() {
            debug!(%g, "subgroup generator found");
            return Ok(a);
        }

        g += 1u8;
    }

    Err(Error::NoGenerator)
}

/// Calculate the public component from the common components and the private component
#[inline]
pub(crate) fn public(components: &Components, d: &BigUint) -> BigUint {
    components.a().modpow(d, components.p())
}

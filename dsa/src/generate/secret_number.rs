//!
//! Generate a per-message secret number
//!

use crate::{inverse_mod_prime, random::random_in_range, Components, Result};
use num_bigint::BigUint;
use num_traits::One;
use signature::rand_core::CryptoRngCore;

/// Generate a per-message secret number k in `[1, q)`
///
/// # Returns
///
/// Secret number k and its modular multiplicative inverse with q
#[inline]
pub(crate) fn secret_number(
    rng: &mut impl CryptoRngCore,
    components: &Components,
) -> Result<(BigUint, BigUint)> {
    let q = components.q();
    let k = random_in_range(rng, &BigUint::one(), q)?;
    let inv_k = inverse_mod_prime(&k, q);

    Ok((k, inv_k))
}

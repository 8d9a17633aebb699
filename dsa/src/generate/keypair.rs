//!
//! Generate a DSA keypair
//!

use crate::{random::random_in_range, Components, PrivateKey, PublicKey, Result};
use num_bigint::BigUint;
use num_traits::One;
use signature::rand_core::CryptoRngCore;

/// Generate a new keypair over existing components
#[inline]
pub(crate) fn keypair(
    rng: &mut impl CryptoRngCore,
    components: Components,
) -> Result<(PublicKey, PrivateKey)> {
    let d = random_in_range(rng, &BigUint::one(), components.q())?;
    let b = super::public_component(&components, &d);

    let public_key = PublicKey::from_components(components, b)?;
    let private_key = PrivateKey::from_components(public_key.components(), d)?;

    Ok((public_key, private_key))
}

//!
//! Module containing the definition of the private key container
//!

use crate::{generate, Components, Error, Signature};
use num_bigint::BigUint;
use num_traits::Zero;
use signature::rand_core::CryptoRngCore;
use tracing::trace;

/// DSA private key
///
/// Holds the private exponent d only. The matching [`PublicKey`](crate::PublicKey)
/// is passed next to it when signing.
///
/// d is not zeroized when the key is dropped.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct PrivateKey {
    /// Private component d
    d: BigUint,
}

opaque_debug::implement!(PrivateKey);

impl PrivateKey {
    /// Construct a new private key from its private component
    ///
    /// d has to lie in `(0, q)`.
    pub fn from_components(components: &Components, d: BigUint) -> crate::Result<Self> {
        if d.is_zero() || d >= *components.q() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self { d })
    }

    /// DSA private component d
    ///
    /// Anyone holding this value can sign on behalf of the key owner
    #[must_use]
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Sign some pre-hashed data with a fresh ephemeral key
    ///
    /// A draw that yields r = 0 or s = 0 is thrown away and repeated.
    pub(crate) fn sign_prehashed(
        &self,
        rng: &mut impl CryptoRngCore,
        components: &Components,
        hash: &[u8],
    ) -> crate::Result<Signature> {
        loop {
            let k_kinv = generate::secret_number(rng, components)?;

            if let Some(signature) = self.sign_with_secret(components, k_kinv, hash) {
                return Ok(signature);
            }

            trace!("degenerate signature, drawing a new ephemeral key");
        }
    }

    /// Sign some pre-hashed data with the given secret number and its inverse
    fn sign_with_secret(
        &self,
        components: &Components,
        (k, inv_k): (BigUint, BigUint),
        hash: &[u8],
    ) -> Option<Signature> {
        let (p, q, a) = (components.p(), components.q(), components.a());

        let r = a.modpow(&k, p) % q;
        let h = BigUint::from_bytes_le(hash);
        let s = ((h + &self.d * &r) * inv_k) % q;

        Signature::from_components(r, s)
    }
}

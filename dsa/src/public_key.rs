//!
//! Module containing the definition of the public key container
//!

use crate::{hash_message, inverse_mod_prime, Components, Error, Result, Signature};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha1::Sha1;
use signature::{DigestVerifier, Verifier};

/// DSA public key
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct PublicKey {
    /// Common components
    components: Components,

    /// Public component b
    b: BigUint,
}

impl PublicKey {
    /// Construct a new public key from the common components and the public component
    ///
    /// b has to lie in `(1, p)` and inside the order-q subgroup.
    pub fn from_components(components: Components, b: BigUint) -> Result<Self> {
        let (p, q) = (components.p(), components.q());

        if b <= BigUint::one() || b >= *p || !b.modpow(q, p).is_one() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { components, b })
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA public component b
    #[must_use]
    pub const fn b(&self) -> &BigUint {
        &self.b
    }

    /// Verify a signature over a SHA-1 digest
    pub(crate) fn verify_prehashed(&self, hash: &[u8], signature: &Signature) -> bool {
        let components = self.components();
        let (p, q, a) = (components.p(), components.q(), components.a());
        let (r, s) = (signature.r(), signature.s());

        if r.is_zero() || s.is_zero() || r >= q || s >= q {
            return false;
        }

        let w = inverse_mod_prime(s, q);
        let h = BigUint::from_bytes_le(hash);

        let x = (&w * h) % q;
        let y = (&w * r) % q;

        let v = (a.modpow(&x, p) * self.b.modpow(&y, p)) % p % q;

        v == *r
    }
}

impl Verifier<Signature> for PublicKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_prehashed(&hash_message(msg), signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl DigestVerifier<Sha1, Signature> for PublicKey {
    fn verify_digest(&self, digest: Sha1, signature: &Signature) -> signature::Result<()> {
        use digest::Digest;

        if self.verify_prehashed(&digest.finalize(), signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

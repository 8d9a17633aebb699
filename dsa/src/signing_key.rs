//!
//! Module containing the definition of the signing key container
//!

use crate::{generate, Components, Error, PrivateKey, PublicKey, Signature};
use digest::Digest;
use sha1::Sha1;
use signature::{rand_core::CryptoRngCore, Keypair, RandomizedDigestSigner, RandomizedSigner};

/// DSA signing key: a public key bundled with its private exponent
///
/// Signing goes through the [`RandomizedSigner`] and [`RandomizedDigestSigner`]
/// APIs. Every signature uses a fresh ephemeral key drawn from the given RNG.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct SigningKey {
    /// Public key
    public_key: PublicKey,

    /// Private component d
    private_key: PrivateKey,
}

opaque_debug::implement!(SigningKey);

impl SigningKey {
    /// Bundle a public key with its private key
    ///
    /// Fails unless b = a^d mod p.
    pub fn from_components(public_key: PublicKey, private_key: PrivateKey) -> crate::Result<Self> {
        let components = public_key.components();
        let private_key = PrivateKey::from_components(components, private_key.d().clone())?;

        if generate::public_component(components, private_key.d()) != *public_key.b() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Generate a new DSA keypair over existing components
    pub fn generate(rng: &mut impl CryptoRngCore, components: Components) -> crate::Result<Self> {
        let (public_key, private_key) = generate::keypair(rng, components)?;

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// DSA public key
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// DSA private key
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Split into the public and the private key
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public_key, self.private_key)
    }
}

impl Keypair for SigningKey {
    type VerifyingKey = PublicKey;

    fn verifying_key(&self) -> PublicKey {
        self.public_key.clone()
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        self.try_sign_digest_with_rng(rng, Sha1::new_with_prefix(msg))
    }
}

impl RandomizedDigestSigner<Sha1, Signature> for SigningKey {
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: Sha1,
    ) -> signature::Result<Signature> {
        let hash = digest.finalize();

        self.private_key
            .sign_prehashed(rng, self.public_key.components(), &hash)
            .map_err(signature::Error::from)
    }
}

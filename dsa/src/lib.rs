#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![doc = include_str!("../README.md")]

//!
//! # Examples
//!
//! Generate a DSA keypair, sign a message and verify the signature
//!
//! ```
//! # use classic_dsa::KeySize;
//! let mut rng = rand_core::OsRng;
//! let size = KeySize::new(256, 64)?;
//! let (public_key, private_key) = classic_dsa::generate_keys(&mut rng, size)?;
//!
//! let signature = classic_dsa::sign(&mut rng, &public_key, &private_key, b"hello")?;
//! assert!(classic_dsa::verify(&public_key, &signature, b"hello"));
//! assert!(!classic_dsa::verify(&public_key, &signature, b"hello!"));
//! # Ok::<(), classic_dsa::Error>(())
//! ```
//!
//! Create keys from existing components
//!
//! ```
//! # use classic_dsa::{Components, PrivateKey, PublicKey, SigningKey};
//! # let read_common_parameters = || (23u8.into(), 11u8.into(), 4u8.into());
//! # let read_public_component = || 18u8.into();
//! # let read_private_component = || 3u8.into();
//! let (p, q, a) = read_common_parameters();
//! let components = Components::from_components(p, q, a)?;
//!
//! let d = read_private_component();
//! let private_key = PrivateKey::from_components(&components, d)?;
//!
//! let b = read_public_component();
//! let public_key = PublicKey::from_components(components, b)?;
//!
//! let signing_key = SigningKey::from_components(public_key, private_key)?;
//! # Ok::<(), classic_dsa::Error>(())
//! ```
//!

extern crate alloc;

pub use crate::{
    components::Components,
    errors::{Error, Result},
    generate::{generate_domain_parameters, generate_prime},
    primality::{is_probably_prime, MillerRabin},
    private_key::PrivateKey,
    public_key::PublicKey,
    random::{random_bytes_integer, random_in_range},
    sig::Signature,
    signing_key::SigningKey,
    size::KeySize,
};

pub use num_bigint::BigUint;
pub use sha1;
pub use signature;

use digest::{Digest, Output};
use sha1::Sha1;
use signature::rand_core::CryptoRngCore;

mod components;
mod errors;
mod generate;
mod primality;
mod private_key;
mod public_key;
mod random;
mod sig;
mod signing_key;
mod size;

/// Generate fresh domain parameters and a keypair over them
pub fn generate_keys(
    rng: &mut impl CryptoRngCore,
    size: KeySize,
) -> Result<(PublicKey, PrivateKey)> {
    let components = Components::generate(rng, size)?;
    generate::keypair(rng, components)
}

/// Sign `message` with a fresh ephemeral key
pub fn sign(
    rng: &mut impl CryptoRngCore,
    public_key: &PublicKey,
    private_key: &PrivateKey,
    message: &[u8],
) -> Result<Signature> {
    private_key.sign_prehashed(rng, public_key.components(), &hash_message(message))
}

/// Check `signature` over `message` against `public_key`
///
/// Signatures with r or s outside `(0, q)` are rejected.
#[must_use]
pub fn verify(public_key: &PublicKey, signature: &Signature, message: &[u8]) -> bool {
    public_key.verify_prehashed(&hash_message(message), signature)
}

/// SHA-1 digest of the message
#[inline]
fn hash_message(message: &[u8]) -> Output<Sha1> {
    Sha1::digest(message)
}

/// Inverse of `x` modulo the prime `m`, as `x^(m - 2) mod m`
///
/// Only correct for prime m (Fermat's little theorem).
#[inline]
fn inverse_mod_prime(x: &BigUint, m: &BigUint) -> BigUint {
    x.modpow(&(m - two()), m)
}

/// Returns a `BigUint` with the value 2
#[inline]
fn two() -> BigUint {
    BigUint::from(2_u8)
}

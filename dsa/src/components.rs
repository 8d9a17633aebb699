//!
//! Module containing the definition of the common components container
//!

use crate::{generate, primality::MillerRabin, Error, KeySize, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use signature::rand_core::CryptoRngCore;

/// The common components of a DSA keypair
///
/// (the prime p, the prime divisor q of p - 1 and the subgroup generator a)
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Components {
    /// Prime p
    p: BigUint,

    /// Prime divisor q of p - 1
    q: BigUint,

    /// Generator a of the order-q subgroup
    a: BigUint,
}

impl Components {
    /// Construct the common components container from its inner values (p, q and a)
    ///
    /// p and q have to pass the base-2 primality test, q has to divide p - 1 and
    /// a has to be a non-trivial element of order q.
    pub fn from_components(p: BigUint, q: BigUint, a: BigUint) -> Result<Self> {
        let components = Self { p, q, a };

        if !components.is_valid() {
            return Err(Error::InvalidComponents);
        }

        Ok(components)
    }

    /// Generate a new set of common components
    ///
    /// Candidates are checked with the single-witness [`MillerRabin::BASE_TWO`] test.
    pub fn generate(rng: &mut impl CryptoRngCore, size: KeySize) -> Result<Self> {
        Self::generate_with(rng, size, &MillerRabin::default())
    }

    /// Generate a new set of common components using a custom primality test
    pub fn generate_with(
        rng: &mut impl CryptoRngCore,
        size: KeySize,
        tester: &MillerRabin<'_>,
    ) -> Result<Self> {
        let (p, q, a) = generate::common_components(rng, size, tester)?;
        Ok(Self { p, q, a })
    }

    /// DSA prime p
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// DSA prime divisor q
    #[must_use]
    pub const fn q(&self) -> &BigUint {
        &self.q
    }

    /// DSA subgroup generator a
    #[must_use]
    pub const fn a(&self) -> &BigUint {
        &self.a
    }

    /// Check whether the components are valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let (p, q, a) = (self.p(), self.q(), self.a());
        let tester = MillerRabin::default();

        tester.test(p)
            && tester.test(q)
            && (p - BigUint::one()).mod_floor(q).is_zero()
            && *a > BigUint::one()
            && a < p
            && a.modpow(q, p).is_one()
    }
}

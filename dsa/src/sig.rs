//!
//! Module containing the definition of the Signature container
//!

use num_bigint::BigUint;
use num_traits::Zero;

/// Container of the DSA signature
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Signature {
    /// Signature part r
    r: BigUint,

    /// Signature part s
    s: BigUint,
}

impl Signature {
    /// Create a new Signature container from its components
    ///
    /// Neither part may be zero. The upper bound q is checked on verification.
    pub fn from_components(r: BigUint, s: BigUint) -> Option<Self> {
        if r.is_zero() || s.is_zero() {
            return None;
        }

        Some(Self { r, s })
    }

    /// Signature part r
    #[must_use]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Signature part s
    #[must_use]
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Deconstruct the signature into `(r, s)`
    #[must_use]
    pub fn into_components(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

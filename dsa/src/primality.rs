//!
//! Miller-Rabin probabilistic primality test
//!

use crate::two;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Miller-Rabin test over a fixed list of witnesses
///
/// [`MillerRabin::BASE_TWO`] uses the single witness 2. That is enough for the
/// randomly sampled candidates this crate generates, but not for numbers chosen
/// by an adversary: 2047 = 23 * 89 is the first composite it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MillerRabin<'a> {
    bases: &'a [u32],
}

impl<'a> MillerRabin<'a> {
    /// Single witness 2
    pub const BASE_TWO: MillerRabin<'static> = MillerRabin { bases: &[2] };

    /// The first twelve primes as witnesses
    ///
    /// Deterministic for every n below 3.1 * 10^23.
    pub const FIRST_PRIMES: MillerRabin<'static> = MillerRabin {
        bases: &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37],
    };

    /// Test with a custom witness list
    ///
    /// Returns `None` when `bases` is empty.
    #[must_use]
    pub const fn with_bases(bases: &'a [u32]) -> Option<Self> {
        if bases.is_empty() {
            return None;
        }

        Some(Self { bases })
    }

    /// Witnesses used by this test
    #[must_use]
    pub const fn bases(&self) -> &'a [u32] {
        self.bases
    }

    /// Check whether `n` is probably prime
    ///
    /// Even numbers (2 included) and numbers below 2 are always rejected.
    #[must_use]
    pub fn test(&self, n: &BigUint) -> bool {
        if n.is_even() || *n < two() {
            return false;
        }

        // n - 1 = 2^s * m with m odd
        let n_minus_one = n - BigUint::one();
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        let m = &n_minus_one >> s;

        self.bases.iter().all(|&base| {
            let witness = BigUint::from(base) % n;
            passes(&witness, n, &n_minus_one, &m, s)
        })
    }
}

impl Default for MillerRabin<'static> {
    fn default() -> Self {
        Self::BASE_TWO
    }
}

/// Whether `witness` fails to prove `n` composite
fn passes(witness: &BigUint, n: &BigUint, n_minus_one: &BigUint, m: &BigUint, s: u64) -> bool {
    // 0, 1 and -1 say nothing about n
    if witness.is_zero() || witness.is_one() || witness == n_minus_one {
        return true;
    }

    let mut x = witness.modpow(m, n);
    if x.is_one() || x == *n_minus_one {
        return true;
    }

    for _ in 1..s {
        x = (&x * &x) % n;

        if x == *n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }

    false
}

/// Check whether `n` is probably prime using the single witness 2
#[must_use]
pub fn is_probably_prime(n: &BigUint) -> bool {
    MillerRabin::BASE_TWO.test(n)
}

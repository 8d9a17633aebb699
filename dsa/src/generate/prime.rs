//!
//! Generate a random probable prime
//!

use super::odd_candidate;
use crate::{primality::MillerRabin, random::byte_len, Error, Result};
use num_bigint::BigUint;
use signature::rand_core::CryptoRngCore;
use tracing::{debug, trace};

/// Generate a probable prime that fits in `byte_length` signed bytes
///
/// Starts from a random odd number and walks upwards over the odd numbers until
/// `tester` accepts one. A walk that outgrows `byte_length` restarts from a
/// fresh random candidate.
pub fn generate_prime(
    rng: &mut impl CryptoRngCore,
    byte_length: usize,
    tester: &MillerRabin<'_>,
) -> Result<BigUint> {
    if byte_length == 0 {
        return Err(Error::InvalidKeySize);
    }

    let mut candidate = odd_candidate(rng, byte_length);
    let mut attempts: u64 = 1;

    loop {
        if byte_len(&candidate) > byte_length {
            trace!(byte_length, attempts, "prime candidate overflowed, resampling");
            candidate = odd_candidate(rng, byte_length);
        } else if tester.test(&candidate) {
            debug!(bits = candidate.bits(), attempts, "prime found");
            return Ok(candidate);
        } else {
            candidate += 2u8;
        }

        attempts += 1;
    }
}

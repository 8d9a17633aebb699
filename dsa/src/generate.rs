use crate::random::random_bytes_integer;
use num_bigint::BigUint;
use num_integer::Integer;
use signature::rand_core::CryptoRngCore;

mod components;
mod keypair;
mod prime;
mod secret_number;

pub use self::components::generate_domain_parameters;
pub use self::prime::generate_prime;

pub(crate) use self::components::{common as common_components, public as public_component};
pub(crate) use self::keypair::keypair;
pub(crate) use self::secret_number::secret_number;

/// Draw a fresh odd candidate of at most `length` bytes
#[inline]
fn odd_candidate(rng: &mut impl CryptoRngCore, length: usize) -> BigUint {
    let mut candidate = random_bytes_integer(rng, length);
    if candidate.is_even() {
        candidate += 1u8;
    }

    candidate
}

//!
//! Integer draws from an injected random number generator
//!

use crate::{Error, Result};
use alloc::vec;
use num_bigint::{BigInt, BigUint};
use signature::rand_core::CryptoRngCore;
use zeroize::Zeroize;

/// Draw `length` random bytes and turn them into a non-negative integer
///
/// The bytes are read as a little-endian two's complement number and the sign
/// is dropped, so the result lies in `[0, 2^(8 * length - 1)]`. This is not a
/// uniform draw over `[0, 2^(8 * length))`: the top bit only contributes to the
/// sign and every magnitude except 0 and `2^(8 * length - 1)` is hit twice.
pub fn random_bytes_integer(rng: &mut impl CryptoRngCore, length: usize) -> BigUint {
    let mut buffer = vec![0; length];
    rng.fill_bytes(&mut buffer);

    let (_, magnitude) = BigInt::from_signed_bytes_le(&buffer).into_parts();
    buffer.zeroize();

    magnitude
}

/// Draw an integer from the half-open range `[begin, end)`
///
/// Samples [`random_bytes_integer`] one byte wider than `end`, reduces it
/// modulo `end` and rejects results below `begin`.
pub fn random_in_range(
    rng: &mut impl CryptoRngCore,
    begin: &BigUint,
    end: &BigUint,
) -> Result<BigUint> {
    if begin >= end {
        return Err(Error::EmptyRange);
    }

    let length = byte_len(end) + 1;
    loop {
        let candidate = random_bytes_integer(rng, length) % end;
        if candidate >= *begin {
            return Ok(candidate);
        }
    }
}

/// Number of bytes needed to store `n` as a signed two's complement integer
#[inline]
pub(crate) fn byte_len(n: &BigUint) -> usize {
    (n.bits() / 8 + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use signature::rand_core::{self, CryptoRng, RngCore};

    /// Replays a fixed byte sequence, wrapping around at the end
    struct FixedBytes {
        bytes: Vec<u8>,
        position: usize,
    }

    impl FixedBytes {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                position: 0,
            }
        }
    }

    impl RngCore for FixedBytes {
        fn next_u32(&mut self) -> u32 {
            rand_core::impls::next_u32_via_fill(self)
        }

        fn next_u64(&mut self) -> u64 {
            rand_core::impls::next_u64_via_fill(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.bytes[self.position % self.bytes.len()];
                self.position += 1;
            }
        }

        fn try_fill_bytes(
            &mut self,
            dest: &mut [u8],
        ) -> core::result::Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for FixedBytes {}

    #[test]
    fn bytes_are_little_endian_signed_magnitude() {
        let cases: [(&[u8], u32); 6] = [
            (&[0x00], 0),
            (&[0x7f], 127),
            (&[0x80], 128),
            (&[0xff], 1),
            (&[0x01, 0x00], 1),
            (&[0x00, 0x01], 256),
        ];

        for (bytes, expected) in cases {
            let mut rng = FixedBytes::new(bytes);
            assert_eq!(
                random_bytes_integer(&mut rng, bytes.len()),
                BigUint::from(expected),
                "bytes {bytes:02x?}"
            );
        }
    }

    #[test]
    fn zero_length_draw_is_zero() {
        let mut rng = FixedBytes::new(&[0xaa]);
        assert_eq!(random_bytes_integer(&mut rng, 0), BigUint::from(0u8));
    }

    #[test]
    fn byte_len_counts_sign_bit() {
        assert_eq!(byte_len(&BigUint::from(0u8)), 1);
        assert_eq!(byte_len(&BigUint::from(127u8)), 1);
        assert_eq!(byte_len(&BigUint::from(128u8)), 2);
        assert_eq!(byte_len(&BigUint::from(255u8)), 2);
        assert_eq!(byte_len(&BigUint::from(32767u16)), 2);
        assert_eq!(byte_len(&BigUint::from(32768u16)), 3);
    }

    #[test]
    fn range_draw_rejects_values_below_begin() {
        // end = 10 draws two bytes: 0x0003 -> 3 (rejected), 0x0007 -> 7
        let mut rng = FixedBytes::new(&[0x03, 0x00, 0x07, 0x00]);
        let value = random_in_range(&mut rng, &BigUint::from(5u8), &BigUint::from(10u8)).unwrap();
        assert_eq!(value, BigUint::from(7u8));
    }

    #[test]
    fn range_draw_reduces_modulo_end() {
        // 0x000c = 12 -> 12 mod 10 = 2
        let mut rng = FixedBytes::new(&[0x0c, 0x00]);
        let value = random_in_range(&mut rng, &BigUint::from(1u8), &BigUint::from(10u8)).unwrap();
        assert_eq!(value, BigUint::from(2u8));
    }
}

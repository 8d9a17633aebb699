use crate::{Error, Result};

/// DSA key size
///
/// `n` is the bit size of the modulus p, `l` the bit size of the subgroup
/// order q. Generation works on whole bytes, so both are divided by 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySize {
    /// Bit size of p
    pub(crate) n: u32,

    /// Bit size of q
    pub(crate) l: u32,
}

impl KeySize {
    /// DSA parameter size constant: N = 1024, L = 160
    pub const DSA_1024_160: Self = Self { n: 1024, l: 160 };

    /// DSA parameter size constant: N = 2048, L = 224
    pub const DSA_2048_224: Self = Self { n: 2048, l: 224 };

    /// DSA parameter size constant: N = 2048, L = 256
    pub const DSA_2048_256: Self = Self { n: 2048, l: 256 };

    /// DSA parameter size constant: N = 3072, L = 256
    pub const DSA_3072_256: Self = Self { n: 3072, l: 256 };

    /// Custom key size from bit lengths of p (`n`) and q (`l`)
    ///
    /// Fails unless `0 < l / 8 < n / 8`.
    pub fn new(n: u32, l: u32) -> Result<Self> {
        let size = Self { n, l };

        if size.q_bytes() == 0 || size.p_bytes() <= size.q_bytes() {
            return Err(Error::InvalidKeySize);
        }

        Ok(size)
    }

    /// Bit size of p
    #[must_use]
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// Bit size of q
    #[must_use]
    pub const fn l(&self) -> u32 {
        self.l
    }

    #[inline]
    pub(crate) const fn p_bytes(&self) -> usize {
        (self.n / 8) as usize
    }

    #[inline]
    pub(crate) const fn q_bytes(&self) -> usize {
        (self.l / 8) as usize
    }
}

impl Default for KeySize {
    fn default() -> Self {
        Self::DSA_1024_160
    }
}

#[cfg(test)]
mod tests {
    use super::KeySize;
    use crate::Error;

    #[test]
    fn byte_lengths_round_down() {
        let size = KeySize::new(70, 39).unwrap();
        assert_eq!(size.p_bytes(), 8);
        assert_eq!(size.q_bytes(), 4);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(KeySize::new(64, 7), Err(Error::InvalidKeySize));
        assert_eq!(KeySize::new(64, 64), Err(Error::InvalidKeySize));
        assert_eq!(KeySize::new(32, 64), Err(Error::InvalidKeySize));
        assert_eq!(KeySize::new(71, 64), Err(Error::InvalidKeySize));
    }

    #[test]
    fn default_matches_classic_parameters() {
        assert_eq!(KeySize::default(), KeySize::DSA_1024_160);
        assert_eq!(KeySize::default().n(), 1024);
        assert_eq!(KeySize::default().l(), 160);
    }
}

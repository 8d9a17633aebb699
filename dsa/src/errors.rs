use thiserror::Error;

/// Result type with the `classic-dsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A ranged draw was asked for an empty range (`begin >= end`)
    #[error("dsa: empty range, begin must be below end")]
    EmptyRange,

    /// The requested parameter sizes can't produce a prime pair
    #[error("dsa: invalid key size, need 0 < L/8 < N/8")]
    InvalidKeySize,

    /// The common components (p, q, a) don't form a valid order-q subgroup
    #[error("dsa: invalid common components")]
    InvalidComponents,

    /// The public component b is out of range or outside the subgroup
    #[error("dsa: invalid public key")]
    InvalidPublicKey,

    /// The private exponent is out of range or doesn't match the public key
    #[error("dsa: invalid private key")]
    InvalidPrivateKey,

    /// No element of the group mapped to a non-trivial subgroup generator
    #[error("dsa: no generator found for the order-q subgroup")]
    NoGenerator,
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> Self {
        signature::Error::new()
    }
}

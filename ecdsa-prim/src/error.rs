//! Error types.

use core::fmt::{self, Display, Formatter};

/// Result type with the `ecdsa-prim` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// ECDSA errors.
///
/// Verification failures aren't errors: verifying functions return `false`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The curve's order is too small to sign with.
    InvalidCurve,
    /// The secret scalar is out of the range `[1, n)`.
    InvalidKey,
    /// The ephemeral scalar produced `r = 0` or `s = 0`.
    InvalidNonce,
    /// A signature couldn't be encoded or decoded as ASN.1 DER or hex.
    MalformedEncoding,
    /// The random number generator failed.
    Rng,
    /// No usable ephemeral scalar was found within the attempt limit.
    RetryLimit,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurve => write!(f, "curve order is too small"),
            Error::InvalidKey => write!(f, "secret scalar is out of range"),
            Error::InvalidNonce => write!(f, "ephemeral scalar yields a zero signature component"),
            Error::MalformedEncoding => write!(f, "malformed signature encoding"),
            Error::Rng => write!(f, "random number generator failure"),
            Error::RetryLimit => write!(f, "exhausted attempts to find a usable ephemeral scalar"),
        }
    }
}

impl core::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::MalformedEncoding
    }
}

impl From<base16ct::Error> for Error {
    fn from(_: base16ct::Error) -> Error {
        Error::MalformedEncoding
    }
}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Error {
        Error::Rng
    }
}

#[cfg(feature = "signature")]
impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_: Error) -> Self {
        signature::Error::new()
    }
}

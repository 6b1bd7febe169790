//! Elliptic Curve Digital Signature Algorithm (ECDSA) as specified in
//! [FIPS 186-4] (Digital Signature Standard), with ephemeral scalars drawn
//! from a cryptographically secure random number generator.
//!
//! ## Usage
//!
//! NOTE: requires the `getrandom` crate feature enabled.
//!
#![cfg_attr(all(feature = "getrandom", feature = "std"), doc = "```")]
#![cfg_attr(not(all(feature = "getrandom", feature = "std")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use ecdsa_prim::{Signature, SigningKey, sign, verify, weierstrass::CurveParams};
//! use hex_literal::hex;
//!
//! // Signing
//! let secret_key = hex!("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721");
//! let signing_key = SigningKey::from_slice(CurveParams::p256(), &secret_key)?;
//! let digest = hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf"); // SHA-256("sample")
//! let signature = sign(&signing_key, &digest)?;
//! let encoded = signature.to_der_hex()?;
//!
//! // Verifying
//! let verifying_key = signing_key.verifying_key();
//! let signature: Signature = encoded.parse()?;
//! assert!(verify(&verifying_key, &digest, &signature));
//! # Ok(())
//! # }
//! ```
//!
//! [FIPS 186-4]: https://csrc.nist.gov/publications/detail/fips/186/4/final

mod der;
mod signing;
mod verifying;

pub use self::{
    signing::{MAX_SIGN_ATTEMPTS, SigningKey, sign_with_rng},
    verifying::{VerifyingKey, verify},
};

#[cfg(feature = "getrandom")]
pub use self::signing::sign;

use crate::{Error, Result};
use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};
use num_bigint::BigUint;
use num_traits::Zero;

/// ECDSA signature: the pair of integers `(r, s)`.
///
/// Signatures produced by [`sign`] satisfy `0 < r, s < n` where `n` is the
/// order of the curve. Decoded signatures may hold any non-negative values;
/// range checks happen at verification time.
///
/// The [`Display`] and [`FromStr`] impls use the hex form of the ASN.1 DER
/// encoding.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a [`Signature`] from its `r` and `s` components.
    pub fn from_rs(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Replaces `s` with `n - s` when `s > n/2`. Signatures whose `s` isn't
    /// in the range `(0, n)` are returned as-is.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self, order: &BigUint) -> Signature {
        if self.s.is_zero() || &self.s >= order || self.s <= (order >> 1usize) {
            return self.clone();
        }

        Self {
            r: self.r.clone(),
            s: order - &self.s,
        }
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(der) = self.to_der() else {
            return f
                .debug_struct("Signature")
                .field("r", &format_args!("{:x}", self.r))
                .field("s", &format_args!("{:x}", self.s))
                .finish();
        };

        write!(f, "ecdsa_prim::Signature(")?;

        for byte in der {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

/// Writes the lowercase hex of the DER encoding. Reports [`fmt::Error`] only
/// for signatures too large to encode, see [`Signature::to_der`].
impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_der_hex().map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Signature> {
        Signature::from_der_hex(hex)
    }
}

impl From<Signature> for (BigUint, BigUint) {
    fn from(signature: Signature) -> (BigUint, BigUint) {
        signature.into_parts()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_der(bytes)
    }
}

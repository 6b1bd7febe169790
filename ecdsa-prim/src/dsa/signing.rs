//! Support for ECDSA signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1: pick a random number k in [1, n-1] via a random number generator
//! 2: calculate the elliptic curve point (x1, y1) = k×G
//! 3: calculate r = x1 mod n, return to 1 if r = 0
//! 4: calculate e from the leftmost bitlen(n) bits of the digest
//! 5: calculate s = k⁻¹(e + rd) mod n, return to 1 if s = 0
//! 6: the signature is (r, s)
//! ```

use super::{Signature, VerifyingKey};
use crate::{Error, Result, hazmat};
use alloc::vec;
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use weierstrass::Curve;
use zeroize::Zeroizing;

#[cfg(feature = "signature")]
use signature::hazmat::RandomizedPrehashSigner;

/// Maximum number of ephemeral scalars tried by a single signing operation
/// before giving up with [`Error::RetryLimit`].
pub const MAX_SIGN_ATTEMPTS: usize = 256;

/// Number of random bytes drawn beyond the curve size, making the bias of
/// the reduction modulo `n - 1` negligible.
const NONCE_EXTRA_BYTES: usize = 8;

/// ECDSA secret key used for signing message digests and producing
/// signatures.
///
/// ## Usage
///
/// - [`SigningKey::sign_prehash_with_rng`]: sign a digest with randomness
///   from the provided RNG
/// - [`SigningKey::sign_prehash`]: sign a digest with randomness from the
///   operating system (requires the `getrandom` feature)
#[derive(Clone)]
pub struct SigningKey<C> {
    /// Curve arithmetic.
    curve: C,

    /// Secret scalar `d`.
    secret_scalar: BigUint,
}

impl<C> SigningKey<C>
where
    C: Curve,
{
    /// Create a signing key from a curve and a secret scalar.
    ///
    /// The scalar is taken as given. Use [`SigningKey::from_slice`] to check
    /// that it's in the range `[1, n)`.
    pub fn new(curve: C, secret_scalar: BigUint) -> Self {
        Self {
            curve,
            secret_scalar,
        }
    }

    /// Parse signing key from a big endian-encoded byte slice containing a
    /// secret scalar value.
    ///
    /// Returns [`Error::InvalidKey`] unless the scalar is in `[1, n)`.
    pub fn from_slice(curve: C, bytes: &[u8]) -> Result<Self> {
        let secret_scalar = BigUint::from_bytes_be(bytes);

        if secret_scalar.is_zero() || &secret_scalar >= curve.order() {
            return Err(Error::InvalidKey);
        }

        Ok(Self::new(curve, secret_scalar))
    }

    /// Borrow the curve this key is for.
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Borrow the secret scalar value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_secret_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> VerifyingKey<C>
    where
        C: Clone,
    {
        let public_point = self
            .curve
            .scalar_base_mul(&self.secret_scalar.to_bytes_be());
        VerifyingKey::new(self.curve.clone(), public_point)
    }

    /// Sign the given message digest, drawing ephemeral scalars from `rng`.
    ///
    /// The digest may have any length: it's truncated to the bit length of
    /// the curve order.
    pub fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> Result<Signature> {
        let order = self.curve.order();
        if order.bits() < 2 {
            return Err(Error::InvalidCurve);
        }

        let n_minus_one = order - BigUint::one();
        let mut bytes = Zeroizing::new(vec![0u8; self.curve.bit_size() / 8 + NONCE_EXTRA_BYTES]);

        for _ in 0..MAX_SIGN_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)?;

            // k ∈ [1, n)
            let k = BigUint::from_bytes_be(&bytes) % &n_minus_one + 1u8;

            match hazmat::sign_prehashed(&self.curve, &self.secret_scalar, &k, prehash) {
                Err(Error::InvalidNonce) => continue,
                result => return result,
            }
        }

        Err(Error::RetryLimit)
    }

    /// Sign the given message digest with ephemeral scalars drawn from the
    /// operating system's random number generator.
    #[cfg(feature = "getrandom")]
    pub fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature> {
        self.sign_prehash_with_rng(&mut rand_core::OsRng, prehash)
    }
}

/// Sign a message digest with `key`, drawing ephemeral scalars from `rng`.
pub fn sign_with_rng<C: Curve>(
    key: &SigningKey<C>,
    digest: &[u8],
    rng: &mut impl CryptoRngCore,
) -> Result<Signature> {
    key.sign_prehash_with_rng(rng, digest)
}

/// Sign a message digest with `key`, drawing ephemeral scalars from the
/// operating system's random number generator.
#[cfg(feature = "getrandom")]
pub fn sign<C: Curve>(key: &SigningKey<C>, digest: &[u8]) -> Result<Signature> {
    key.sign_prehash(digest)
}

//
// `*Signer` trait impls
//

#[cfg(feature = "signature")]
impl<C: Curve> RandomizedPrehashSigner<Signature> for SigningKey<C> {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(SigningKey::sign_prehash_with_rng(self, rng, prehash)?)
    }
}

#[cfg(all(feature = "signature", feature = "getrandom"))]
impl<C: Curve> signature::hazmat::PrehashSigner<Signature> for SigningKey<C> {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        Ok(SigningKey::sign_prehash(self, prehash)?)
    }
}

//
// Other trait impls
//

impl<C: Debug> Debug for SigningKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

//! Support for verifying ECDSA signatures.
//!
//! ## Algorithm
//!
//! ```text
//! 1: verify whether r, s in [1, n-1], verification failed if not
//! 2: calculate e from the leftmost bitlen(n) bits of the digest
//! 3: calculate w = s⁻¹ mod n
//! 4: calculate u1 = ew mod n and u2 = rw mod n
//! 5: calculate the point (x1, y1) = u1×G + u2×Q, verification failed if it's the identity
//! 6: verification pass if r = x1 mod n, otherwise failed
//! ```

use super::Signature;
use crate::hazmat::bits2int;
use num_traits::Zero;
use weierstrass::{AffinePoint, Curve};

/// ECDSA public key used for verifying signatures are valid for a given
/// message digest.
///
/// The public point isn't validated: it's the caller's responsibility to
/// check that it lies on the curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<C> {
    /// Curve arithmetic.
    curve: C,

    /// Public point `Q`.
    public_point: AffinePoint,
}

impl<C> VerifyingKey<C>
where
    C: Curve,
{
    /// Create a verifying key from a curve and a public point.
    pub fn new(curve: C, public_point: AffinePoint) -> Self {
        Self {
            curve,
            public_point,
        }
    }

    /// Borrow the curve this key is for.
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Borrow the public point for this key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.public_point
    }

    /// Verify a signature over the given message digest.
    ///
    /// Returns `false` for any signature which doesn't verify, including
    /// ones with components outside `[1, n)`.
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> bool {
        let n = self.curve.order();
        let (r, s) = (signature.r(), signature.s());

        // 1: verify whether r, s in [1, n-1]
        if r.is_zero() || s.is_zero() || r >= n || s >= n {
            return false;
        }

        // 2: calculate e from the leftmost bitlen(n) bits of the digest
        let e = bits2int(prehash, n);

        // 3: calculate w = s⁻¹ mod n
        let Some(w) = s.modinv(n) else {
            return false;
        };

        // 4: calculate u1 = ew mod n and u2 = rw mod n
        let u1 = (e * &w) % n;
        let u2 = (r * &w) % n;

        // 5: calculate the point (x1, y1) = u1×G + u2×Q
        let point = self.curve.add(
            &self.curve.scalar_base_mul(&u1.to_bytes_be()),
            &self.curve.scalar_mul(&self.public_point, &u2.to_bytes_be()),
        );

        if point.is_identity() {
            return false;
        }

        // 6: verification pass if r = x1 mod n
        point.x() % n == *r
    }
}

/// Verify `signature` over a message digest with `key`.
pub fn verify<C: Curve>(key: &VerifyingKey<C>, digest: &[u8], signature: &Signature) -> bool {
    key.verify_prehash(digest, signature)
}

//
// `*Verifier` trait impls
//

#[cfg(feature = "signature")]
impl<C: Curve> signature::hazmat::PrehashVerifier<Signature> for VerifyingKey<C> {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if VerifyingKey::verify_prehash(self, prehash, signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl<C> AsRef<AffinePoint> for VerifyingKey<C> {
    fn as_ref(&self) -> &AffinePoint {
        &self.public_point
    }
}

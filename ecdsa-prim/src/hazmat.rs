//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces intended to be
//! consumed by a higher-level ECDSA implementation.
//!
//! If you are an end user / non-expert in cryptography, do not use these!
//! Failure to use them correctly can lead to catastrophic failures including
//! FULL PRIVATE KEY RECOVERY!

use crate::{Error, Result, Signature};
use num_bigint::BigUint;
use num_traits::Zero;
use weierstrass::Curve;

/// Convert a message digest to an integer as described in
/// [RFC6979 § 2.3.2]: take its leftmost `bitlen(n)` bits, interpreted as a
/// big endian integer.
///
/// The result is not reduced modulo `n`. An empty digest maps to zero.
///
/// [RFC6979 § 2.3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-2.3.2
pub fn bits2int(digest: &[u8], order: &BigUint) -> BigUint {
    let order_bits = order.bits();
    let max_len = usize::try_from(order_bits.div_ceil(8)).unwrap_or(usize::MAX);
    let digest = &digest[..digest.len().min(max_len)];

    let excess = (digest.len() as u64 * 8).saturating_sub(order_bits);
    BigUint::from_bytes_be(digest) >> excess
}

/// Try to sign the given prehashed message using ECDSA.
///
/// Accepts the following arguments:
///
/// - `curve`: curve arithmetic
/// - `secret_scalar`: signing key `d`
/// - `ephemeral_scalar`: ECDSA `k` value (MUST BE UNIFORMLY RANDOM!!!)
/// - `prehash`: prehashed message to be signed
///
/// Returns [`Error::InvalidNonce`] if `k` isn't invertible modulo `n` or
/// results in `r = 0` or `s = 0`, in which case the caller must retry with a
/// fresh `k`. Never reuse `k` with a different message.
pub fn sign_prehashed<C>(
    curve: &C,
    secret_scalar: &BigUint,
    ephemeral_scalar: &BigUint,
    prehash: &[u8],
) -> Result<Signature>
where
    C: Curve + ?Sized,
{
    let order = curve.order();
    if order.bits() < 2 {
        return Err(Error::InvalidCurve);
    }

    // calculate `k⁻¹`
    let k = ephemeral_scalar % order;
    let k_inv = k.modinv(order).ok_or(Error::InvalidNonce)?;

    // calculate `r`, the x-coordinate of `k×G` reduced modulo `n`
    let r = curve.scalar_base_mul(&k.to_bytes_be()).x() % order;
    if r.is_zero() {
        return Err(Error::InvalidNonce);
    }

    // the message as an integer
    let e = bits2int(prehash, order);

    // calculate `s = k⁻¹(e + rd)`
    let s = ((&r * secret_scalar + e) * k_inv) % order;
    if s.is_zero() {
        return Err(Error::InvalidNonce);
    }

    Ok(Signature::from_rs(r, s))
}

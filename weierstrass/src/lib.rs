#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod affine;
mod named;
mod params;

#[cfg(feature = "arithmetic")]
mod arithmetic;

pub use crate::{affine::AffinePoint, params::CurveParams};
pub use num_bigint::{self, BigUint};

#[cfg(feature = "arithmetic")]
pub use {crate::arithmetic::Arithmetic, elliptic_curve};

/// Arithmetic capability of an elliptic curve group of prime order `n`.
///
/// This is the only surface signature algorithms need from a curve: the
/// group order, the bit size used to size random scalars, multiplication of
/// the base point or an arbitrary point by a scalar, and point addition.
///
/// Scalars are passed as big endian byte strings of any length. Points use
/// the [`AffinePoint`] representation, in which the point at infinity is
/// `(0, 0)`.
pub trait Curve {
    /// Order `n` of the curve's base point.
    fn order(&self) -> &BigUint;

    /// Size of the curve in bits.
    fn bit_size(&self) -> usize;

    /// Compute `k×G` where `G` is the base point.
    fn scalar_base_mul(&self, k: &[u8]) -> AffinePoint;

    /// Compute `k×P`.
    fn scalar_mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint;

    /// Compute `P + Q`.
    fn add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint;
}

impl<C: Curve + ?Sized> Curve for &C {
    fn order(&self) -> &BigUint {
        C::order(self)
    }

    fn bit_size(&self) -> usize {
        C::bit_size(self)
    }

    fn scalar_base_mul(&self, k: &[u8]) -> AffinePoint {
        C::scalar_base_mul(self, k)
    }

    fn scalar_mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        C::scalar_mul(self, point, k)
    }

    fn add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        C::add(self, p, q)
    }
}

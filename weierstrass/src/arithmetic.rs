//! Adapter for curves implemented with the [`elliptic_curve`] traits.

use crate::{AffinePoint, Curve};
use core::{fmt, marker::PhantomData};
use elliptic_curve::{
    CurveArithmetic, FieldBytes, FieldBytesEncoding, FieldBytesSize, ProjectivePoint, Scalar,
    generic_array::typenum::Unsigned,
    group::{Curve as _, Group},
    ops::Reduce,
    sec1::{Coordinates, EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
};
use num_bigint::BigUint;

/// Exposes the arithmetic of an [`elliptic_curve::CurveArithmetic`] curve
/// (e.g. `p256::NistP256` or `k256::Secp256k1`) through [`Curve`].
///
/// Scalars are reduced modulo the curve order. Points which don't decode to
/// a point on `C` are treated as the identity: validating public keys is the
/// job of whoever loads them.
pub struct Arithmetic<C> {
    /// Order of the curve's base point.
    order: BigUint,

    curve: PhantomData<C>,
}

impl<C> Arithmetic<C>
where
    C: CurveArithmetic,
{
    /// Create a new adapter for the curve `C`.
    pub fn new() -> Self {
        let order = FieldBytesEncoding::<C>::encode_field_bytes(&C::ORDER);

        Self {
            order: BigUint::from_bytes_be(&order),
            curve: PhantomData,
        }
    }
}

impl<C> Arithmetic<C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    /// Reduce a big endian integer to a scalar of `C`.
    fn scalar(&self, k: &[u8]) -> Scalar<C> {
        let k = BigUint::from_bytes_be(k) % &self.order;
        let repr = field_bytes::<C>(&k).unwrap_or_default();
        <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&repr)
    }

    /// Decode an [`AffinePoint`] as a point on `C`.
    fn point(&self, point: &AffinePoint) -> ProjectivePoint<C> {
        if point.is_identity() {
            return ProjectivePoint::<C>::identity();
        }

        let (Some(x), Some(y)) = (field_bytes::<C>(point.x()), field_bytes::<C>(point.y())) else {
            return ProjectivePoint::<C>::identity();
        };

        let encoded = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);
        Option::<C::AffinePoint>::from(C::AffinePoint::from_encoded_point(&encoded))
            .map_or_else(ProjectivePoint::<C>::identity, Into::into)
    }

    /// Encode a point on `C` as an [`AffinePoint`].
    fn lift(point: ProjectivePoint<C>) -> AffinePoint {
        match point.to_affine().to_encoded_point(false).coordinates() {
            Coordinates::Uncompressed { x, y } => {
                AffinePoint::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
            }
            _ => AffinePoint::identity(),
        }
    }
}

impl<C> Curve for Arithmetic<C>
where
    C: CurveArithmetic,
    C::AffinePoint: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    fn order(&self) -> &BigUint {
        &self.order
    }

    fn bit_size(&self) -> usize {
        usize::try_from(self.order.bits()).unwrap_or(usize::MAX)
    }

    fn scalar_base_mul(&self, k: &[u8]) -> AffinePoint {
        Self::lift(ProjectivePoint::<C>::generator() * self.scalar(k))
    }

    fn scalar_mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        Self::lift(self.point(point) * self.scalar(k))
    }

    fn add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        Self::lift(self.point(p) + self.point(q))
    }
}

impl<C> Clone for Arithmetic<C> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            curve: PhantomData,
        }
    }
}

impl<C> Default for Arithmetic<C>
where
    C: CurveArithmetic,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Arithmetic<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arithmetic")
            .field("curve", &core::any::type_name::<C>())
            .field("order", &format_args!("{:x}", self.order))
            .finish()
    }
}

/// Serialize an integer as left-padded big endian [`FieldBytes`], or `None`
/// if it's too large to fit.
fn field_bytes<C: CurveArithmetic>(value: &BigUint) -> Option<FieldBytes<C>> {
    let bytes = value.to_bytes_be();
    let mut repr = FieldBytes::<C>::default();
    let offset = FieldBytesSize::<C>::USIZE.checked_sub(bytes.len())?;
    repr[offset..].copy_from_slice(&bytes);
    Some(repr)
}

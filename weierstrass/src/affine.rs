//! Affine curve points.

use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::Zero;

/// Point on a Weierstrass curve in affine coordinates.
///
/// Coordinates are arbitrary-precision integers. The additive identity
/// (a.k.a. the point at infinity) is represented as `(0, 0)`, so curves on
/// which `(0, 0)` is a genuine point (`b = 0`) can't be described with this
/// type.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct AffinePoint {
    /// x-coordinate
    x: BigUint,

    /// y-coordinate
    y: BigUint,
}

impl AffinePoint {
    /// Create a point from its affine coordinates.
    ///
    /// No check is made that the point lies on any particular curve.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Get the x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Get the y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Split this point into its `(x, y)` coordinates.
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("AffinePoint(identity)");
        }

        write!(f, "AffinePoint({:x}, {:x})", self.x, self.y)
    }
}

impl From<(BigUint, BigUint)> for AffinePoint {
    fn from((x, y): (BigUint, BigUint)) -> AffinePoint {
        AffinePoint::new(x, y)
    }
}

impl From<AffinePoint> for (BigUint, BigUint) {
    fn from(point: AffinePoint) -> (BigUint, BigUint) {
        point.into_coordinates()
    }
}

//! Generic affine arithmetic for short Weierstrass curves over prime fields.
//!
//! # ⚠️ Warning
//!
//! This arithmetic is variable-time. It's intended for working with public
//! values, for curves which have no dedicated implementation, and for tests.

use crate::{AffinePoint, Curve};
use num_bigint::BigUint;
use num_traits::Zero;

/// Domain parameters of an elliptic curve in short Weierstrass form:
///
/// ```text
/// y² = x³ + ax + b (mod p)
/// ```
///
/// together with a base point `G` of prime order `n`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Field modulus.
    p: BigUint,

    /// Coefficient `a` in the curve equation, reduced modulo `p`.
    a: BigUint,

    /// Coefficient `b` in the curve equation, reduced modulo `p`.
    b: BigUint,

    /// Order of the base point.
    n: BigUint,

    /// Base point.
    generator: AffinePoint,

    /// Size of the curve in bits.
    bit_size: usize,
}

impl CurveParams {
    /// Create curve parameters from the field modulus `p`, the equation
    /// coefficients `a` and `b`, the order `n` of the base point, the base
    /// point's affine coordinates, and the curve's size in bits.
    ///
    /// The parameters are taken as given: no check is made that `p` or `n`
    /// are prime, or that the base point is on the curve. A zero `p` is
    /// treated as a field in which every coordinate is `0`.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        n: BigUint,
        generator: (BigUint, BigUint),
        bit_size: usize,
    ) -> Self {
        let (a, b) = if p.is_zero() {
            (BigUint::zero(), BigUint::zero())
        } else {
            (a % &p, b % &p)
        };

        Self {
            p,
            a,
            b,
            n,
            generator: generator.into(),
            bit_size,
        }
    }

    /// Field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Does the given point satisfy the curve equation?
    ///
    /// The identity is considered to be on every curve.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        if point.is_identity() {
            return true;
        }

        if self.p.is_zero() || point.x() >= &self.p || point.y() >= &self.p {
            return false;
        }

        let (x, y) = (point.x(), point.y());
        let lhs = (y * y) % &self.p;
        let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
        lhs == rhs
    }

    /// Compute `2P`.
    pub fn double(&self, point: &AffinePoint) -> AffinePoint {
        if self.p.is_zero() || point.is_identity() || point.y().is_zero() {
            return AffinePoint::identity();
        }

        let (x, y) = (point.x(), point.y());

        // λ = (3x² + a) / 2y
        let numerator = (BigUint::from(3u8) * x * x + &self.a) % &self.p;
        let Some(denominator) = self.invert(&(y << 1usize)) else {
            return AffinePoint::identity();
        };
        let lambda = (numerator * denominator) % &self.p;

        self.chord(&lambda, x, x, y)
    }

    /// Compute `P + Q` where `P ≠ ±Q`, given the slope `λ` of the line
    /// through them: `x₃ = λ² - x₁ - x₂`, `y₃ = λ(x₁ - x₃) - y₁`.
    fn chord(&self, lambda: &BigUint, x1: &BigUint, x2: &BigUint, y1: &BigUint) -> AffinePoint {
        let x3 = self.sub(&self.sub(&((lambda * lambda) % &self.p), x1), x2);
        let y3 = self.sub(&((lambda * self.sub(x1, &x3)) % &self.p), y1);
        AffinePoint::new(x3, y3)
    }

    /// Compute `a - b (mod p)`.
    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.p - (b % &self.p)) % &self.p
    }

    /// Invert a field element, returning `None` if it has no inverse.
    fn invert(&self, value: &BigUint) -> Option<BigUint> {
        (value % &self.p).modinv(&self.p)
    }

    /// Multiply `point` by the big endian scalar `k` using double-and-add.
    fn mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        let mut acc = AffinePoint::identity();

        for byte in k {
            for i in (0..8).rev() {
                acc = self.double(&acc);

                if (byte >> i) & 1 == 1 {
                    acc = Curve::add(self, &acc, point);
                }
            }
        }

        acc
    }
}

impl Curve for CurveParams {
    fn order(&self) -> &BigUint {
        &self.n
    }

    fn bit_size(&self) -> usize {
        self.bit_size
    }

    fn scalar_base_mul(&self, k: &[u8]) -> AffinePoint {
        self.mul(&self.generator, k)
    }

    fn scalar_mul(&self, point: &AffinePoint, k: &[u8]) -> AffinePoint {
        self.mul(point, k)
    }

    fn add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        if self.p.is_zero() {
            return AffinePoint::identity();
        }

        if p.is_identity() {
            return q.clone();
        }

        if q.is_identity() {
            return p.clone();
        }

        if p.x() == q.x() {
            // P = -Q
            if p.y() != q.y() || p.y().is_zero() {
                return AffinePoint::identity();
            }

            return self.double(p);
        }

        // λ = (y₂ - y₁) / (x₂ - x₁)
        let Some(denominator) = self.invert(&self.sub(q.x(), p.x())) else {
            return AffinePoint::identity();
        };
        let lambda = (self.sub(q.y(), p.y()) * denominator) % &self.p;

        self.chord(&lambda, p.x(), q.x(), p.y())
    }
}

#[cfg(test)]
mod tests {
    use super::CurveParams;
    use crate::{AffinePoint, Curve};
    use num_bigint::BigUint;

    /// `y² = x³ + 2x + 2` over GF(17), generated by `(5, 1)` of order 19.
    fn tiny_curve() -> CurveParams {
        CurveParams::new(
            17u8.into(),
            2u8.into(),
            2u8.into(),
            19u8.into(),
            (5u8.into(), 1u8.into()),
            5,
        )
    }

    fn point(x: u8, y: u8) -> AffinePoint {
        AffinePoint::new(BigUint::from(x), BigUint::from(y))
    }

    #[test]
    fn generator_is_on_curve() {
        let curve = tiny_curve();
        assert!(curve.is_on_curve(curve.generator()));
        assert!(!curve.is_on_curve(&point(5, 2)));
        assert!(!curve.is_on_curve(&point(22, 1)));
    }

    #[test]
    fn double_generator() {
        let curve = tiny_curve();
        assert_eq!(curve.double(curve.generator()), point(6, 3));
        assert_eq!(curve.scalar_base_mul(&[2]), point(6, 3));
    }

    #[test]
    fn multiples_of_generator() {
        let curve = tiny_curve();
        let expected = [
            (5, 1),
            (6, 3),
            (10, 6),
            (3, 1),
            (9, 16),
            (16, 13),
            (0, 6),
            (13, 7),
            (7, 6),
            (7, 11),
            (13, 10),
            (0, 11),
            (16, 4),
            (9, 1),
            (3, 16),
            (10, 11),
            (6, 14),
            (5, 16),
        ];

        let mut acc = AffinePoint::identity();
        for (i, &(x, y)) in expected.iter().enumerate() {
            acc = curve.add(&acc, curve.generator());
            assert_eq!(acc, point(x, y), "{}×G", i + 1);
            assert_eq!(curve.scalar_base_mul(&[i as u8 + 1]), acc);
        }

        assert!(curve.add(&acc, curve.generator()).is_identity());
    }

    #[test]
    fn order_times_generator_is_identity() {
        let curve = tiny_curve();
        assert!(curve.scalar_base_mul(&[19]).is_identity());
        assert!(curve.scalar_base_mul(&[0, 0, 38]).is_identity());
        assert!(curve.scalar_base_mul(&[]).is_identity());
        assert!(curve.scalar_base_mul(&[0]).is_identity());
    }

    #[test]
    fn add_inverse_is_identity() {
        let curve = tiny_curve();
        assert!(curve.add(&point(5, 1), &point(5, 16)).is_identity());
    }

    #[test]
    fn identity_is_neutral() {
        let curve = tiny_curve();
        let p = point(9, 16);
        assert_eq!(curve.add(&p, &AffinePoint::identity()), p);
        assert_eq!(curve.add(&AffinePoint::identity(), &p), p);
        assert!(curve.scalar_mul(&AffinePoint::identity(), &[7]).is_identity());
    }

    #[test]
    fn scalar_mul_matches_base_mul() {
        let curve = tiny_curve();
        let q = curve.scalar_base_mul(&[3]);
        assert_eq!(curve.scalar_mul(&q, &[5]), curve.scalar_base_mul(&[15]));
    }

    #[test]
    fn zero_modulus_yields_identity() {
        let curve = CurveParams::new(
            BigUint::default(),
            1u8.into(),
            1u8.into(),
            BigUint::default(),
            (1u8.into(), 1u8.into()),
            0,
        );
        assert!(curve.scalar_base_mul(&[2]).is_identity());
        assert!(!curve.is_on_curve(curve.generator()));
    }
}

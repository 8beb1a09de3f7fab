use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;

use super::curve::Curve;
use crate::error::{Error, Result};
use crate::field::FieldElement;

/// Coordinates of a point, with the identity as its own variant
#[derive(Clone)]
enum Coordinates {
    /// The point at infinity; carries no coordinates
    Infinity,
    /// Jacobian triple with Z ≠ 0
    Jacobian {
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
    },
}

/// A point on a [`Curve`] in Jacobian coordinates
///
/// Points are immutable values. Every operation returns a new point and
/// leaves its operands untouched.
#[derive(Clone)]
pub struct Point {
    curve: Curve,
    coords: Coordinates,
}

/// Affine coordinates of a finite point
#[derive(Clone, PartialEq, Eq)]
pub struct AffinePoint {
    x: FieldElement,
    y: FieldElement,
}

impl Point {
    /// The identity element of `curve`
    pub fn infinity(curve: &Curve) -> Self {
        Self {
            curve: curve.clone(),
            coords: Coordinates::Infinity,
        }
    }

    /// Create a point from affine coordinates, validating that it lies on the curve
    pub fn from_affine(curve: &Curve, x: &BigUint, y: &BigUint) -> Result<Self> {
        if !curve.contains(x, y) {
            return Err(Error::point("from_affine", "coordinates are not on the curve"));
        }
        let field = curve.field();
        Ok(Self::from_trusted_affine(
            curve.clone(),
            field.element(x.clone()),
            field.element(y.clone()),
        ))
    }

    /// Create a point from Jacobian coordinates, validating Z ≠ 0 and
    /// Y² = X³ + aXZ⁴ + bZ⁶
    pub fn from_jacobian(curve: &Curve, x: &BigUint, y: &BigUint, z: &BigUint) -> Result<Self> {
        let field = curve.field();
        let (x, y, z) = (
            field.element(x.clone()),
            field.element(y.clone()),
            field.element(z.clone()),
        );
        if z.is_zero() {
            return Err(Error::point("from_jacobian", "Z coordinate is zero"));
        }
        let point = Self {
            curve: curve.clone(),
            coords: Coordinates::Jacobian { x, y, z },
        };
        if !point.is_on_curve() {
            return Err(Error::point("from_jacobian", "coordinates are not on the curve"));
        }
        Ok(point)
    }

    pub(super) fn from_trusted_affine(curve: Curve, x: FieldElement, y: FieldElement) -> Self {
        let z = curve.field().one();
        Self {
            curve,
            coords: Coordinates::Jacobian { x, y, z },
        }
    }

    fn jacobian_unchecked(&self, x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        debug_assert!(!z.is_zero(), "group law produced Z = 0");
        Self {
            curve: self.curve.clone(),
            coords: Coordinates::Jacobian { x, y, z },
        }
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Check if this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self.coords, Coordinates::Infinity)
    }

    /// The Jacobian triple, or `None` for the identity
    pub fn jacobian(&self) -> Option<(&FieldElement, &FieldElement, &FieldElement)> {
        match &self.coords {
            Coordinates::Infinity => None,
            Coordinates::Jacobian { x, y, z } => Some((x, y, z)),
        }
    }

    /// Whether the point satisfies the curve equation; the identity always does
    pub fn is_on_curve(&self) -> bool {
        let (x, y, z) = match &self.coords {
            Coordinates::Infinity => return true,
            Coordinates::Jacobian { x, y, z } => (x, y, z),
        };
        let z2 = z.square();
        let z4 = z2.square();
        let z6 = z4.mul(&z2);
        let rhs = x
            .square()
            .mul(x)
            .add(&self.curve.a().mul(x).mul(&z4))
            .add(&self.curve.b().mul(&z6));
        y.square() == rhs
    }

    /// Point addition following the Jacobian chord rule
    ///
    /// Both points must be on the same curve; use [`Point::checked_add`]
    /// when that is not known statically.
    pub fn add(&self, other: &Point) -> Point {
        debug_assert!(self.curve == other.curve, "points on different curves");

        let (x1, y1, z1) = match &self.coords {
            Coordinates::Infinity => return other.clone(),
            Coordinates::Jacobian { x, y, z } => (x, y, z),
        };
        let (x2, y2, z2) = match &other.coords {
            Coordinates::Infinity => return self.clone(),
            Coordinates::Jacobian { x, y, z } => (x, y, z),
        };

        let z1z1 = z1.square();
        let z2z2 = z2.square();
        let u1 = x1.mul(&z2z2);
        let u2 = x2.mul(&z1z1);
        let s1 = y1.mul(z2).mul(&z2z2);
        let s2 = y2.mul(z1).mul(&z1z1);

        if u1 == u2 {
            if s1 != s2 {
                // P2 = -P1
                return self.curve.infinity();
            }
            return self.double();
        }

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);
        let h2 = h.square();
        let h3 = h2.mul(&h);
        let u1h2 = u1.mul(&h2);

        let x3 = r.square().sub(&h3).sub(&u1h2.double());
        let y3 = r.mul(&u1h2.sub(&x3)).sub(&s1.mul(&h3));
        let z3 = h.mul(z1).mul(z2);

        self.jacobian_unchecked(x3, y3, z3)
    }

    /// Point addition that reports operands from different curves
    pub fn checked_add(&self, other: &Point) -> Result<Point> {
        if self.curve != other.curve {
            return Err(Error::TypeMismatch {
                context: "point addition",
                expected: format!("a point on {}", self.curve.name()).into(),
            });
        }
        Ok(self.add(other))
    }

    /// Point doubling for a general coefficient a
    pub fn double(&self) -> Point {
        let (x, y, z) = match &self.coords {
            Coordinates::Infinity => return self.clone(),
            Coordinates::Jacobian { x, y, z } => (x, y, z),
        };
        // 2-torsion point
        if y.is_zero() {
            return self.curve.infinity();
        }

        let y2 = y.square();
        let s = x.mul(&y2).mul_u64(4);
        let z4 = z.square().square();
        let m = x.square().mul_u64(3).add(&self.curve.a().mul(&z4));

        let x3 = m.square().sub(&s.double());
        let y3 = m.mul(&s.sub(&x3)).sub(&y2.square().mul_u64(8));
        let z3 = y.mul(z).double();

        self.jacobian_unchecked(x3, y3, z3)
    }

    /// Additive inverse (X, -Y, Z)
    pub fn neg(&self) -> Point {
        match &self.coords {
            Coordinates::Infinity => self.clone(),
            Coordinates::Jacobian { x, y, z } => self.jacobian_unchecked(x.clone(), y.neg(), z.clone()),
        }
    }

    /// self - other
    pub fn sub(&self, other: &Point) -> Point {
        self.add(&other.neg())
    }

    /// Scalar multiplication k·P by right-to-left double-and-add
    ///
    /// # Security Note
    ///
    /// The sequence of additions depends on the bits of `k`, so the running
    /// time leaks the scalar. Do not use with secrets where an attacker can
    /// measure timing.
    pub fn mul(&self, k: &BigUint) -> Point {
        let mut result = self.curve.infinity();
        if self.is_infinity() {
            return result;
        }

        let mut addend = self.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&addend);
            }
            addend = addend.double();
        }
        result
    }

    /// Scalar multiplication by a machine integer
    pub fn mul_u64(&self, k: u64) -> Point {
        self.mul(&BigUint::from(k))
    }

    /// Convert to affine coordinates (x = X/Z², y = Y/Z³)
    pub fn to_affine(&self) -> Result<AffinePoint> {
        let (x, y, z) = match &self.coords {
            Coordinates::Infinity => {
                return Err(Error::point("to_affine", "point at infinity has no affine form"))
            }
            Coordinates::Jacobian { x, y, z } => (x, y, z),
        };
        let z2 = z.square();
        let z3 = z2.mul(z);
        Ok(AffinePoint {
            x: x.div(&z2)?,
            y: y.div(&z3)?,
        })
    }
}

impl PartialEq for Point {
    /// Projective comparison: u1 = X1·Z2², u2 = X2·Z1², s1 = Y1·Z2³,
    /// s2 = Y2·Z1³, equal iff u1 = u2 and s1 = s2
    fn eq(&self, other: &Self) -> bool {
        if self.curve != other.curve {
            return false;
        }
        match (&self.coords, &other.coords) {
            (Coordinates::Infinity, Coordinates::Infinity) => true,
            (Coordinates::Infinity, _) | (_, Coordinates::Infinity) => false,
            (
                Coordinates::Jacobian {
                    x: x1,
                    y: y1,
                    z: z1,
                },
                Coordinates::Jacobian {
                    x: x2,
                    y: y2,
                    z: z2,
                },
            ) => {
                let z1z1 = z1.square();
                let z2z2 = z2.square();
                x1.mul(&z2z2) == x2.mul(&z1z1)
                    && y1.mul(z2).mul(&z2z2) == y2.mul(z1).mul(&z1z1)
            }
        }
    }
}

impl Eq for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_affine() {
            Ok(affine) => write!(f, "Point({}, {:?})", self.curve.name(), affine),
            Err(_) => write!(f, "Point({}, Infinity)", self.curve.name()),
        }
    }
}

impl AffinePoint {
    /// x-coordinate
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// y-coordinate
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// x-coordinate as fixed-width big-endian bytes
    pub fn x_bytes(&self) -> Vec<u8> {
        self.x.to_bytes_fixed()
    }

    /// y-coordinate as fixed-width big-endian bytes
    pub fn y_bytes(&self) -> Vec<u8> {
        self.y.to_bytes_fixed()
    }

    /// Lift back to a [`Point`] on `curve`, validating the coordinates
    pub fn to_point(&self, curve: &Curve) -> Result<Point> {
        Point::from_affine(curve, self.x.value(), self.y.value())
    }
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(0x{:x}, 0x{:x})", self.x.value(), self.y.value())
    }
}

impl<'a> Add<&'a Point> for &'a Point {
    type Output = Point;

    fn add(self, rhs: &'a Point) -> Point {
        Point::add(self, rhs)
    }
}

impl<'a> Sub<&'a Point> for &'a Point {
    type Output = Point;

    fn sub(self, rhs: &'a Point) -> Point {
        Point::sub(self, rhs)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::neg(self)
    }
}

impl Mul<&BigUint> for &Point {
    type Output = Point;

    fn mul(self, k: &BigUint) -> Point {
        Point::mul(self, k)
    }
}

impl Mul<u64> for &Point {
    type Output = Point;

    fn mul(self, k: u64) -> Point {
        self.mul_u64(k)
    }
}

impl Mul<&Point> for u64 {
    type Output = Point;

    fn mul(self, point: &Point) -> Point {
        point.mul_u64(self)
    }
}

impl Mul<Point> for u64 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point.mul_u64(self)
    }
}

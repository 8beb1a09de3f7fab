use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{parse_hex, FieldElement, PrimeField};
use jcurve_params::CurveConstants;

/// Domain parameters (p, a, b, G, n) with every value reduced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Field prime
    pub p: BigUint,
    /// Coefficient a, as its representative in [0, p)
    pub a: BigUint,
    /// Coefficient b, as its representative in [0, p)
    pub b: BigUint,
    /// Base point x-coordinate
    pub g_x: BigUint,
    /// Base point y-coordinate
    pub g_y: BigUint,
    /// Order of the base point
    pub n: BigUint,
}

struct CurveInner {
    name: String,
    params: CurveParams,
    field: PrimeField,
    scalar_field: PrimeField,
    a: FieldElement,
    b: FieldElement,
    g_x: FieldElement,
    g_y: FieldElement,
}

/// A validated curve shared by reference among all of its points
///
/// Cloning a `Curve` clones a handle; the parameters are never copied or
/// mutated after construction.
#[derive(Clone)]
pub struct Curve {
    inner: Arc<CurveInner>,
}

impl Curve {
    /// Build a curve from raw domain parameters
    ///
    /// Rejects `p <= 3`, `n <= 1`, a singular curve (`4a³ + 27b² ≡ 0`), and a
    /// base point that is not a canonical point on the curve. Neither `p` nor
    /// `n` is tested for primality.
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigInt,
        b: BigInt,
        generator: (BigUint, BigUint),
        n: BigUint,
    ) -> Result<Self> {
        validate::parameter(p > BigUint::from(3u32), "p", "field prime must exceed 3")?;
        validate::parameter(n > BigUint::one(), "n", "group order must exceed 1")?;

        let field = PrimeField::new(p.clone())?;
        let scalar_field = PrimeField::new(n.clone())?;
        let a = field.element_from_signed(&a);
        let b = field.element_from_signed(&b);

        // 4a³ + 27b²
        let discriminant = a.square().mul(&a).mul_u64(4).add(&b.square().mul_u64(27));
        if discriminant.is_zero() {
            return Err(Error::param("a, b", "curve is singular"));
        }

        let (g_x, g_y) = generator;
        validate::parameter(g_x < p && g_y < p, "G", "coordinates must be below p")?;
        let g_x = field.element(g_x);
        let g_y = field.element(g_y);
        if !affine_equation_holds(&a, &b, &g_x, &g_y) {
            return Err(Error::param("G", "base point is not on the curve"));
        }

        let params = CurveParams {
            p,
            a: a.value().clone(),
            b: b.value().clone(),
            g_x: g_x.value().clone(),
            g_y: g_y.value().clone(),
            n,
        };

        Ok(Self {
            inner: Arc::new(CurveInner {
                name: name.into(),
                params,
                field,
                scalar_field,
                a,
                b,
                g_x,
                g_y,
            }),
        })
    }

    /// Build a curve from published hexadecimal constants
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        Self::new(
            constants.name,
            parse_hex("p", constants.p)?,
            BigInt::from(parse_hex("a", constants.a)?),
            BigInt::from(parse_hex("b", constants.b)?),
            (parse_hex("g_x", constants.g_x)?, parse_hex("g_y", constants.g_y)?),
            parse_hex("n", constants.n)?,
        )
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The reduced domain parameters
    pub fn params(&self) -> &CurveParams {
        &self.inner.params
    }

    /// Coordinate field F_p
    pub fn field(&self) -> &PrimeField {
        &self.inner.field
    }

    /// Scalar field Z_n
    pub fn scalar_field(&self) -> &PrimeField {
        &self.inner.scalar_field
    }

    /// Coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.inner.a
    }

    /// Coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.inner.b
    }

    /// Field prime p
    pub fn p(&self) -> &BigUint {
        &self.inner.params.p
    }

    /// Base point order n
    pub fn n(&self) -> &BigUint {
        &self.inner.params.n
    }

    /// Bit length of n
    pub fn order_bits(&self) -> u64 {
        self.inner.params.n.bits()
    }

    /// Fixed width of an encoded coordinate
    pub fn coordinate_len(&self) -> usize {
        self.inner.field.byte_len()
    }

    /// Fixed width of an encoded scalar
    pub fn scalar_len(&self) -> usize {
        self.inner.scalar_field.byte_len()
    }

    /// The base point G
    pub fn generator(&self) -> Point {
        Point::from_trusted_affine(self.clone(), self.inner.g_x.clone(), self.inner.g_y.clone())
    }

    /// The group identity
    pub fn infinity(&self) -> Point {
        Point::infinity(self)
    }

    /// Whether the affine pair (x, y) satisfies the curve equation
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= self.p() || y >= self.p() {
            return false;
        }
        let field = self.field();
        affine_equation_holds(self.a(), self.b(), &field.element(x.clone()), &field.element(y.clone()))
    }

    /// Validated affine point on this curve
    pub fn point(&self, x: &BigUint, y: &BigUint) -> Result<Point> {
        Point::from_affine(self, x, y)
    }

    /// Whether two handles refer to the same allocation
    pub(crate) fn same_handle(&self, other: &Curve) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

fn affine_equation_holds(a: &FieldElement, b: &FieldElement, x: &FieldElement, y: &FieldElement) -> bool {
    let rhs = x.square().mul(x).add(&a.mul(x)).add(b);
    y.square() == rhs
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.same_handle(other) || self.inner.params == other.inner.params
    }
}

impl Eq for Curve {}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.inner.name)
            .field("p", &format_args!("0x{:x}", self.inner.params.p))
            .field("n", &format_args!("0x{:x}", self.inner.params.n))
            .finish()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

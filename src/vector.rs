// src/vector.rs
//! N-dimensional Euclidean vector type and operations.

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};
use std::slice;

use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VectorError};

/// Absolute per-component tolerance used by [`Vector::approx_eq`].
pub const COMPONENT_TOLERANCE: f64 = 1e-6;

/// Absolute tolerance around 1.0 used by [`Vector::is_unit`].
pub const UNIT_TOLERANCE: f64 = 1e-7;

/// An n-dimensional Euclidean vector with `f64` components.
///
/// A `Vector` owns its component sequence; the length is fixed at
/// construction and any length (including zero) is valid. The type is
/// immutable: every operation returns a new vector and leaves its operands
/// untouched.
///
/// Operations that require operands of equal length return a [`Result`]. The
/// `+` and `-` operators delegate to [`Vector::checked_add`] and
/// [`Vector::checked_sub`] and panic on a length mismatch, mirroring how the
/// std integer operators relate to their `checked_*` forms.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Create a new `Vector` from its components.
    #[inline(always)]
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Vector of `len` zero components.
    pub fn zeros(len: usize) -> Self {
        Self { components: vec![0.0; len] }
    }

    /// 2-D vector from a magnitude and an angle in radians measured from the
    /// positive x-axis: `(m cos θ, m sin θ)`.
    ///
    /// Errors with `NonPositiveMagnitude` if `magnitude <= 0`.
    pub fn from_polar(magnitude: f64, angle: f64) -> Result<Self> {
        if magnitude <= 0.0 {
            return Err(VectorError::NonPositiveMagnitude { value: magnitude });
        }
        Ok(Self::new(vec![magnitude * angle.cos(), magnitude * angle.sin()]))
    }

    /// Displacement vector from point `p1` to point `p2`, elementwise
    /// `p2 - p1`.
    ///
    /// Errors with `DimensionMismatch` if the points differ in length.
    pub fn from_points(p1: &[f64], p2: &[f64]) -> Result<Self> {
        if p1.len() != p2.len() {
            return Err(VectorError::DimensionMismatch {
                expected: p1.len(),
                found: p2.len(),
            });
        }
        Ok(Self::new(p1.iter().zip(p2).map(|(a, b)| b - a).collect()))
    }

    /// Number of components (the vector's dimension).
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` if the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Read-only view of the components.
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Iterator over the components.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Euclidean magnitude (length) of the vector.
    ///
    /// `0.0` for empty and all-zero vectors.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Sum of the squared components, avoiding the square root.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum()
    }

    /// `true` iff the magnitude lies within [`UNIT_TOLERANCE`] of 1.
    pub fn is_unit(&self) -> bool {
        (self.magnitude() - 1.0).abs() <= UNIT_TOLERANCE
    }

    /// Componentwise approximate equality with absolute tolerance
    /// [`COMPONENT_TOLERANCE`].
    ///
    /// Vectors of different lengths compare unequal; as a comparison rather
    /// than an arithmetic operation, a length mismatch is `false`, not an
    /// error.
    pub fn approx_eq(&self, other: &Vector) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() < COMPONENT_TOLERANCE)
    }

    /// Unit vector in this vector's direction: each component divided by the
    /// magnitude.
    ///
    /// Errors with `ZeroMagnitude` for the zero vector instead of producing
    /// NaN components.
    pub fn unit(&self) -> Result<Vector> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        Ok(Self::new(self.iter().map(|c| c / m).collect()))
    }

    /// Scale the vector by a scalar.
    #[inline]
    pub fn scale(&self, k: f64) -> Vector {
        Self::new(self.iter().map(|c| c * k).collect())
    }

    /// Copy of the vector rescaled to magnitude `k`, direction preserved.
    ///
    /// A negative `k` flips the direction and `k = 0` collapses to the zero
    /// vector. Errors with `ZeroMagnitude` if the current magnitude is zero,
    /// since there is no direction to preserve.
    pub fn with_magnitude(&self, k: f64) -> Result<Vector> {
        Ok(self.unit()?.scale(k))
    }

    /// Elementwise sum of two vectors.
    ///
    /// Errors with `DimensionMismatch` if the lengths differ.
    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Self::new(
            self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Elementwise difference of two vectors.
    ///
    /// Errors with `DimensionMismatch` if the lengths differ.
    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        self.check_len(other)?;
        Ok(Self::new(
            self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        ))
    }

    /// Cross product `self × other`.
    ///
    /// Errors with `DimensionMismatch` unless both operands have exactly 3
    /// components; `self` is checked first.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if self.len() != 3 {
            return Err(VectorError::DimensionMismatch {
                expected: 3,
                found: self.len(),
            });
        }
        if other.len() != 3 {
            return Err(VectorError::DimensionMismatch {
                expected: 3,
                found: other.len(),
            });
        }
        let a = &self.components;
        let b = &other.components;
        Ok(Self::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Vector projection of `other` onto `self`: the unit vector of `self`
    /// scaled by the scalar projection.
    ///
    /// Errors with `DimensionMismatch` if the lengths differ and with
    /// `ZeroMagnitude` if `self` has zero magnitude.
    pub fn projection(&self, other: &Vector) -> Result<Vector> {
        Ok(self.unit()?.scale(self.scalar_projection(other)?))
    }

    /// Dot product of two vectors; `0.0` for empty vectors.
    ///
    /// Errors with `DimensionMismatch` if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_len(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Signed scalar projection of `other` onto `self`:
    /// `self · other / |self|`.
    ///
    /// Errors with `DimensionMismatch` if the lengths differ and with
    /// `ZeroMagnitude` if `self` has zero magnitude; the mismatch is
    /// reported first.
    pub fn scalar_projection(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        let m = self.magnitude();
        if m == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        Ok(dot / m)
    }

    /// Angle between `self` and `other` in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so float drift on
    /// near-parallel vectors cannot produce NaN. Errors with
    /// `DimensionMismatch` if the lengths differ and with `ZeroMagnitude` if
    /// either operand has zero magnitude.
    pub fn angle_to(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        Ok((dot / denominator).clamp(-1.0, 1.0).acos())
    }

    /// Triple scalar product `self · (a × b)`, the signed volume of the
    /// parallelepiped spanned by the three vectors.
    ///
    /// Fails exactly as [`Vector::cross`] and [`Vector::dot`] fail.
    pub fn triple_scalar_product(&self, a: &Vector, b: &Vector) -> Result<f64> {
        self.dot(&a.cross(b)?)
    }

    fn check_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(VectorError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(())
    }
}

// Arithmetic operators. `+` and `-` require equal lengths and panic on
// mismatch; the `checked_*` methods are the error-returning forms.
impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        match self.checked_add(&rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        match self.checked_sub(&rhs) {
            Ok(difference) => difference,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

// Read-only component access; there is deliberately no `IndexMut`.
impl Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(components: Vec<f64>) -> Vector {
        Vector::new(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(components: [f64; N]) -> Vector {
        Vector::new(components.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(v: Vector) -> Vec<f64> {
        v.components
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Vector {
        Vector::new(iter.into_iter().collect())
    }
}

// Display as a parenthesised, comma-joined tuple: `(1, 2.5, -3)`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "(")?;
        for (i, c) in v.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.dec$}", c, dec = dec)?;
        }
        write!(f, ")")
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

// Approximate-comparison traits so `assert_abs_diff_eq!` and friends work on
// vectors. Vectors of different lengths never compare equal.
impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Vector, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Vector, epsilon: f64, max_relative: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Constructs a [`Vector`] from a list of components, `vec!`-style.
///
/// ```
/// use ndvec::{vector, Vector};
///
/// let v = vector![1.0, 2.0, 3.0];
/// assert_eq!(v, Vector::new(vec![1.0, 2.0, 3.0]));
///
/// let zeros = vector![0.0; 4];
/// assert_eq!(zeros, Vector::zeros(4));
///
/// assert!(vector![].is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    ($elem:expr; $n:expr) => {
        $crate::Vector::new(::std::vec![$elem; $n])
    };
    ($($component:expr),* $(,)?) => {
        $crate::Vector::new(::std::vec![$($component),*])
    };
}

//! The dual-mode Euclidean vector type
//!
//! A [`Vector`] carries three components but serves both 2D and 3D
//! geometry: a vector whose `z` component is zero behaves as a plane
//! vector and additionally exposes its polar angle, while a vector with
//! nonzero `z` is a full 3D vector for which angle access is an error.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use rand::Rng;

use crate::error::{Result, VectorError};

/// Relative tolerance used by the approximate equality comparison
const REL_TOL: f64 = 1e-9;

/// Componentwise closeness test, exact-equality fast path included
fn is_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs())
}

/// A Euclidean vector in two or three dimensional space.
///
/// The third component defaults to zero and discriminates between the
/// two regimes: `z == 0` marks a 2D vector (see [`Vector::angle`]),
/// anything else a 3D vector. Arithmetic, magnitude, interpolation and
/// distance treat the vector uniformly as a 3-tuple in both regimes.
///
/// Equality between vectors is approximate: each component pair is
/// compared under a relative floating-point tolerance rather than
/// bitwise, so results of equivalent computations compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    /// The x-component of the vector
    pub x: f64,
    /// The y-component of the vector
    pub y: f64,
    /// The z-component of the vector (0 for 2D vectors)
    pub z: f64,
}

impl Vector {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Create a new 2D vector (z set to 0)
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Vector { x, y, z: 0.0 }
    }

    /// Zero vector
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector = Vector::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector = Vector::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Vector = Vector::new(0.0, 0.0, 1.0);

    /// The components as an array, always in `(x, y, z)` order
    pub const fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The angle of rotation of the vector (in radians).
    ///
    /// Computed as `atan2(y, x)`. Only available for 2D vectors;
    /// returns [`VectorError::Angle3D`] when `z != 0`.
    pub fn angle(&self) -> Result<f64> {
        if self.z != 0.0 {
            return Err(VectorError::Angle3D);
        }
        Ok(self.y.atan2(self.x))
    }

    /// Set the angle of the vector (in radians).
    ///
    /// Rotates the vector in place by the difference between `theta`
    /// and the current angle. Reads the current angle first, so it
    /// fails with [`VectorError::Angle3D`] under the same `z != 0`
    /// precondition as [`Vector::angle`].
    pub fn set_angle(&mut self, theta: f64) -> Result<()> {
        let delta = theta - self.angle()?;
        self.rotate(delta);
        Ok(())
    }

    /// Rotate the vector in the xy-plane by an angle (in radians).
    ///
    /// Applies the standard 2D rotation matrix to `(x, y)`; `z` is left
    /// untouched. Unlike angle access this is defined for 3D vectors as
    /// well: it rotates their xy-projection.
    pub fn rotate(&mut self, theta: f64) {
        let x = self.x * theta.cos() - self.y * theta.sin();
        let y = self.x * theta.sin() + self.y * theta.cos();
        self.x = x;
        self.y = y;
    }

    /// Calculate the angle between two vectors (in radians).
    ///
    /// Defined for both 2D and 3D vectors; the result lies in `[0, π]`.
    /// Both vectors must have nonzero magnitude, otherwise the division
    /// inside produces a NaN result.
    pub fn angle_between(&self, other: &Vector) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude())).acos()
    }

    /// Calculate the magnitude (Euclidean norm) of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Calculate the squared magnitude (avoids sqrt for performance)
    pub fn magnitude_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Set the magnitude of the vector, preserving its direction.
    ///
    /// Rescales all three components by `new_magnitude / magnitude()`.
    /// The current magnitude must be nonzero, otherwise the scale
    /// factor is not finite and the components become NaN.
    pub fn set_magnitude(&mut self, new_magnitude: f64) {
        let current = self.magnitude();
        self.x = (self.x / current) * new_magnitude;
        self.y = (self.y / current) * new_magnitude;
        self.z = (self.z / current) * new_magnitude;
    }

    /// Set the squared magnitude of the vector.
    ///
    /// Delegates to [`Vector::set_magnitude`] with the square root of
    /// the assigned value; returns
    /// [`VectorError::NegativeMagnitudeSq`] when the value is negative.
    pub fn set_magnitude_sq(&mut self, new_magnitude_sq: f64) -> Result<()> {
        if new_magnitude_sq < 0.0 {
            return Err(VectorError::NegativeMagnitudeSq(new_magnitude_sq));
        }
        self.set_magnitude(new_magnitude_sq.sqrt());
        Ok(())
    }

    /// Set the magnitude of the vector to one.
    ///
    /// Same nonzero-magnitude precondition as [`Vector::set_magnitude`].
    pub fn normalize(&mut self) {
        self.set_magnitude(1.0);
    }

    /// Limit the magnitude of the vector to the given range.
    ///
    /// Clamps the magnitude into `[lower, upper]`. An omitted bound
    /// defaults to the current magnitude, so it can never be hit on
    /// that side. The lower bound is checked first. The bounds are not
    /// validated against each other.
    pub fn limit(&mut self, upper: Option<f64>, lower: Option<f64>) {
        let magnitude = self.magnitude();
        let upper = upper.unwrap_or(magnitude);
        let lower = lower.unwrap_or(magnitude);

        if magnitude < lower {
            self.set_magnitude(lower);
        } else if magnitude > upper {
            self.set_magnitude(upper);
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    ///
    /// Always the 3D formula; crossing two 2D vectors yields a vector
    /// whose only nonzero component is `z`, the signed area of the
    /// parallelogram they span.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Linearly interpolate towards another vector.
    ///
    /// `amount` is not clamped; values outside `[0, 1]` extrapolate
    /// beyond the endpoints.
    pub fn lerp(&self, other: &Vector, amount: f64) -> Vector {
        Vector::new(
            self.x + amount * (other.x - self.x),
            self.y + amount * (other.y - self.y),
            self.z + amount * (other.z - self.z),
        )
    }

    /// Distance between the tips of two vectors
    pub fn distance(&self, other: &Vector) -> f64 {
        (*self - *other).magnitude()
    }

    /// Alias for [`Vector::distance`]
    pub fn dist(&self, other: &Vector) -> f64 {
        self.distance(other)
    }

    /// Create a unit 2D vector pointing at the given angle (in radians)
    pub fn from_angle(angle: f64) -> Self {
        Vector::new_2d(angle.cos(), angle.sin())
    }

    /// Create a random 2D unit vector.
    ///
    /// Draws x and y independently from `[0, 1)` and normalizes, so
    /// the direction is not uniform over the circle: it is confined to
    /// the first quadrant and biased towards the diagonal.
    pub fn random_2d() -> Self {
        Self::random_2d_with(&mut rand::thread_rng())
    }

    /// Create a random 2D unit vector using the given RNG
    pub fn random_2d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut vec = Vector::new_2d(rng.gen::<f64>(), rng.gen::<f64>());
        vec.normalize();
        vec
    }

    /// Create a random 3D unit vector.
    ///
    /// Draws all three components independently from `[0, 1)` and
    /// normalizes, so the direction is confined to the positive octant
    /// and biased towards its diagonal, not uniform over the sphere.
    pub fn random_3d() -> Self {
        Self::random_3d_with(&mut rand::thread_rng())
    }

    /// Create a random 3D unit vector using the given RNG
    pub fn random_3d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut vec = Vector::new(rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>());
        vec.normalize();
        vec
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::ZERO
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, scalar: f64) -> Vector {
        self * (1.0 / scalar)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self * -1.0
    }
}

/// Componentwise approximate equality under a relative tolerance
impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        is_close(self.x, other.x) && is_close(self.y, other.y) && is_close(self.z, other.z)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Vector, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Vector, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && f64::relative_eq(&self.z, &other.z, epsilon, max_relative)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new_2d(x, y)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(vector: Vector) -> Self {
        vector.components()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    /// Iterate over the components in `(x, y, z)` order
    fn into_iter(self) -> Self::IntoIter {
        self.components().into_iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

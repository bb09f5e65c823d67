use std::f64::consts::PI;
use std::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::constants::DEFAULT_NORMALIZE_MULTIPLIER;
use crate::error::VectorError;

/// A vector in the Euclidean plane.
///
/// Instance operations mutate the receiver in place and hand it back, so they
/// chain: `v.add(w).normalize_to(2.0)`. The non-mutating forms live in
/// [`crate::math`] and in the operator impls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawVector2D"))]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

// Deserialized fields go through `Vector2D::new` like any other construction.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVector2D {
    x: f64,
    y: f64,
}

#[cfg(feature = "serde")]
impl From<RawVector2D> for Vector2D {
    fn from(raw: RawVector2D) -> Self {
        Vector2D::new(raw.x, raw.y)
    }
}

/// Right-hand side of [`Vector2D::multiply`] and [`Vector2D::divide`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vector2D),
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Vector2D> for Operand {
    fn from(value: Vector2D) -> Self {
        Operand::Vector(value)
    }
}

impl From<&Vector2D> for Operand {
    fn from(value: &Vector2D) -> Self {
        Operand::Vector(*value)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    /// Builds a vector, replacing any NaN or infinite coordinate with `0`.
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    pub fn from_angle(theta: f64, magnitude: f64) -> Self {
        Vector2D::new(theta.cos() * magnitude, theta.sin() * magnitude)
    }

    pub fn random_unit(rng: &mut impl Rng) -> Self {
        let theta = rng.gen_range(-PI..PI);
        Vector2D::from_angle(theta, 1.0)
    }

    pub fn add(&mut self, v: Vector2D) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    pub fn subtract(&mut self, v: Vector2D) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    pub fn scale(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    pub fn scale_components(&mut self, v: Vector2D) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self
    }

    /// Scales uniformly by a scalar, or component-wise by a vector.
    pub fn multiply(&mut self, value: impl Into<Operand>) -> &mut Self {
        match value.into() {
            Operand::Scalar(scalar) => self.scale(scalar),
            Operand::Vector(v) => self.scale_components(v),
        }
    }

    /// Multiplies by the reciprocal of a scalar divisor.
    ///
    /// A zero divisor is not guarded: the components become infinite or NaN.
    /// Use [`Vector2D::checked_divide`] to reject it instead. Vector divisors
    /// are rejected and the receiver is left untouched.
    pub fn divide(&mut self, value: impl Into<Operand>) -> Result<&mut Self, VectorError> {
        match value.into() {
            Operand::Scalar(scalar) => Ok(self.scale(1.0 / scalar)),
            Operand::Vector(divisor) => {
                warn!("Rejected division of {} by vector {}", self, divisor);
                Err(VectorError::VectorDivisor)
            }
        }
    }

    pub fn checked_divide(&mut self, scalar: f64) -> Result<&mut Self, VectorError> {
        if !scalar.is_finite() {
            warn!("Rejected division of {} by non-finite {}", self, scalar);
            return Err(VectorError::NonFiniteDivisor(scalar));
        }
        if scalar == 0.0 {
            warn!("Rejected division of {} by zero", self);
            return Err(VectorError::DivideByZero);
        }
        Ok(self.scale(1.0 / scalar))
    }

    /// Clamps the magnitude to `max_length`, keeping the direction.
    pub fn truncate(&mut self, max_length: f64) -> &mut Self {
        if self.magnitude() > max_length {
            self.normalize_to(max_length);
        }
        self
    }

    pub fn normalize(&mut self) -> &mut Self {
        self.normalize_to(DEFAULT_NORMALIZE_MULTIPLIER)
    }

    /// Rescales to length `multiplier`. A zero vector is left as is and the
    /// multiplier is not applied.
    pub fn normalize_to(&mut self, multiplier: f64) -> &mut Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            debug!("Skipped normalizing a zero-length vector");
            return self;
        }

        self.x /= mag;
        self.y /= mag;
        self.scale(multiplier)
    }

    /// Rotates counter-clockwise by `theta` radians about the origin.
    pub fn rotate(&mut self, theta: f64) -> &mut Self {
        let final_theta = self.direction() + theta;
        self.set_angle(final_theta)
    }

    /// Points the vector at `theta` radians, keeping its magnitude.
    pub fn set_angle(&mut self, theta: f64) -> &mut Self {
        let magnitude = self.magnitude();
        self.x = theta.cos();
        self.y = theta.sin();
        self.scale(magnitude)
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    // Skips the square root; enough for comparing lengths.
    pub fn magnitude_squared(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    /// Angle from the positive x-axis in `(-π, π]`.
    pub fn direction(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}

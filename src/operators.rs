use std::iter::Sum;
use std::ops::{AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math;
use crate::types::Vector2D;

// No `Add` impl: its by-value `add` would shadow the in-place
// `Vector2D::add` whenever `std::ops::Add` is in scope. Use `+=` or
// `math::add` instead.

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        math::subtract(&self, &other)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        math::multiply(&self, scalar)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        math::multiply(&vector, self)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        math::divide(&self, scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2D {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        Vector2D::add(self, other);
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        Vector2D::subtract(self, other);
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale(scalar);
    }
}

// Same reciprocal as `Vector2D::divide`, without the Result.
impl DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, scalar: f64) {
        self.scale(1.0 / scalar);
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector2D::ZERO, |mut total, v| {
            total += v;
            total
        })
    }
}

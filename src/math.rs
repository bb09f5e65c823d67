//! Free-standing vector operations.
//!
//! Every function here returns a new vector and leaves its arguments alone,
//! except [`dot`], which normalizes both arguments in place.
//!
//! Results are built directly rather than through [`Vector2D::new`], so
//! infinities and NaN from the arithmetic are passed through untouched.

use crate::types::Vector2D;

pub fn add(v1: &Vector2D, v2: &Vector2D) -> Vector2D {
    Vector2D {
        x: v1.x + v2.x,
        y: v1.y + v2.y,
    }
}

pub fn subtract(v1: &Vector2D, v2: &Vector2D) -> Vector2D {
    Vector2D {
        x: v1.x - v2.x,
        y: v1.y - v2.y,
    }
}

pub fn multiply(v: &Vector2D, scalar: f64) -> Vector2D {
    Vector2D {
        x: v.x * scalar,
        y: v.y * scalar,
    }
}

/// No zero guard: dividing by `0.0` yields infinite or NaN components.
pub fn divide(v: &Vector2D, scalar: f64) -> Vector2D {
    Vector2D {
        x: v.x / scalar,
        y: v.y / scalar,
    }
}

pub fn distance(v1: &Vector2D, v2: &Vector2D) -> f64 {
    subtract(v2, v1).magnitude()
}

pub fn distance_squared(v1: &Vector2D, v2: &Vector2D) -> f64 {
    subtract(v2, v1).magnitude_squared()
}

pub fn clone(v: &Vector2D) -> Vector2D {
    *v
}

/// Quarter turn counter-clockwise. Not normalized.
pub fn orthogonal(v: &Vector2D) -> Vector2D {
    Vector2D {
        x: -v.y,
        y: v.x,
    }
}

/// Unit vector perpendicular to the segment `v1 -> v2`.
///
/// Coincident points give the zero vector.
pub fn normal(v1: &Vector2D, v2: &Vector2D) -> Vector2D {
    let mut along = subtract(v2, v1);
    along.normalize();
    orthogonal(&along)
}

pub fn normalize(v: &Vector2D) -> Vector2D {
    let mut copy = *v;
    copy.normalize();
    copy
}

/// Cosine of the angle between `v1` and `v2`.
///
/// Both arguments are normalized in place before the product is taken, so the
/// caller sees them rescaled to unit length afterwards. For the plain dot
/// product use [`Vector2D::dot`].
pub fn dot(v1: &mut Vector2D, v2: &mut Vector2D) -> f64 {
    v1.normalize();
    v2.normalize();
    v1.dot(*v2)
}

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// A 2D vector value type.
///
/// Used for positions, velocities and genome impulses. Operations either
/// return a new vector or mutate in place; callers must not assume aliasing
/// across mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector `(cos theta, sin theta)`.
    #[must_use]
    pub fn from_angle(theta: f64) -> Self {
        Self {
            x: theta.cos(),
            y: theta.sin(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Clamps the vector to `max_len`, preserving direction.
    ///
    /// Vectors already within the limit are returned unchanged, so a zero
    /// vector never produces NaN components.
    #[must_use]
    pub fn limit(self, max_len: f64) -> Vec2 {
        let len = self.length();
        if len > max_len {
            self * (max_len / len)
        } else {
            self
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Unclamped linear interpolation of `v` from `[in_lo, in_hi]` onto
/// `[out_lo, out_hi]`.
///
/// Inputs outside the source range extrapolate; callers clamp the result
/// themselves where a bounded output is required.
#[must_use]
pub fn remap(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (v - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

// src/vec3.rs

use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// Point or direction in 3D Euclidean space.
///
/// Components are not required to be finite: feeding infinities or NaN in
/// gives infinities or NaN out. Normalisation works on the squared length,
/// so finite vectors near the ends of the `f64` range do not come out unit
/// length either: `[1e200, 0, 0]` overflows to `[0, 0, 0]` and
/// `[1e-200, 0, 0]` underflows to zero and is returned unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// 3D vector dot product.
    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length_squared() == 0.0
    }

    /// Rescale to unit length in place and hand the same vector back for chaining.
    ///
    /// The zero vector is left untouched (no NaN, no fallback axis).
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let n2 = self.length_squared();
        if n2 > 0.0 {
            let inv = 1.0 / n2.sqrt();
            self.x *= inv;
            self.y *= inv;
            self.z *= inv;
        } else {
            #[cfg(feature = "log")]
            log::debug!("normalize: squared length {} is zero or NaN, {} left unchanged", n2, self);
        }
        self
    }

    /// Normalised copy; `self` is not modified.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// 3D vector cross product: self × other.
    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

/// Normalise `v` to unit length in place. If zero, `v` stays (0, 0, 0).
#[inline]
pub fn normalize(v: &mut Vector3) -> &mut Vector3 {
    v.normalize()
}

/// 3D vector cross product: a × b.
#[inline]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

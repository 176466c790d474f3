//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use crate::error::TraceError;
use crate::vector::Vector3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction, t >= 0.
///
/// The direction is validated on construction, so intersection code can divide
/// by `dot(direction, direction)` without checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    ///
    /// The direction does not need to be unit length, but it must be finite and
    /// non-zero.
    pub fn new(origin: Vector3, direction: Vector3) -> Result<Self, TraceError> {
        if !direction.is_finite() || direction.length_squared() == 0.0 {
            return Err(TraceError::DegenerateRay {
                direction: direction.to_array(),
            });
        }
        Ok(Self { origin, direction })
    }

    /// Starting point of the ray.
    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Direction of the ray, in whatever scale the caller supplied.
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + t * self.direction
    }
}

//! Sphere primitive for ray tracing.
//!
//! Solves the full quadratic `a t^2 + b t + c = 0` and picks a root with the
//! policy below. Roots are ray parameters, so the direction need not be unit
//! length.

use crate::error::TraceError;
use crate::hittable::{HitRecord, Hittable};
use crate::ray::Ray;
use crate::vector::{self, Vector3};

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be positive and finite.
    pub fn new(center: Vector3, radius: f32) -> Result<Self, TraceError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TraceError::InvalidSphere { radius });
        }
        Ok(Self { center, radius })
    }

    /// Center point of the sphere in world coordinates.
    pub fn center(&self) -> Vector3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let direction = ray.direction();
        let center_to_origin = ray.origin() - self.center;

        let a = direction.dot(direction);
        let b = 2.0 * center_to_origin.dot(direction);
        let c = center_to_origin.dot(center_to_origin) - self.radius * self.radius;

        // NaN once the coefficients overflow; count that as a miss too.
        let discriminant = b * b - 4.0 * a * c;
        if discriminant.is_nan() || discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);
        if !(near.is_finite() && far.is_finite()) {
            return None;
        }

        match (near < 0.0, far < 0.0) {
            // Sphere entirely behind the origin
            (true, true) => None,
            // Origin inside the sphere: report the exit point
            (true, false) => Some(far),
            (false, true) => Some(near),
            (false, false) => Some(near.min(far)),
        }
    }

    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord {
        let point = ray.at(t);
        let normal = point - self.center;
        let (tangent, bitangent) = vector::tangent_basis(normal);
        HitRecord {
            t,
            point,
            normal,
            tangent,
            bitangent,
        }
    }
}

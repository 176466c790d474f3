//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! the surface data the occlusion sampler needs at a hit point.

use crate::ray::Ray;
use crate::vector::Vector3;

/// Ray-object intersection information.
///
/// The normal and tangent frame are left unnormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the selected root
    pub t: f32,
    /// Point where the ray intersects the object
    pub point: Vector3,
    /// Outward surface normal, scaled by the primitive's size
    pub normal: Vector3,
    /// First vector of the tangent plane basis
    pub tangent: Vector3,
    /// Second vector of the tangent plane basis, `normal x tangent`
    pub bitangent: Vector3,
}

/// Trait for objects that can be intersected by rays.
///
/// Split in two so hit-test-only callers never pay for the surface frame.
pub trait Hittable: Sync + Send {
    /// Ray parameter of the intersection this primitive reports, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Surface frame at parameter `t` along `ray`.
    fn hit_record(&self, ray: &Ray, t: f32) -> HitRecord;

    /// Intersect and, on a hit, build the surface frame.
    fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.intersect(ray).map(|t| self.hit_record(ray, t))
    }
}

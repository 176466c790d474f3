//! Ordered collection of spheres forming a scene.

use log::debug;

use crate::error::TraceError;
use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::Vector3;

/// How the scene picks a sphere when several intersect a ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitPolicy {
    /// The first sphere in list order that the ray intersects.
    ///
    /// Scenes are expected to be authored front to back; spheres that overlap
    /// along a ray out of list order are reported in list order anyway.
    #[default]
    FirstInList,
    /// The sphere with the smallest ray parameter over the whole list.
    Nearest,
}

/// Scene of spheres, scanned in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    policy: HitPolicy,
}

impl Scene {
    /// Create a scene from spheres listed front to back.
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self {
            spheres,
            policy: HitPolicy::default(),
        }
    }

    /// Replace the hit policy.
    pub fn with_policy(mut self, policy: HitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The default three-sphere scene, front to back.
    pub fn three_spheres() -> Result<Self, TraceError> {
        let spheres = vec![
            Sphere::new(Vector3::new(1.0, 1.0, 1.0), 0.3)?,
            Sphere::new(Vector3::new(-1.0, 0.5, 2.0), 0.4)?,
            Sphere::new(Vector3::new(0.0, 0.0, 0.0), 1.0)?,
        ];
        debug!("Built default scene with {} spheres", spheres.len());
        Ok(Self::new(spheres))
    }

    /// Spheres in scan order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Active hit policy.
    pub fn policy(&self) -> HitPolicy {
        self.policy
    }

    /// Find the sphere this scene reports for `ray`, with its ray parameter.
    pub fn first_hit(&self, ray: &Ray) -> Option<(&Sphere, f32)> {
        match self.policy {
            HitPolicy::FirstInList => self
                .spheres
                .iter()
                .find_map(|sphere| sphere.intersect(ray).map(|t| (sphere, t))),
            HitPolicy::Nearest => self
                .spheres
                .iter()
                .filter_map(|sphere| sphere.intersect(ray).map(|t| (sphere, t)))
                .min_by(|a, b| a.1.total_cmp(&b.1)),
        }
    }
}

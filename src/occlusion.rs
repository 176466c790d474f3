//! Monte Carlo ambient occlusion.
//!
//! Casts secondary rays into the hemisphere around a hit normal and counts how
//! many of them hit other geometry. The secondary rays are traced in
//! [`TraceMode::HitTestOnly`], so they never reach this sampler again.

use image::Rgb;
use rayon::prelude::*;

use crate::error::TraceError;
use crate::hittable::HitRecord;
use crate::random::{self, HemisphereSample};
use crate::ray::Ray;
use crate::tracer::{TraceMode, Tracer};
use crate::vector::Vector3;

/// Secondary rays per hit point.
pub const DEFAULT_SAMPLE_COUNT: u32 = 100;

/// Offset of a secondary ray origin along its own direction.
pub const DEFAULT_EPSILON: f32 = 0.001;

/// Hemisphere sampler settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcclusionSampler {
    /// Number of secondary rays cast per hit
    pub sample_count: u32,
    /// Origin bias along each secondary ray, to avoid hitting the surface it
    /// starts on
    pub epsilon: f32,
}

impl Default for OcclusionSampler {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl OcclusionSampler {
    /// Create a sampler.
    pub fn new(sample_count: u32, epsilon: f32) -> Self {
        Self {
            sample_count,
            epsilon,
        }
    }

    /// World-space direction of `sample` in the frame of `hit`.
    pub fn sample_direction(hit: &HitRecord, sample: &HemisphereSample) -> Vector3 {
        let local = sample.local_direction();
        local.x * hit.tangent + local.y * hit.bitangent + local.z * hit.normal
    }

    /// Fraction of secondary rays from `hit` that hit the scene.
    ///
    /// Sample `i` draws its angles from stream `i` of `seed`, so the estimate
    /// does not depend on how rayon schedules the samples.
    pub fn occlusion(&self, tracer: &Tracer<'_>, hit: &HitRecord, seed: u64) -> Result<f32, TraceError> {
        if self.sample_count == 0 {
            return Ok(0.0);
        }

        let hits = (0..self.sample_count)
            .into_par_iter()
            .map(|i| -> Result<u32, TraceError> {
                let mut rng = random::stream(seed, u64::from(i));
                let sample = HemisphereSample::random(&mut rng);
                let direction = Self::sample_direction(hit, &sample);
                let ray = Ray::new(hit.point + self.epsilon * direction, direction)?;
                let outcome = tracer.trace(&ray, TraceMode::HitTestOnly)?;
                Ok(u32::from(outcome.is_hit()))
            })
            .try_reduce(|| 0, |a, b| Ok(a + b))?;

        Ok(hits as f32 / self.sample_count as f32)
    }

    /// Grayscale color for an occlusion fraction: `255 * (1 - occlusion)^2`.
    pub fn shade(occlusion: f32) -> Rgb<u8> {
        let visibility = 1.0 - occlusion.clamp(0.0, 1.0);
        // Float to u8 casts truncate and saturate.
        let level = (255.0 * visibility * visibility) as u8;
        Rgb([level, level, level])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::Hittable;
    use crate::scene::Scene;
    use crate::sphere::Sphere;

    fn down_z(x: f32, y: f32) -> Ray {
        Ray::new(Vector3::new(x, y, 10.0), Vector3::new(0.0, 0.0, -1.0)).unwrap()
    }

    fn top_of_unit_sphere() -> HitRecord {
        Sphere::new(Vector3::ZERO, 1.0).unwrap().hit(&down_z(0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_shade_mapping() {
        assert_eq!(OcclusionSampler::shade(0.0), Rgb([255, 255, 255]));
        assert_eq!(OcclusionSampler::shade(1.0), Rgb([0, 0, 0]));
        // 255 * 0.25 = 63.75 truncates to 63
        assert_eq!(OcclusionSampler::shade(0.5), Rgb([63, 63, 63]));
        assert_eq!(OcclusionSampler::shade(1.2), Rgb([0, 0, 0]));
        assert_eq!(OcclusionSampler::shade(-0.1), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_sample_directions_stay_in_hemisphere() {
        let hit = top_of_unit_sphere();
        let mut rng = random::stream(5, 0);
        for _ in 0..500 {
            let sample = HemisphereSample::random(&mut rng);
            let direction = OcclusionSampler::sample_direction(&hit, &sample);
            assert!(direction.dot(hit.normal) >= 0.0);
        }
    }

    #[test]
    fn test_isolated_sphere_is_unoccluded() {
        let scene = Scene::new(vec![Sphere::new(Vector3::ZERO, 1.0).unwrap()]);
        let sampler = OcclusionSampler::new(400, DEFAULT_EPSILON);
        let tracer = Tracer::new(&scene, sampler);
        let occlusion = sampler.occlusion(&tracer, &top_of_unit_sphere(), 11).unwrap();
        assert!(occlusion < 0.05, "occlusion {occlusion}");
        let Rgb([r, g, b]) = OcclusionSampler::shade(occlusion);
        assert!(r > 200 && r == g && g == b);
    }

    #[test]
    fn test_enclosed_point_is_fully_occluded() {
        // A large sphere behind the hit point in list order covers the whole
        // hemisphere above the small one.
        let small = Sphere::new(Vector3::ZERO, 1.0).unwrap();
        let shell = Sphere::new(Vector3::ZERO, 50.0).unwrap();
        let scene = Scene::new(vec![small, shell]);
        let sampler = OcclusionSampler::new(64, DEFAULT_EPSILON);
        let tracer = Tracer::new(&scene, sampler);
        let occlusion = sampler.occlusion(&tracer, &top_of_unit_sphere(), 3).unwrap();
        assert_eq!(occlusion, 1.0);
        assert_eq!(OcclusionSampler::shade(occlusion), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_occlusion_is_deterministic_for_a_seed() {
        let scene = Scene::three_spheres().unwrap();
        let sampler = OcclusionSampler::default();
        let tracer = Tracer::new(&scene, sampler);
        // Lands on the big sphere next to the small front sphere.
        let hit = scene.spheres()[2].hit(&down_z(0.6, 0.6)).unwrap();
        let first = sampler.occlusion(&tracer, &hit, 1234).unwrap();
        for _ in 0..4 {
            assert_eq!(sampler.occlusion(&tracer, &hit, 1234).unwrap(), first);
        }
        assert!((0.0..=1.0).contains(&first));
    }

    #[test]
    fn test_zero_samples_means_no_occlusion() {
        let scene = Scene::three_spheres().unwrap();
        let sampler = OcclusionSampler::new(0, DEFAULT_EPSILON);
        let tracer = Tracer::new(&scene, sampler);
        assert_eq!(sampler.occlusion(&tracer, &top_of_unit_sphere(), 0).unwrap(), 0.0);
    }
}

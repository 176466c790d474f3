//! Scene tracer: first-hit lookup plus dispatch to the occlusion sampler.

use image::Rgb;

use crate::error::TraceError;
use crate::hittable::Hittable;
use crate::occlusion::OcclusionSampler;
use crate::ray::Ray;
use crate::scene::Scene;

/// What a trace call should compute on a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// Shade the hit with ambient occlusion, drawing samples from `seed`.
    ShadeResult {
        /// Seed of the per-sample random streams.
        seed: u64,
    },
    /// Report hit or miss only. Secondary rays always use this mode, which is
    /// what bounds occlusion recursion to a single level.
    HitTestOnly,
}

/// Result of tracing one ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    /// No sphere intersects the ray.
    Miss,
    /// A sphere intersects the ray; no shading was requested.
    Hit,
    /// A sphere intersects the ray and was shaded.
    Shaded(Rgb<u8>),
}

impl TraceOutcome {
    /// Whether the ray hit anything.
    pub fn is_hit(&self) -> bool {
        !matches!(self, TraceOutcome::Miss)
    }

    /// Shaded color, or `background` for a miss or unshaded hit.
    pub fn color_or(self, background: Rgb<u8>) -> Rgb<u8> {
        match self {
            TraceOutcome::Shaded(color) => color,
            TraceOutcome::Miss | TraceOutcome::Hit => background,
        }
    }
}

/// Traces rays against a scene, shading hits with an occlusion sampler.
#[derive(Debug, Clone)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    sampler: OcclusionSampler,
}

impl<'a> Tracer<'a> {
    /// Create a tracer over `scene`.
    pub fn new(scene: &'a Scene, sampler: OcclusionSampler) -> Self {
        Self { scene, sampler }
    }

    /// Trace `ray` through the scene.
    ///
    /// The sphere chosen follows the scene's [`HitPolicy`](crate::scene::HitPolicy),
    /// by default the first one in list order.
    pub fn trace(&self, ray: &Ray, mode: TraceMode) -> Result<TraceOutcome, TraceError> {
        let Some((sphere, t)) = self.scene.first_hit(ray) else {
            return Ok(TraceOutcome::Miss);
        };

        match mode {
            TraceMode::HitTestOnly => Ok(TraceOutcome::Hit),
            TraceMode::ShadeResult { seed } => {
                let hit = sphere.hit_record(ray, t);
                let occlusion = self.sampler.occlusion(self, &hit, seed)?;
                Ok(TraceOutcome::Shaded(OcclusionSampler::shade(occlusion)))
            }
        }
    }
}

//! Render configuration, built once at startup and read-only afterwards.

use image::Rgb;
use log::debug;

use crate::camera::Camera;
use crate::error::{RenderError, TraceError};
use crate::occlusion::{OcclusionSampler, DEFAULT_EPSILON, DEFAULT_SAMPLE_COUNT};
use crate::scene::{HitPolicy, Scene};

/// Largest accepted oversampling; its square still fits the sub-sample count.
pub const MAX_OVERSAMPLING: u32 = 4096;

/// Which image the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Grayscale ambient occlusion, oversampled.
    #[default]
    Shaded,
    /// Binary hit/miss mask, one hit-test ray per pixel.
    Silhouette,
}

/// Everything a render needs.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Spheres to render, front to back
    pub scene: Scene,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Sub-samples per pixel along each axis
    pub oversampling: u32,
    /// Half-width of the viewport in world units
    pub zoom: f32,
    /// Z coordinate of primary ray origins
    pub depth: f32,
    /// Color of pixels that hit nothing
    pub background: Rgb<u8>,
    /// Secondary rays per hit
    pub occlusion_samples: u32,
    /// Secondary ray origin bias
    pub epsilon: f32,
    /// Run seed; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Shaded or silhouette output
    pub mode: RenderMode,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl RenderConfig {
    /// Default settings around the three-sphere scene.
    pub fn new() -> Result<Self, TraceError> {
        let camera = Camera::new();
        Ok(Self {
            scene: Scene::three_spheres()?,
            width: camera.image_width,
            height: camera.image_height,
            oversampling: camera.oversampling,
            zoom: camera.zoom,
            depth: camera.depth,
            background: camera.background,
            occlusion_samples: DEFAULT_SAMPLE_COUNT,
            epsilon: DEFAULT_EPSILON,
            seed: None,
            mode: RenderMode::default(),
            show_progress: camera.show_progress,
        })
    }

    /// Use `policy` to pick between overlapping spheres.
    pub fn with_hit_policy(mut self, policy: HitPolicy) -> Self {
        self.scene = self.scene.with_policy(policy);
        self
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::Validation(format!(
                "image size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.oversampling == 0 {
            return Err(RenderError::Validation("oversampling must be at least 1".to_string()));
        }
        if self.oversampling > MAX_OVERSAMPLING {
            return Err(RenderError::Validation(format!(
                "oversampling {} exceeds {}",
                self.oversampling, MAX_OVERSAMPLING
            )));
        }
        if self.occlusion_samples == 0 {
            return Err(RenderError::Validation("occlusion samples must be at least 1".to_string()));
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(RenderError::Validation(format!("zoom {} must be positive", self.zoom)));
        }
        if !self.depth.is_finite() {
            return Err(RenderError::Validation(format!("camera depth {} must be finite", self.depth)));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(RenderError::Validation(format!("epsilon {} must be positive", self.epsilon)));
        }
        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Camera framing described by this configuration.
    pub fn camera(&self) -> Camera {
        Camera {
            image_width: self.width,
            image_height: self.height,
            oversampling: self.oversampling,
            zoom: self.zoom,
            depth: self.depth,
            background: self.background,
            show_progress: self.show_progress,
        }
    }

    /// Occlusion sampler described by this configuration.
    pub fn sampler(&self) -> OcclusionSampler {
        OcclusionSampler::new(self.occlusion_samples, self.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::new().unwrap();
        assert_eq!((config.width, config.height), (1920, 1080));
        assert_eq!(config.oversampling, 4);
        assert_eq!(config.zoom, 2.0);
        assert_eq!(config.depth, 10.0);
        assert_eq!(config.occlusion_samples, 100);
        assert_eq!(config.epsilon, 0.001);
        assert_eq!(config.background, Rgb([0, 0, 0]));
        assert_eq!(config.mode, RenderMode::Shaded);
        assert_eq!(config.scene.spheres().len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let base = RenderConfig::new().unwrap();

        let mut config = base.clone();
        config.width = 0;
        assert!(matches!(config.validate(), Err(RenderError::Validation(_))));

        let mut config = base.clone();
        config.oversampling = 0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.oversampling = 65536;
        assert!(matches!(config.validate(), Err(RenderError::Validation(_))));

        let mut config = base.clone();
        config.oversampling = MAX_OVERSAMPLING;
        assert!(config.validate().is_ok());

        let mut config = base.clone();
        config.occlusion_samples = 0;
        assert!(config.validate().is_err());

        let mut config = base.clone();
        config.zoom = -1.0;
        assert!(config.validate().is_err());

        let mut config = base;
        config.epsilon = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_camera_and_sampler_follow_config() {
        let mut config = RenderConfig::new().unwrap();
        config.width = 64;
        config.oversampling = 2;
        config.occlusion_samples = 12;
        let camera = config.camera();
        assert_eq!(camera.image_width, 64);
        assert_eq!(camera.oversampling, 2);
        assert_eq!(config.sampler().sample_count, 12);
    }

    #[test]
    fn test_hit_policy_override() {
        let config = RenderConfig::new().unwrap().with_hit_policy(HitPolicy::Nearest);
        assert_eq!(config.scene.policy(), HitPolicy::Nearest);
    }
}

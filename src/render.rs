//! Render entry point tying configuration, tracer and camera together.

use image::{GrayImage, RgbImage};
use log::info;

use crate::config::{RenderConfig, RenderMode};
use crate::error::RenderError;
use crate::random;
use crate::tracer::Tracer;

/// Image produced by a render.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedImage {
    /// Occlusion-shaded color image.
    Shaded(RgbImage),
    /// Hit mask: 255 where a sphere was hit, 0 elsewhere.
    Silhouette(GrayImage),
}

impl RenderedImage {
    /// Image size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            RenderedImage::Shaded(image) => image.dimensions(),
            RenderedImage::Silhouette(image) => image.dimensions(),
        }
    }
}

/// Validate `config` and render it.
pub fn render(config: &RenderConfig) -> Result<RenderedImage, RenderError> {
    config.validate()?;

    let tracer = Tracer::new(&config.scene, config.sampler());
    let camera = config.camera();

    info!(
        "Rendering {} spheres at {}x{} ({:?}, policy {:?})",
        config.scene.spheres().len(),
        config.width,
        config.height,
        config.mode,
        config.scene.policy()
    );

    match config.mode {
        RenderMode::Shaded => {
            let seed = config.seed.unwrap_or_else(random::entropy_seed);
            info!(
                "Oversampling {}x{}, {} occlusion samples per hit, seed {}",
                config.oversampling, config.oversampling, config.occlusion_samples, seed
            );
            Ok(RenderedImage::Shaded(camera.render(&tracer, seed)?))
        }
        RenderMode::Silhouette => Ok(RenderedImage::Silhouette(camera.render_silhouette(&tracer)?)),
    }
}

//! Orthographic camera: primary ray generation and image synthesis

use image::{GrayImage, Luma, Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;
use rayon::prelude::*;

use crate::error::{RenderError, TraceError};
use crate::random;
use crate::ray::Ray;
use crate::tracer::{TraceMode, Tracer};
use crate::vector::Vector3;

/// Direction shared by every primary ray.
pub const VIEW_DIRECTION: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Orthographic camera looking down -Z.
///
/// Every primary ray has the same direction; only the origin moves across a
/// `2 * zoom` wide viewport placed at `z = depth`. Pixels are split into an
/// `oversampling x oversampling` grid of sub-samples.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Sub-samples per pixel along each axis
    pub oversampling: u32,
    /// Half-width of the viewport in world units
    pub zoom: f32,
    /// Z coordinate of every primary ray origin
    pub depth: f32,
    /// Color of pixels whose rays miss every sphere
    pub background: Rgb<u8>,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Camera {
    /// Creates a new camera with the default framing.
    ///
    /// Default: 1920x1080 image, 4x4 oversampling, zoom 2, rays starting at
    /// z = 10, black background.
    pub fn new() -> Self {
        Self {
            image_width: 1920,
            image_height: 1080,
            oversampling: 4,
            zoom: 2.0,
            depth: 10.0,
            background: Rgb([0, 0, 0]),
            show_progress: true,
        }
    }

    /// Primary ray through sub-sample `(sx, sy)` of pixel `(x, y)`.
    pub fn primary_ray(&self, x: u32, y: u32, sx: u32, sy: u32) -> Result<Ray, TraceError> {
        let s = self.oversampling as f32;
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let u = (x as f32 * s + sx as f32) / (width * s);
        let v = (y as f32 * s + sy as f32) / (height * s);

        let origin = Vector3::new(
            self.zoom * (u * 2.0 - 1.0),
            self.zoom * height / width * -(v * 2.0 - 1.0),
            self.depth,
        );
        Ray::new(origin, VIEW_DIRECTION)
    }

    /// Average the occlusion-shaded sub-samples of one pixel.
    ///
    /// Each sub-sample is divided by the sub-sample count before being summed,
    /// truncating per sample, so the result never exceeds 255. `oversampling`
    /// must be at most [`MAX_OVERSAMPLING`](crate::config::MAX_OVERSAMPLING).
    pub fn shade_pixel<R: Rng + ?Sized>(
        &self,
        tracer: &Tracer<'_>,
        x: u32,
        y: u32,
        rng: &mut R,
    ) -> Result<Rgb<u8>, TraceError> {
        let count = self.oversampling * self.oversampling;
        let mut sum = [0u32; 3];

        for sy in 0..self.oversampling {
            for sx in 0..self.oversampling {
                let ray = self.primary_ray(x, y, sx, sy)?;
                let mode = TraceMode::ShadeResult { seed: rng.random() };
                let Rgb(sample) = tracer.trace(&ray, mode)?.color_or(self.background);
                for (acc, channel) in sum.iter_mut().zip(sample) {
                    *acc += u32::from(channel) / count;
                }
            }
        }

        Ok(Rgb(sum.map(|c| c.min(255) as u8)))
    }

    /// Renders the occlusion-shaded image.
    ///
    /// Rows are rendered in parallel. Pixel `(x, y)` draws its randomness from
    /// stream `y * width + x` of `seed`, so the result depends only on the
    /// seed.
    pub fn render(&self, tracer: &Tracer<'_>, seed: u64) -> Result<RgbImage, RenderError> {
        let width = self.image_width;
        let pb = self.progress_bar();

        info!("Generating image using {} CPU cores...", rayon::current_num_threads());
        let generation_start = std::time::Instant::now();

        let rows = (0..self.image_height)
            .into_par_iter()
            .map(|y| -> Result<Vec<u8>, TraceError> {
                let mut row = Vec::with_capacity(width as usize * 3);
                for x in 0..width {
                    let mut rng = random::stream(seed, u64::from(y) * u64::from(width) + u64::from(x));
                    let Rgb(pixel) = self.shade_pixel(tracer, x, y, &mut rng)?;
                    row.extend_from_slice(&pixel);
                }
                pb.inc(1);
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        let raw = rows.concat();
        let len = raw.len();
        RgbImage::from_raw(width, self.image_height, raw).ok_or(RenderError::BufferSize {
            width,
            height: self.image_height,
            len,
        })
    }

    /// Renders a binary silhouette: 255 where a primary ray hits, 0 elsewhere.
    ///
    /// One hit-test-only ray per pixel, no occlusion sampling.
    pub fn render_silhouette(&self, tracer: &Tracer<'_>) -> Result<GrayImage, RenderError> {
        let camera = Camera {
            oversampling: 1,
            ..self.clone()
        };
        let width = camera.image_width;
        let pb = camera.progress_bar();

        let generation_start = std::time::Instant::now();

        let rows = (0..camera.image_height)
            .into_par_iter()
            .map(|y| -> Result<Vec<u8>, TraceError> {
                let row = (0..width)
                    .map(|x| -> Result<u8, TraceError> {
                        let ray = camera.primary_ray(x, y, 0, 0)?;
                        let hit = tracer.trace(&ray, TraceMode::HitTestOnly)?.is_hit();
                        Ok(if hit { 255 } else { 0 })
                    })
                    .collect::<Result<Vec<u8>, TraceError>>()?;
                pb.inc(1);
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        pb.finish_and_clear();
        info!("Silhouette generated in {:.2?}", generation_start.elapsed());

        let raw = rows.concat();
        let len = raw.len();
        GrayImage::from_raw(width, camera.image_height, raw).ok_or(RenderError::BufferSize {
            width,
            height: camera.image_height,
            len,
        })
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(u64::from(self.image_height));
        let style = ProgressStyle::with_template("{percent:>3} % {bar:40} rows {pos}/{len} ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a silhouette pixel marks a hit.
pub fn is_silhouette_hit(pixel: Luma<u8>) -> bool {
    pixel.0[0] != 0
}

//! # Output Module
//!
//! Writes rendered images:
//! - plain-text PPM (`P3`) for shaded images
//! - plain-text PBM (`P1`) for silhouettes
//! - PNG for either, through the `image` crate
//!
//! The text writers emit one line per image row with every value followed by
//! a single space, which is what downstream tooling for this renderer expects.
//! They work on any `Write`, so the binary can stream straight to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{GrayImage, RgbImage};
use log::{debug, info};

use crate::camera::is_silhouette_hit;
use crate::error::OutputError;
use crate::render::RenderedImage;

/// Write a shaded image as plain PPM (`P3`, maxval 255).
pub fn write_ppm<W: Write>(image: &RgbImage, mut out: W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    writeln!(out, "P3")?;
    writeln!(out, "{} {} 255", width, height)?;

    for row in image.rows() {
        for pixel in row {
            let [r, g, b] = pixel.0;
            write!(out, "{} {} {} ", r, g, b)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Write a silhouette as plain PBM (`P1`).
///
/// PBM marks a hit with `0` and background with `1`.
pub fn write_pbm<W: Write>(image: &GrayImage, mut out: W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    writeln!(out, "P1")?;
    writeln!(out, "{} {}", width, height)?;

    for row in image.rows() {
        for pixel in row {
            let bit = u8::from(!is_silhouette_hit(*pixel));
            write!(out, "{} ", bit)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Stream `image` to stdout in its plain-text format.
pub fn write_to_stdout(image: &RenderedImage) -> Result<(), OutputError> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match image {
        RenderedImage::Shaded(image) => write_ppm(image, out)?,
        RenderedImage::Silhouette(image) => write_pbm(image, out)?,
    }
    debug!("Image written to stdout");
    Ok(())
}

/// Save `image` to `output_path`, choosing the format from the extension.
///
/// Shaded images accept `.ppm` and `.png`, silhouettes `.pbm` and `.png`.
/// `-` streams to stdout instead.
pub fn save_image(image: &RenderedImage, output_path: &str) -> Result<(), OutputError> {
    if output_path == "-" {
        return write_to_stdout(image);
    }

    let extension = Path::new(output_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match (image, extension.as_str()) {
        (RenderedImage::Shaded(image), "ppm") => write_ppm(image, create(output_path)?)?,
        (RenderedImage::Silhouette(image), "pbm") => write_pbm(image, create(output_path)?)?,
        (RenderedImage::Shaded(image), "png") => image.save(output_path)?,
        (RenderedImage::Silhouette(image), "png") => image.save(output_path)?,
        (RenderedImage::Shaded(_), _) => {
            return Err(OutputError::UnsupportedExtension {
                path: output_path.to_string(),
                kind: "shaded",
                expected: ".ppm or .png",
            })
        }
        (RenderedImage::Silhouette(_), _) => {
            return Err(OutputError::UnsupportedExtension {
                path: output_path.to_string(),
                kind: "silhouette",
                expected: ".pbm or .png",
            })
        }
    }

    info!("Image saved as {}", output_path);
    Ok(())
}

fn create(path: &str) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

//! Error types for tracing, rendering and image output.

/// Geometric preconditions rejected before any intersection math runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraceError {
    /// Ray direction is zero-length or not finite.
    #[error("Degenerate ray: direction {direction:?} has zero length or is not finite")]
    DegenerateRay {
        /// The rejected direction, as `[x, y, z]`.
        direction: [f32; 3],
    },

    /// Sphere radius is not a positive finite number.
    #[error("Invalid sphere: radius {radius} must be positive and finite")]
    InvalidSphere {
        /// The rejected radius.
        radius: f32,
    },
}

/// Failures surfaced by the render entry point.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A render setting is out of range.
    #[error("Configuration validation error: {0}")]
    Validation(String),

    /// A ray or sphere failed validation during the render.
    #[error("Trace error: {0}")]
    Trace(#[from] TraceError),

    /// Rendered rows did not add up to the requested image size.
    #[error("Image buffer of {len} bytes does not match {width}x{height}")]
    BufferSize {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Byte length actually produced.
        len: usize,
    },
}

/// Failures while writing a rendered image.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Writing to the output stream or file failed.
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The `image` crate failed to encode the buffer.
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The output path has an extension no writer handles for this image.
    #[error("Unsupported output '{path}' for a {kind} image (expected {expected})")]
    UnsupportedExtension {
        /// The requested output path.
        path: String,
        /// Which kind of image was rendered.
        kind: &'static str,
        /// Extensions accepted for that kind.
        expected: &'static str,
    },
}

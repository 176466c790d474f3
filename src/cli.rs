use clap::{Parser, ValueEnum};
use image::Rgb;
use log::LevelFilter;

use aotrace::config::{RenderConfig, RenderMode};
use aotrace::error::TraceError;
use aotrace::scene::HitPolicy;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "aotrace")]
#[command(about = "Render spheres with Monte Carlo ambient occlusion")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "1920", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "1080", help = "Image height in pixels")]
    pub height: u32,

    /// Sub-samples per pixel along each axis
    #[arg(long, default_value = "4", help = "Sub-samples per pixel along each axis")]
    pub oversampling: u32,

    /// Half-width of the orthographic viewport
    #[arg(long, default_value = "2.0", help = "Half-width of the orthographic viewport")]
    pub zoom: f32,

    /// Z coordinate primary rays start from
    #[arg(long, default_value = "10.0", help = "Z coordinate primary rays start from")]
    pub depth: f32,

    /// Number of occlusion rays per hit
    #[arg(long, short = 's', default_value = "100", help = "Number of occlusion rays per hit")]
    pub samples: u32,

    /// Offset of occlusion ray origins along their direction
    #[arg(long, default_value = "0.001", help = "Offset of occlusion ray origins along their direction")]
    pub epsilon: f32,

    /// Background color as R,G,B
    #[arg(long, value_parser = parse_rgb, default_value = "0,0,0", help = "Background color as R,G,B")]
    pub background: Rgb<u8>,

    /// Seed for reproducible renders (random when omitted)
    #[arg(long, help = "Seed for reproducible renders (random when omitted)")]
    pub seed: Option<u64>,

    /// Render a hit/miss silhouette instead of the shaded image
    #[arg(long, help = "Render a hit/miss silhouette instead of the shaded image")]
    pub silhouette: bool,

    /// Report the nearest sphere along each ray instead of the first listed
    #[arg(long, help = "Report the nearest sphere along each ray instead of the first listed")]
    pub nearest_hit: bool,

    /// Worker threads (defaults to one per core)
    #[arg(long, short = 'j', help = "Worker threads (defaults to one per core)")]
    pub threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long, help = "Hide the progress bar")]
    pub no_progress: bool,

    /// Output file path (.ppm/.pbm plain text, .png), or - for stdout
    #[arg(short, long, default_value = "-", help = "Output file path (.ppm/.pbm plain text, .png), or - for stdout")]
    pub output: String,
}

impl Args {
    /// Build the render configuration these arguments describe.
    pub fn to_config(&self) -> Result<RenderConfig, TraceError> {
        let mut config = RenderConfig::new()?;
        config.width = self.width;
        config.height = self.height;
        config.oversampling = self.oversampling;
        config.zoom = self.zoom;
        config.depth = self.depth;
        config.occlusion_samples = self.samples;
        config.epsilon = self.epsilon;
        config.background = self.background;
        config.seed = self.seed;
        config.show_progress = !self.no_progress;
        config.mode = if self.silhouette {
            RenderMode::Silhouette
        } else {
            RenderMode::Shaded
        };

        let policy = if self.nearest_hit {
            HitPolicy::Nearest
        } else {
            HitPolicy::FirstInList
        };
        Ok(config.with_hit_policy(policy))
    }
}

/// Parse `R,G,B` with each channel in 0..=255.
fn parse_rgb(s: &str) -> Result<Rgb<u8>, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<u8>().map_err(|e| format!("invalid channel '{}': {}", c, e)))
        .collect::<Result<Vec<u8>, String>>()?;
    match channels.as_slice() {
        [r, g, b] => Ok(Rgb([*r, *g, *b])),
        _ => Err(format!("expected R,G,B but got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let args = Args::parse_from(["aotrace"]);
        let config = args.to_config().unwrap();
        let defaults = RenderConfig::new().unwrap();
        assert_eq!(config.width, defaults.width);
        assert_eq!(config.height, defaults.height);
        assert_eq!(config.oversampling, defaults.oversampling);
        assert_eq!(config.occlusion_samples, defaults.occlusion_samples);
        assert_eq!(config.background, defaults.background);
        assert_eq!(config.mode, RenderMode::Shaded);
        assert_eq!(config.scene.policy(), HitPolicy::FirstInList);
        assert_eq!(args.output, "-");
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "aotrace",
            "--width",
            "320",
            "--height",
            "200",
            "--silhouette",
            "--nearest-hit",
            "--seed",
            "42",
            "--background",
            "10, 20,30",
            "-o",
            "mask.pbm",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.mode, RenderMode::Silhouette);
        assert_eq!(config.scene.policy(), HitPolicy::Nearest);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.background, Rgb([10, 20, 30]));
        assert_eq!(args.output, "mask.pbm");
    }

    #[test]
    fn test_parse_rgb_errors() {
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,300").is_err());
        assert!(parse_rgb("a,b,c").is_err());
    }
}

//! aotrace ray tracer
//!
//! Renders spheres through an orthographic camera and shades every hit with a
//! Monte Carlo ambient occlusion estimate. Outputs plain PPM/PBM or PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod ray;
pub mod sphere;
pub mod hittable;
pub mod scene;
pub mod tracer;
pub mod occlusion;
pub mod random;
pub mod camera;
pub mod config;
pub mod render;
pub mod output;
pub mod error;

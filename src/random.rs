//! Random number generation for ray tracing.
//!
//! Every random draw in a render comes from a ChaCha20 stream derived from the
//! run seed, so parallel workers never share a generator and a fixed seed
//! reproduces an image exactly regardless of scheduling.

use std::f32::consts::{FRAC_PI_2, TAU};

use rand::{Rng, SeedableRng, rng};
use rand_chacha::ChaCha20Rng;

use crate::vector::Vector3;

/// Draw a fresh run seed from the thread-local OS-seeded generator.
pub fn entropy_seed() -> u64 {
    rng().random()
}

/// Independent generator for one stream of a seed.
///
/// Pixels use their linear index as the stream, occlusion samples their
/// sample index.
pub fn stream(seed: u64, stream: u64) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Spherical angles of one hemisphere sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphereSample {
    /// Angle from the pole, in [0, pi/2)
    pub inclination: f32,
    /// Angle around the pole, in [0, 2pi)
    pub azimuth: f32,
}

impl HemisphereSample {
    /// Draw inclination and azimuth independently and uniformly.
    ///
    /// Uniform over the angles, not over solid angle, so samples bunch up
    /// near the pole.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            inclination: rng.random_range(0.0..FRAC_PI_2),
            azimuth: rng.random_range(0.0..TAU),
        }
    }

    /// Direction in the local frame where +Z is the pole.
    pub fn local_direction(&self) -> Vector3 {
        let (sin_inc, cos_inc) = self.inclination.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vector3::new(cos_az * sin_inc, sin_az * sin_inc, cos_inc)
    }
}

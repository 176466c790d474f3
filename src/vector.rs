//! Vector algebra over `glam::Vec3A`.
//!
//! The tracer only needs add, subtract, scale, dot and cross, all of which
//! `Vec3A` provides as exact `f32` arithmetic. Nothing here normalizes.

use glam::Vec3A;

/// 3-component vector used for points, directions and normals.
pub type Vector3 = Vec3A;

/// Unit X axis, the primary reference for tangent construction.
pub const X_AXIS: Vector3 = Vec3A::X;

/// Unit Y axis, used when the normal is parallel to [`X_AXIS`].
pub const Y_AXIS: Vector3 = Vec3A::Y;

/// Scale `v` by `s`.
#[inline]
pub fn scale(s: f32, v: Vector3) -> Vector3 {
    s * v
}

/// Build two vectors spanning the plane orthogonal to `normal`.
///
/// Crossing with the X axis degenerates when the normal lies along X, so that
/// case crosses with Y instead. Neither result is normalized; the occlusion
/// sampler only uses them as a linear frame.
pub fn tangent_basis(normal: Vector3) -> (Vector3, Vector3) {
    let reference = if normal.y == 0.0 && normal.z == 0.0 {
        Y_AXIS
    } else {
        X_AXIS
    };
    let tangent = normal.cross(reference);
    let bitangent = normal.cross(tangent);
    (tangent, bitangent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const EPS: f32 = 1e-3;

    fn random_vectors(count: usize) -> Vec<Vector3> {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        (0..count)
            .map(|_| {
                Vector3::new(
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_add_sub_scale() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        assert_eq!(a + b, Vector3::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Vector3::new(5.0, 1.5, 1.0));
        assert_eq!(scale(2.0, a), Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_cross_of_axes() {
        assert_eq!(X_AXIS.cross(Y_AXIS), Vec3A::Z);
        assert_eq!(Y_AXIS.cross(X_AXIS), -Vec3A::Z);
    }

    #[test]
    fn test_dot_is_symmetric() {
        let vs = random_vectors(32);
        for pair in vs.windows(2) {
            assert_eq!(pair[0].dot(pair[1]), pair[1].dot(pair[0]));
        }
    }

    #[test]
    fn test_cross_is_orthogonal_and_anticommutative() {
        let vs = random_vectors(32);
        for pair in vs.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let c = u.cross(v);
            // Tolerance relative to the magnitudes involved.
            let tol = EPS * u.length() * v.length() * (u.length() + v.length());
            assert!(c.dot(u).abs() < tol);
            assert!(c.dot(v).abs() < tol);
            assert_eq!(c, -v.cross(u));
        }
    }

    #[test]
    fn test_tangent_basis_is_orthogonal() {
        let normal = Vector3::new(0.3, -1.2, 0.7);
        let (t1, t2) = tangent_basis(normal);
        assert!(t1.dot(normal).abs() < EPS);
        assert!(t2.dot(normal).abs() < EPS);
        assert!(t1.dot(t2).abs() < EPS);
        assert!(t1.length_squared() > 0.0);
        assert!(t2.length_squared() > 0.0);
    }

    #[test]
    fn test_tangent_basis_normal_along_x() {
        for normal in [Vector3::new(2.0, 0.0, 0.0), Vector3::new(-0.5, 0.0, 0.0)] {
            let (t1, t2) = tangent_basis(normal);
            assert!(t1.length_squared() > 0.0);
            assert!(t2.length_squared() > 0.0);
            assert_eq!(t1.dot(normal), 0.0);
            assert_eq!(t2.dot(normal), 0.0);
        }
    }
}

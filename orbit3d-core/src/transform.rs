/// Model matrix construction from translate-rotate-scale components
use nalgebra::{Matrix4, Vector3};

/// Build a scale matrix with `s` on the diagonal.
///
/// A zero component collapses that dimension; degenerate but not an error.
pub fn scale_matrix(s: &Vector3<f32>) -> Matrix4<f32> {
    let mut m = Matrix4::identity();
    m[(0, 0)] = s.x;
    m[(1, 1)] = s.y;
    m[(2, 2)] = s.z;
    m
}

/// Build a rotation matrix from Euler angles in radians
/// (x = pitch, y = yaw, z = roll).
///
/// Composed as pitch * yaw * roll, so a vector is rolled first, then
/// yawed, then pitched. The 3x3 block is orthonormal for any input.
pub fn rotation_matrix(e: &Vector3<f32>) -> Matrix4<f32> {
    let (sx, cx) = e.x.sin_cos();
    let (sy, cy) = e.y.sin_cos();
    let (sz, cz) = e.z.sin_cos();

    #[rustfmt::skip]
    let pitch = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0,  cx, -sx, 0.0,
        0.0,  sx,  cx, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    #[rustfmt::skip]
    let yaw = Matrix4::new(
         cy, 0.0,  sy, 0.0,
        0.0, 1.0, 0.0, 0.0,
        -sy, 0.0,  cy, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    #[rustfmt::skip]
    let roll = Matrix4::new(
         cz, -sz, 0.0, 0.0,
         sz,  cz, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    pitch * yaw * roll
}

/// Build a translation matrix moving the origin to `p`.
pub fn translation_matrix(p: &Vector3<f32>) -> Matrix4<f32> {
    let mut m = Matrix4::identity();
    m[(0, 3)] = p.x;
    m[(1, 3)] = p.y;
    m[(2, 3)] = p.z;
    m
}

/// Translate-rotate-scale state for one rendered object
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    /// World-space translation
    pub position: Vector3<f32>,
    /// Euler angles in radians (x = pitch, y = yaw, z = roll)
    pub rotation: Vector3<f32>,
    /// Per-axis scale factors
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn new(position: Vector3<f32>, rotation: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Compose the model matrix as translate * rotate * scale.
    ///
    /// Applied to a vertex as `M * v`: the object is scaled first, then
    /// rotated about its own origin, then translated into world space.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        translation_matrix(&self.position)
            * rotation_matrix(&self.rotation)
            * scale_matrix(&self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    #[test]
    fn test_default_is_identity() {
        let transform = Transform::default();
        assert!((transform.model_matrix() - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = rotation_matrix(&Vector3::zeros());
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_block_is_orthonormal() {
        let angle_sets = [
            Vector3::new(0.3, 0.0, 0.0),
            Vector3::new(0.0, 1.2, 0.0),
            Vector3::new(0.0, 0.0, -2.1),
            Vector3::new(0.7, -1.9, 2.4),
            Vector3::new(std::f32::consts::FRAC_PI_2, std::f32::consts::PI, 0.1),
        ];

        for angles in angle_sets {
            let m = rotation_matrix(&angles);
            let block = m.fixed_view::<3, 3>(0, 0);
            for i in 0..3 {
                for j in 0..3 {
                    let dot = block.column(i).dot(&block.column(j));
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!(
                        (dot - expected).abs() < 1e-5,
                        "columns {} and {} not orthonormal for {:?}",
                        i,
                        j,
                        angles
                    );
                }
            }
        }
    }

    #[test]
    fn test_scale_then_translate_order() {
        // Scale (2,1,1) applied before translation (1,0,0) must take the
        // point (1,0,0) to (3,0,0). The reversed order would give (4,0,0).
        let transform = Transform::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::zeros(),
            Vector3::new(2.0, 1.0, 1.0),
        );
        let mapped = transform.model_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((mapped - Vector4::new(3.0, 0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_zero_scale_collapses_axis() {
        let m = scale_matrix(&Vector3::new(0.0, 1.0, 1.0));
        let mapped = m * Vector4::new(5.0, 2.0, 3.0, 1.0);
        assert!((mapped - Vector4::new(0.0, 2.0, 3.0, 1.0)).norm() < 1e-6);
    }
}

/// Orbiting camera: look-at view derivation and projection matrices
use nalgebra::{Matrix4, Point3, Vector3};

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Camera state for the orbiting view.
///
/// Degenerate configurations (`eye == target`, `world_up` parallel to the
/// view direction, `far == near`, zero aspect, fov at 0 or pi) are not
/// checked here; they propagate as non-finite matrix entries. Callers
/// clamp their parameter ranges instead.
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub world_up: Vector3<f32>,
    /// Vertical field of view in radians (perspective mode only)
    pub fov: f32,
    /// Vertical extent of the view volume (orthographic mode only)
    pub orthographic_size: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 1.0),
            target: Point3::new(0.0, 0.0, 0.0),
            world_up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            orthographic_size: 10.0,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Advance the eye along its orbit around the target.
    ///
    /// The eye is renormalized to unit length before the tangential step,
    /// then snapped back onto the sphere of radius `orbit_radius` around
    /// the target, so it always ends the update exactly `orbit_radius`
    /// away. A zero or negative `delta_time` is a harmless no-step.
    pub fn update_eye(&mut self, orbit_speed: f32, orbit_radius: f32, delta_time: f32) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(&self.world_up).normalize();

        let advanced = self.eye.coords.normalize() + right * orbit_speed * delta_time;
        let diff = (advanced - self.target.coords).normalize() * orbit_radius;
        self.eye = self.target + diff;
    }

    /// Derive the world-to-camera matrix from eye, target and up hint.
    ///
    /// The camera basis (right, up, -forward) forms an orthonormal
    /// rotation, so its inverse is the transpose; the full view matrix is
    /// that transpose composed with the negated eye translation. The eye
    /// itself always maps to the camera-space origin.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(&self.world_up).normalize();
        let up = right.cross(&forward).normalize();

        #[rustfmt::skip]
        let rotation = Matrix4::new(
            right.x, up.x, -forward.x, 0.0,
            right.y, up.y, -forward.y, 0.0,
            right.z, up.z, -forward.z, 0.0,
                0.0,  0.0,        0.0, 1.0,
        );

        rotation.transpose() * translation_to(-self.eye.coords)
    }

    /// Standard symmetric-frustum perspective projection.
    ///
    /// Depth convention: view-space z = -near maps to clip z/w = -1,
    /// z = -far maps to +1, with w_clip = -z_view.
    pub fn perspective_matrix(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
        let c = (fov / 2.0).tan();

        #[rustfmt::skip]
        let proj = Matrix4::new(
            1.0 / (aspect_ratio * c), 0.0,     0.0,                          0.0,
            0.0,                      1.0 / c, 0.0,                          0.0,
            0.0,                      0.0,     -(far + near) / (far - near), -(2.0 * far * near) / (far - near),
            0.0,                      0.0,     -1.0,                         0.0,
        );
        proj
    }

    /// Standard symmetric-box orthographic projection.
    ///
    /// `height` is the full vertical extent of the view volume; the
    /// horizontal extent is `height * aspect_ratio`. Same near/far depth
    /// convention as the perspective variant.
    pub fn orthographic_matrix(height: f32, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
        let top = height / 2.0;
        let bottom = -top;
        let right = top * aspect_ratio;
        let left = -right;

        #[rustfmt::skip]
        let proj = Matrix4::new(
            2.0 / (right - left), 0.0,                  0.0,                 -(right + left) / (right - left),
            0.0,                  2.0 / (top - bottom), 0.0,                 -(top + bottom) / (top - bottom),
            0.0,                  0.0,                  -2.0 / (far - near), -(far + near) / (far - near),
            0.0,                  0.0,                  0.0,                 1.0,
        );
        proj
    }

    /// Projection matrix for the current mode and parameters.
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Self::perspective_matrix(self.fov, aspect_ratio, near, far)
            }
            ProjectionMode::Orthographic => {
                Self::orthographic_matrix(self.orthographic_size, aspect_ratio, near, far)
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

fn translation_to(offset: Vector3<f32>) -> Matrix4<f32> {
    let mut m = Matrix4::identity();
    m[(0, 3)] = offset.x;
    m[(1, 3)] = offset.y;
    m[(2, 3)] = offset.z;
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector4;

    fn orbit_camera(eye: Point3<f32>) -> Camera {
        Camera {
            eye,
            ..Camera::new()
        }
    }

    #[test]
    fn test_orbit_radius_invariant() {
        let mut camera = orbit_camera(Point3::new(0.0, 2.0, 7.0));
        let radius = 10.0;

        for _ in 0..120 {
            camera.update_eye(2.0, radius, 1.0 / 60.0);
            let distance = (camera.eye - camera.target).norm();
            assert!((distance - radius).abs() < 1e-4);
            assert!(camera.eye.coords.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_orbit_radius_invariant_off_origin_target() {
        let mut camera = orbit_camera(Point3::new(3.0, 1.0, 5.0));
        camera.target = Point3::new(1.0, -1.0, 0.0);
        let radius = 4.0;

        for _ in 0..60 {
            camera.update_eye(5.0, radius, 1.0 / 30.0);
            let distance = (camera.eye - camera.target).norm();
            assert!((distance - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_zero_delta_time_is_noop() {
        // Eye already on the orbit sphere: the re-clamp keeps it in place.
        let mut camera = orbit_camera(Point3::new(0.0, 0.0, 10.0));
        camera.update_eye(25.0, 10.0, 0.0);
        assert!((camera.eye - Point3::new(0.0, 0.0, 10.0)).norm() < 1e-5);
    }

    #[test]
    fn test_eye_advances_with_positive_delta_time() {
        let mut camera = orbit_camera(Point3::new(0.0, 0.0, 10.0));
        camera.update_eye(2.0, 10.0, 0.1);
        assert!((camera.eye - Point3::new(0.0, 0.0, 10.0)).norm() > 1e-3);
    }

    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let configurations = [
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(3.0, 4.0, -2.0),
            Point3::new(-7.5, 1.0, 0.5),
        ];

        for eye in configurations {
            let camera = orbit_camera(eye);
            let view = camera.view_matrix();
            let mapped = view * Vector4::new(eye.x, eye.y, eye.z, 1.0);
            assert!(
                (mapped - Vector4::new(0.0, 0.0, 0.0, 1.0)).norm() < 1e-4,
                "eye {:?} did not map to the origin: {:?}",
                eye,
                mapped
            );
        }
    }

    #[test]
    fn test_view_matrix_looks_down_negative_z() {
        let camera = orbit_camera(Point3::new(0.0, 0.0, 5.0));
        let view = camera.view_matrix();
        let mapped = view * Vector4::new(0.0, 0.0, 0.0, 1.0);
        // Target sits in front of the camera, along its negative z axis.
        assert!((mapped - Vector4::new(0.0, 0.0, -5.0, 1.0)).norm() < 1e-4);
    }

    #[test]
    fn test_perspective_near_far_depth_mapping() {
        let proj = Camera::perspective_matrix(1.0, 16.0 / 9.0, 0.1, 100.0);

        let near_clip = proj * Vector4::new(0.0, 0.0, -0.1, 1.0);
        assert!((near_clip.z / near_clip.w - -1.0).abs() < 1e-4);

        let far_clip = proj * Vector4::new(0.0, 0.0, -100.0, 1.0);
        assert!((far_clip.z / far_clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_orthographic_near_far_depth_mapping() {
        let proj = Camera::orthographic_matrix(10.0, 16.0 / 9.0, 0.1, 100.0);

        let near_clip = proj * Vector4::new(0.0, 0.0, -0.1, 1.0);
        assert!((near_clip.z / near_clip.w - -1.0).abs() < 1e-4);

        let far_clip = proj * Vector4::new(0.0, 0.0, -100.0, 1.0);
        assert!((far_clip.z / far_clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_doubling_aspect_halves_horizontal_scale() {
        let fov = 1.2;
        let narrow = Camera::perspective_matrix(fov, 1.0, 0.1, 100.0);
        let wide = Camera::perspective_matrix(fov, 2.0, 0.1, 100.0);
        assert!((wide[(0, 0)] - narrow[(0, 0)] / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_matrix_dispatches_on_mode() {
        let mut camera = Camera::new();
        camera.mode = ProjectionMode::Perspective;
        let persp = camera.projection_matrix(1.5, 0.1, 100.0);
        assert!(
            (persp - Camera::perspective_matrix(camera.fov, 1.5, 0.1, 100.0)).norm() < 1e-6
        );

        camera.mode = ProjectionMode::Orthographic;
        let ortho = camera.projection_matrix(1.5, 0.1, 100.0);
        assert!(
            (ortho - Camera::orthographic_matrix(camera.orthographic_size, 1.5, 0.1, 100.0))
                .norm()
                < 1e-6
        );
    }
}

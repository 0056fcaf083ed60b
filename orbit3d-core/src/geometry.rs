/// Mesh primitives consumed by the rasterizing frontends
use nalgebra::{Point3, Vector3};

/// A vertex with position and outward normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Face normal from the winding of the vertex positions.
    pub fn face_normal(&self) -> Vector3<f32> {
        let [a, b, c] = &self.vertices;
        let edge1 = b.position - a.position;
        let edge2 = c.position - a.position;
        edge1.cross(&edge2).normalize()
    }
}

/// A triangle-list mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Build an axis-aligned cube of the given edge length, centered at
    /// the origin, as 12 triangles with per-face normals.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;

        // Each face: outward normal plus its four corners, counter-clockwise
        // when viewed from outside.
        let faces: [(Vector3<f32>, [Point3<f32>; 4]); 6] = [
            (
                Vector3::new(0.0, 0.0, 1.0),
                [
                    Point3::new(-h, -h, h),
                    Point3::new(h, -h, h),
                    Point3::new(h, h, h),
                    Point3::new(-h, h, h),
                ],
            ),
            (
                Vector3::new(0.0, 0.0, -1.0),
                [
                    Point3::new(h, -h, -h),
                    Point3::new(-h, -h, -h),
                    Point3::new(-h, h, -h),
                    Point3::new(h, h, -h),
                ],
            ),
            (
                Vector3::new(1.0, 0.0, 0.0),
                [
                    Point3::new(h, -h, h),
                    Point3::new(h, -h, -h),
                    Point3::new(h, h, -h),
                    Point3::new(h, h, h),
                ],
            ),
            (
                Vector3::new(-1.0, 0.0, 0.0),
                [
                    Point3::new(-h, -h, -h),
                    Point3::new(-h, -h, h),
                    Point3::new(-h, h, h),
                    Point3::new(-h, h, -h),
                ],
            ),
            (
                Vector3::new(0.0, 1.0, 0.0),
                [
                    Point3::new(-h, h, h),
                    Point3::new(h, h, h),
                    Point3::new(h, h, -h),
                    Point3::new(-h, h, -h),
                ],
            ),
            (
                Vector3::new(0.0, -1.0, 0.0),
                [
                    Point3::new(-h, -h, -h),
                    Point3::new(h, -h, -h),
                    Point3::new(h, -h, h),
                    Point3::new(-h, -h, h),
                ],
            ),
        ];

        let mut mesh = Self::with_capacity(faces.len() * 2);
        for (normal, [a, b, c, d]) in faces {
            let va = Vertex::new(a, normal);
            let vb = Vertex::new(b, normal);
            let vc = Vertex::new(c, normal);
            let vd = Vertex::new(d, normal);
            mesh.add_triangle(Triangle::new(va, vb, vc));
            mesh.add_triangle(Triangle::new(va, vc, vd));
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_triangle_count() {
        let mesh = Mesh::cube(2.0);
        assert_eq!(mesh.triangles.len(), 12);
    }

    #[test]
    fn test_cube_face_normals_match_winding() {
        // The winding-derived normal must agree with the stored per-face
        // normal, or back-face shading flips.
        let mesh = Mesh::cube(1.0);
        for triangle in &mesh.triangles {
            let derived = triangle.face_normal();
            let stored = triangle.vertices[0].normal;
            assert!((derived - stored).norm() < 1e-5, "winding mismatch");
        }
    }

    #[test]
    fn test_cube_vertices_on_surface() {
        let mesh = Mesh::cube(3.0);
        for triangle in &mesh.triangles {
            for vertex in &triangle.vertices {
                let max_axis = vertex
                    .position
                    .coords
                    .iter()
                    .map(|v| v.abs())
                    .fold(0.0f32, f32::max);
                assert!((max_axis - 1.5).abs() < 1e-6);
            }
        }
    }
}

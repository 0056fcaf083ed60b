/// Orbit3D Core Library - Camera and transform math
///
/// The stateless math core of the orbiting-camera demo: TRS model matrix
/// construction, the look-at view derivation with the orbital eye update,
/// perspective/orthographic projections, and the cube mesh the frontends
/// rasterize. Everything here is pure computation over fixed-size
/// nalgebra types; matrices are recomputed from source parameters every
/// frame, nothing is cached.

pub mod camera;
pub mod geometry;
pub mod transform;

// Re-export commonly used types
pub use camera::{Camera, ProjectionMode};
pub use geometry::{Mesh, Triangle, Vertex};
pub use transform::{Transform, rotation_matrix, scale_matrix, translation_matrix};

/// Randomized cube scene setup
use nalgebra::Vector3;
use orbit3d_core::Transform;
use rand::Rng;

/// Number of cubes in the demo scene
pub const CUBE_COUNT: usize = 8;

const POSITION_RANGE: f32 = 5.0;
const SCALE_MIN: f32 = 0.2;
const SCALE_MAX: f32 = 3.2;

/// Generate `count` transforms with randomized position, rotation and
/// uniform scale. Positions land in a cube of half-extent
/// `POSITION_RANGE` around the origin; rotations cover the full angle
/// range in radians.
pub fn random_transforms<R: Rng>(count: usize, rng: &mut R) -> Vec<Transform> {
    (0..count).map(|_| random_transform(rng)).collect()
}

fn random_transform<R: Rng>(rng: &mut R) -> Transform {
    let position = Vector3::new(
        rng.gen_range(-POSITION_RANGE..POSITION_RANGE),
        rng.gen_range(-POSITION_RANGE..POSITION_RANGE),
        rng.gen_range(-POSITION_RANGE..POSITION_RANGE),
    );
    let rotation = Vector3::new(
        rng.gen_range(0.0..std::f32::consts::TAU),
        rng.gen_range(0.0..std::f32::consts::TAU),
        rng.gen_range(0.0..std::f32::consts::TAU),
    );
    let uniform = rng.gen_range(SCALE_MIN..SCALE_MAX);
    Transform::new(position, rotation, Vector3::from_element(uniform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_transform_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_transforms(CUBE_COUNT, &mut rng).len(), CUBE_COUNT);
    }

    #[test]
    fn test_transforms_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for transform in random_transforms(64, &mut rng) {
            for axis in 0..3 {
                assert!(transform.position[axis].abs() < POSITION_RANGE);
                assert!(transform.rotation[axis] >= 0.0);
                assert!(transform.rotation[axis] < std::f32::consts::TAU);
            }
            assert!(transform.scale.x >= SCALE_MIN && transform.scale.x < SCALE_MAX);
            // Uniform scale: all axes share one factor
            assert_eq!(transform.scale.x, transform.scale.y);
            assert_eq!(transform.scale.x, transform.scale.z);
        }
    }
}

/// Orbit3D Terminal Demo - Orbiting camera over randomized cubes
///
/// Renders a fixed set of cubes with randomized transforms while the
/// camera orbits the origin. Controls:
///   - Up/Down: Orbit radius
///   - Left/Right: Orbit speed
///   - f/F: Field of view
///   - s/S: Orthographic size
///   - O: Toggle orthographic/perspective
///   - N: Reroll cube transforms
///   - Q/ESC: Quit
use orbit3d_core::Mesh;
use orbit3d_terminal::{scene, TerminalApp};
use std::io;

fn main() -> io::Result<()> {
    println!("Orbit3D Terminal Demo - Loading...");

    let cube = Mesh::cube(1.0);
    let transforms = scene::random_transforms(scene::CUBE_COUNT, &mut rand::thread_rng());

    println!("Starting orbit demo (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(cube, transforms)?;
    app.run()?;

    println!("Thank you for trying Orbit3D!");
    Ok(())
}

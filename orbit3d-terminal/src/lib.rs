/// Terminal frontend for the orbiting-camera demo
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use orbit3d_core::{Camera, Mesh, ProjectionMode, Transform};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;
pub mod scene;

pub use renderer::AsciiRenderer;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

// Slider ranges from the settings panel; the math core does no clamping
// of its own.
const ORBIT_RADIUS_RANGE: (f32, f32) = (1.0, 50.0);
const ORBIT_SPEED_RANGE: (f32, f32) = (0.0, 50.0);
const FOV_RANGE: (f32, f32) = (0.5, 3.0);
const ORTHO_SIZE_RANGE: (f32, f32) = (1.0, 100.0);

/// Frame-loop driver: owns the camera, the cube transforms and the orbit
/// settings, and hands the per-frame matrices to the rasterizer.
pub struct TerminalApp {
    mesh: Mesh,
    transforms: Vec<Transform>,
    camera: Camera,
    orbit_radius: f32,
    orbit_speed: f32,
    renderer: AsciiRenderer,
    running: bool,
    last_update: Instant,
    fps_window: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, transforms: Vec<Transform>) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            mesh,
            transforms,
            camera: Camera::new(),
            orbit_radius: 10.0,
            orbit_speed: 2.0,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_update: Instant::now(),
            fps_window: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target
        self.last_update = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Orbit update with wall-clock delta time
            let now = Instant::now();
            let delta_time = (now - self.last_update).as_secs_f32();
            self.last_update = now;
            self.camera
                .update_eye(self.orbit_speed, self.orbit_radius, delta_time);

            // Render
            self.render()?;

            // Frame pacing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter once per second
            let now = Instant::now();
            if (now - self.fps_window).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.fps_window).as_secs_f32();
                self.frame_count = 0;
                self.fps_window = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Up => {
                    self.orbit_radius = clamp_to(self.orbit_radius + 1.0, ORBIT_RADIUS_RANGE);
                }
                KeyCode::Down => {
                    self.orbit_radius = clamp_to(self.orbit_radius - 1.0, ORBIT_RADIUS_RANGE);
                }
                KeyCode::Right => {
                    self.orbit_speed = clamp_to(self.orbit_speed + 0.5, ORBIT_SPEED_RANGE);
                }
                KeyCode::Left => {
                    self.orbit_speed = clamp_to(self.orbit_speed - 0.5, ORBIT_SPEED_RANGE);
                }
                KeyCode::Char('F') => {
                    self.camera.fov = clamp_to(self.camera.fov + 0.05, FOV_RANGE);
                }
                KeyCode::Char('f') => {
                    self.camera.fov = clamp_to(self.camera.fov - 0.05, FOV_RANGE);
                }
                KeyCode::Char('S') => {
                    self.camera.orthographic_size =
                        clamp_to(self.camera.orthographic_size + 1.0, ORTHO_SIZE_RANGE);
                }
                KeyCode::Char('s') => {
                    self.camera.orthographic_size =
                        clamp_to(self.camera.orthographic_size - 1.0, ORTHO_SIZE_RANGE);
                }
                KeyCode::Char('o') => {
                    self.camera.mode = match self.camera.mode {
                        ProjectionMode::Perspective => ProjectionMode::Orthographic,
                        ProjectionMode::Orthographic => ProjectionMode::Perspective,
                    };
                }
                KeyCode::Char('n') => {
                    let count = self.transforms.len();
                    self.transforms = scene::random_transforms(count, &mut rand::thread_rng());
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if self.renderer.width() != width as usize || self.renderer.height() != height as usize {
            self.renderer = AsciiRenderer::new(width as usize, height as usize);
        }
        let aspect_ratio = width as f32 / height as f32;

        // Fixed per-frame order: view, projection, then per-object model
        // matrices, all recomputed from current parameters.
        let view = self.camera.view_matrix();
        let projection = self
            .camera
            .projection_matrix(aspect_ratio, NEAR_PLANE, FAR_PLANE);

        self.renderer.clear();
        for transform in &self.transforms {
            self.renderer
                .render_mesh(&self.mesh, &transform.model_matrix(), &view, &projection);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        self.draw_settings_panel(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn draw_settings_panel<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mode = match self.camera.mode {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
        };

        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Orbit3D | FPS: {:.1} | Up/Down=Radius Left/Right=Speed f/F=FOV s/S=OrthoSize o=Projection n=Reroll q=Quit",
                self.fps
            )),
            cursor::MoveTo(0, 1),
            Print(format!(
                "radius: {:.1}  speed: {:.1}  fov: {:.2} rad  ortho size: {:.1}  projection: {}",
                self.orbit_radius, self.orbit_speed, self.camera.fov, self.camera.orthographic_size, mode
            )),
            ResetColor
        )?;
        Ok(())
    }
}

fn clamp_to(value: f32, range: (f32, f32)) -> f32 {
    value.clamp(range.0, range.1)
}

/// Depth-buffered ASCII rasterizer fed by model/view/projection matrices
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Vector3, Vector4};
use orbit3d_core::{Mesh, Triangle};
use std::io::Write;

/// Character shading ramp, darkest to lightest
const SHADE_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Fixed world-space light direction for lambert shading
fn light_direction() -> Vector3<f32> {
    Vector3::new(0.4, 0.8, 0.45).normalize()
}

/// A vertex projected into screen space, with its NDC depth
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    x: f32,
    y: f32,
    depth: f32,
}

/// Converts triangle meshes to terminal characters.
///
/// Consumes exactly the three matrices the math core derives per frame;
/// it performs the homogeneous divide itself and depth-tests in NDC
/// (near = -1, far = +1).
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn render_mesh(
        &mut self,
        mesh: &Mesh,
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) {
        let mvp = projection * view * model;
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model, &mvp);
        }
    }

    fn render_triangle(&mut self, triangle: &Triangle, model: &Matrix4<f32>, mvp: &Matrix4<f32>) {
        let mut screen = [ScreenVertex {
            x: 0.0,
            y: 0.0,
            depth: 0.0,
        }; 3];

        for (slot, vertex) in screen.iter_mut().zip(&triangle.vertices) {
            let p = vertex.position;
            let clip = mvp * Vector4::new(p.x, p.y, p.z, 1.0);
            if clip.w.abs() < 1e-6 {
                return;
            }
            let ndc = clip.xyz() / clip.w;
            // Whole-triangle clip against the NDC box
            if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
                return;
            }
            *slot = ScreenVertex {
                x: (ndc.x + 1.0) * 0.5 * self.width as f32,
                y: (1.0 - ndc.y) * 0.5 * self.height as f32,
                depth: ndc.z,
            };
        }

        self.fill_triangle(&screen, shade_character(triangle, model));
    }

    fn fill_triangle(&mut self, v: &[ScreenVertex; 3], character: char) {
        let area = edge_function(v[0], v[1], (v[2].x, v[2].y));
        if area.abs() < 1e-6 {
            return;
        }

        let min_x = (v[0].x.min(v[1].x).min(v[2].x).floor() as i32).max(0);
        let max_x = (v[0].x.max(v[1].x).max(v[2].x).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v[0].y.min(v[1].y).min(v[2].y).floor() as i32).max(0);
        let max_y = (v[0].y.max(v[1].y).max(v[2].y).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                // Signed edge weights normalized by the signed area handle
                // either winding.
                let w0 = edge_function(v[1], v[2], p) / area;
                let w1 = edge_function(v[2], v[0], p) / area;
                let w2 = 1.0 - w0 - w1;

                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v[0].depth + w1 * v[1].depth + w2 * v[2].depth;
                let idx = y as usize * self.width + x as usize;
                if depth < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = depth;
                    self.char_buffer[idx] = character;
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    _ => Color::Cyan,
                };
                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            // Raw mode needs an explicit carriage return; skipping the last
            // row's newline avoids scrolling the frame.
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Pick a ramp character from the lambert term of the world-space face
/// normal. The normal is rebuilt from the model-transformed positions, so
/// it stays exact under non-uniform scale.
fn shade_character(triangle: &Triangle, model: &Matrix4<f32>) -> char {
    let world: Vec<Vector3<f32>> = triangle
        .vertices
        .iter()
        .map(|v| {
            let p = v.position;
            (model * Vector4::new(p.x, p.y, p.z, 1.0)).xyz()
        })
        .collect();

    let normal = (world[1] - world[0]).cross(&(world[2] - world[0]));
    let brightness = if normal.norm() > 1e-6 {
        normal.normalize().dot(&light_direction()).max(0.0)
    } else {
        0.0
    };

    let index = (brightness * (SHADE_RAMP.len() - 1) as f32) as usize;
    SHADE_RAMP[index.min(SHADE_RAMP.len() - 1)]
}

/// Signed area of the parallelogram spanned by (b - a) and (p - a)
fn edge_function(a: ScreenVertex, b: ScreenVertex, p: (f32, f32)) -> f32 {
    (b.x - a.x) * (p.1 - a.y) - (b.y - a.y) * (p.0 - a.x)
}

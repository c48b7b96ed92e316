// Per-frame drawing of the eye field, as a list of fill commands.
// Visual: a black veil fades the previous frame, then each eye is painted
// sclera -> iris -> pupil -> glint, and the gold pointer dot on top.

use crate::placer::CircleSet;
use crate::types::{Color, Dimensions, Eye, Pointer};

/// One fill operation on the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    FillCircle { x: f32, y: f32, radius: f32, color: Color },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Color },
}

impl DrawCommand {
    /// Replay this command onto a real surface.
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            DrawCommand::FillCircle { x, y, radius, color } => canvas.fill_circle(x, y, radius, color),
            DrawCommand::FillRect { x, y, width, height, color } => {
                canvas.fill_rect(x, y, width, height, color)
            }
        }
    }
}

/// Anything that can fill circles and rectangles with (possibly translucent) color.
pub trait Canvas {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// Recording canvas: keeps the commands instead of painting them.
impl Canvas for Vec<DrawCommand> {
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.push(DrawCommand::FillRect { x, y, width, height, color });
    }
}

/// Everything one frame needs: canvas size, the eyes, and the pointer sample for this frame.
pub struct RenderContext {
    pub dims: Dimensions,
    pub eyes: CircleSet,
    pub pointer: Pointer,
    pub marker_radius: f32,
}

/// Gaze direction from the eye center toward the pointer, in (-pi, pi].
pub fn gaze_angle(eye: &Eye, px: f32, py: f32) -> f32 {
    (py - eye.y).atan2(px - eye.x)
}

/// Paint one eye looking at the pointer.
/// Visual: without a pointer you only get the red disc.
pub fn draw_eye<C: Canvas + ?Sized>(canvas: &mut C, eye: &Eye, pointer: Pointer, marker_radius: f32) {
    canvas.fill_circle(eye.x, eye.y, eye.radius, Color::RED);

    let Some((px, py)) = pointer.pos else {
        return;
    };

    let theta = gaze_angle(eye, px, py);
    let (sin, cos) = theta.sin_cos();

    // Iris may poke outside the sclera on tiny eyes; that's the look.
    let iris_x = eye.x + cos * eye.radius / 10.0;
    let iris_y = eye.y + sin * eye.radius / 10.0;
    canvas.fill_circle(iris_x, iris_y, eye.radius / 1.2, Color::WHITE);

    let pupil_radius = eye.radius / 2.5;
    let pupil_x = eye.x + cos * eye.radius / 1.9;
    let pupil_y = eye.y + sin * eye.radius / 1.9;
    canvas.fill_circle(pupil_x, pupil_y, pupil_radius, Color::BLACK);

    canvas.fill_circle(
        pupil_x - pupil_radius / 3.0,
        pupil_y - pupil_radius / 3.0,
        pupil_radius / 2.0,
        Color::HIGHLIGHT,
    );

    // Repainted once per eye, so the dot always ends up above every eye.
    canvas.fill_circle(px, py, marker_radius, Color::GOLD);
}

/// Build the full command list for one frame.
pub fn render_frame(ctx: &RenderContext) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + ctx.eyes.len() * 5);
    commands.fill_rect(
        0.0,
        0.0,
        ctx.dims.width as f32,
        ctx.dims.height as f32,
        Color::FADE,
    );
    for eye in &ctx.eyes {
        draw_eye(&mut commands, eye, ctx.pointer, ctx.marker_radius);
    }
    commands
}

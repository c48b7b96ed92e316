// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the eye field.
// 2) Filled circles and rectangles, alpha-blended over what's already there,
//    which is what turns the translucent black veil into fading trails.

use crate::error::Error;
use crate::frame_loop::Host;
use crate::render::{Canvas, DrawCommand};
use crate::types::{Color, Dimensions, FrameBuffer, Pointer};
use minifb::{Key, MouseMode, Window, WindowOptions};
use std::time::{Duration, Instant};

pub struct Drawer {
    window: Window,       // the on-screen window you see
    screen: FrameBuffer,  // persists between frames so old frames can fade
    pointer: Pointer,     // last pointer position the window reported
    fps: FpsMeter,
}

impl Drawer {
    /// Create a resizable window.
    /// Visual: a new black window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self {
            window,
            screen: FrameBuffer::new(Dimensions::new(width, height)),
            pointer: Pointer::absent(),
            fps: FpsMeter::new(),
        })
    }

    /// Returns false when the user closes the window or holds ESC.
    fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Pick up a new window size. The old picture is dropped (black again).
    fn sync_size(&mut self) {
        let (w, h) = self.window.get_size();
        let dims = Dimensions::new(w, h);
        if dims != self.screen.dimensions() {
            self.screen = FrameBuffer::new(dims);
        }
    }

    /// Remember where the pointer is. Outside the window we keep the last known spot.
    fn sync_pointer(&mut self) {
        if let Some((x, y)) = self.window.get_mouse_pos(MouseMode::Discard) {
            self.pointer = Pointer::at(x, y);
        }
    }
}

impl Host for Drawer {
    fn request_frame(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.sync_size();
        self.sync_pointer();
        true
    }

    fn dimensions(&self) -> Dimensions {
        self.screen.dimensions()
    }

    fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Paint the commands over last frame's pixels and push them to the screen.
    /// Visual: the window immediately displays the new image.
    fn present(&mut self, commands: &[DrawCommand]) -> Result<(), Error> {
        if self.screen.dimensions().is_empty() {
            // Minimized: nothing to show, but keep pumping window events.
            self.window.update();
            return Ok(());
        }

        for command in commands {
            command.apply(&mut self.screen);
        }
        self.window
            .update_with_buffer(&self.screen.pixels, self.screen.width, self.screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;

        if let Some(fps) = self.fps.tick(Instant::now()) {
            tracing::debug!(fps = %format!("{fps:.1}"), "frame rate");
        }
        Ok(())
    }
}

/// Counts frames and reports the rate once per second.
struct FpsMeter {
    since: Instant,
    frames: u32,
}

impl FpsMeter {
    fn new() -> Self {
        Self { since: Instant::now(), frames: 0 }
    }

    fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.since);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.since = now;
        Some(fps)
    }
}

/* ---------- Software drawing: blended pixels, circles, rectangles ---------- */

/// Mix `color` over one 0x00RRGGBB pixel ("source-over").
#[inline]
fn blend(dst: u32, color: Color) -> u32 {
    let a = color.a.clamp(0.0, 1.0);
    if a >= 1.0 {
        return color.to_u32();
    }
    let mix = |src: u8, shift: u32| -> u32 {
        let d = ((dst >> shift) & 0xFF) as f32;
        let v = src as f32 * a + d * (1.0 - a);
        (v.round().clamp(0.0, 255.0) as u32) << shift
    };
    mix(color.r, 16) | mix(color.g, 8) | mix(color.b, 0)
}

/// Blend a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: usize, y: usize, color: Color) {
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = blend(fb.pixels[idx], color);
}

/// Pixel columns/rows whose centers fall in [lo, hi), clipped to [0, len).
fn span(lo: f32, hi: f32, len: usize) -> std::ops::Range<usize> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().clamp(0.0, len as f32);
    if !(start < end) {
        return 0..0;
    }
    start as usize..end as usize
}

impl Canvas for FrameBuffer {
    /// Visual: a solid (or see-through) disc; pixels whose centers lie inside get painted.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }
        let r2 = radius * radius;
        let rows = span(y - radius, y + radius + 1.0, self.height);
        let cols = span(x - radius, x + radius + 1.0, self.width);
        for py in rows {
            let dy = py as f32 + 0.5 - y;
            for px in cols.clone() {
                let dx = px as f32 + 0.5 - x;
                if dx * dx + dy * dy <= r2 {
                    blend_pixel(self, px, py, color);
                }
            }
        }
    }

    /// Visual: an axis-aligned block; used full-screen as the fading veil.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        let rows = span(y, y + height, self.height);
        let cols = span(x, x + width, self.width);
        for py in rows {
            for px in cols.clone() {
                blend_pixel(self, px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::draw_eye;
    use crate::types::Eye;

    fn filled(w: usize, h: usize, color: u32) -> FrameBuffer {
        FrameBuffer { width: w, height: h, pixels: vec![color; w * h] }
    }

    #[test]
    fn opaque_color_replaces_pixel() {
        assert_eq!(blend(0x0012_3456, Color::GOLD), 0x00FF_D700);
    }

    #[test]
    fn fade_veil_darkens_white_by_a_quarter() {
        let mut fb = filled(4, 3, 0x00FF_FFFF);
        fb.fill_rect(0.0, 0.0, 4.0, 3.0, Color::FADE);
        assert!(fb.pixels.iter().all(|&p| p == 0x00BF_BFBF));
    }

    #[test]
    fn repeated_veils_fade_toward_black() {
        let mut fb = filled(2, 2, 0x00FF_0000);
        for _ in 0..20 {
            fb.fill_rect(0.0, 0.0, 2.0, 2.0, Color::FADE);
        }
        let red = (fb.pixels[0] >> 16) & 0xFF;
        assert!(red < 5, "red channel still {red}");
    }

    #[test]
    fn circle_paints_inside_and_leaves_outside() {
        let mut fb = filled(20, 20, 0);
        fb.fill_circle(10.0, 10.0, 4.0, Color::RED);
        assert_eq!(fb.pixel(10, 10), Some(0x00FF_0000));
        assert_eq!(fb.pixel(7, 10), Some(0x00FF_0000));
        assert_eq!(fb.pixel(0, 0), Some(0));
        assert_eq!(fb.pixel(10, 16), Some(0));
        // Corner of the bounding box is outside the disc.
        assert_eq!(fb.pixel(6, 6), Some(0));
    }

    #[test]
    fn shapes_off_the_edge_are_clipped() {
        let mut fb = filled(10, 10, 0);
        fb.fill_circle(-3.0, -3.0, 6.0, Color::WHITE);
        fb.fill_circle(500.0, 500.0, 30.0, Color::WHITE);
        fb.fill_rect(-5.0, 8.0, 100.0, 100.0, Color::GOLD);
        assert_eq!(fb.pixel(0, 0), Some(0x00FF_FFFF));
        assert_eq!(fb.pixel(9, 9), Some(0x00FF_D700));
        assert_eq!(fb.pixel(9, 0), Some(0));
    }

    #[test]
    fn degenerate_shapes_paint_nothing() {
        let mut fb = filled(8, 8, 0);
        fb.fill_circle(4.0, 4.0, 0.0, Color::WHITE);
        fb.fill_circle(4.0, 4.0, f32::NAN, Color::WHITE);
        fb.fill_rect(0.0, 0.0, -3.0, 5.0, Color::WHITE);
        assert!(fb.pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn replayed_eye_shows_pupil_toward_pointer() {
        let mut commands: Vec<DrawCommand> = Vec::new();
        draw_eye(&mut commands, &Eye::new(50.0, 50.0, 40.0), Pointer::at(200.0, 50.0), 5.0);

        let mut fb = filled(100, 100, 0);
        for c in &commands {
            c.apply(&mut fb);
        }
        // Pupil center is ~21px right of the eye center; the left side stays iris-white.
        assert_eq!(fb.pixel(71, 50), Some(0));
        assert_eq!(fb.pixel(25, 50), Some(0x00FF_FFFF));
        // Sclera ring still visible at the far left edge of the eye.
        assert_eq!(fb.pixel(11, 50), Some(0x00FF_0000));
    }

    #[test]
    fn fps_meter_reports_once_per_second() {
        let start = Instant::now();
        let mut meter = FpsMeter { since: start, frames: 0 };
        for i in 1..60 {
            assert_eq!(meter.tick(start + Duration::from_millis(i * 16)), None);
        }
        let fps = meter.tick(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 0.01);
        assert_eq!(meter.frames, 0);
    }
}

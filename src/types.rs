// Core types shared by the placer, the renderer and the window.

/// One eye on the canvas. Immutable once placed.
/// Visual: the red disc everything else (iris, pupil, glint) is drawn inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eye {
    pub x: f32,      // center, pixels from the left edge
    pub y: f32,      // center, pixels from the top edge
    pub radius: f32, // always > 0
}

impl Eye {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// True when the two discs intersect. Touching (distance == radius sum) is fine.
    pub fn overlaps(&self, other: &Eye) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt() < self.radius + other.radius
    }
}

/// Latest pointer sample. `None` until the first pointer event arrives.
/// Visual: with no pointer the eyes are blank red discs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Option<(f32, f32)>,
}

impl Pointer {
    pub fn at(x: f32, y: f32) -> Self {
        Self { pos: Some((x, y)) }
    }

    pub fn absent() -> Self {
        Self { pos: None }
    }
}

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// sRGB color with straight (non-premultiplied) alpha in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    /// Faint glint on the pupil.
    pub const HIGHLIGHT: Color = Color::rgba(255, 255, 255, 0.1);
    /// Full-canvas veil painted every frame; old frames fade out under it.
    pub const FADE: Color = Color::rgba(0, 0, 0, 0.25);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0x00RRGGBB, ignoring alpha.
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the frame is on screen (pixels)
    pub height: usize,    // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// All-black buffer of the given size.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            pixels: vec![0u32; dims.width * dims.height],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

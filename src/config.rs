// Tunables for the eye field. Everything has a default; main just calls `Config::default()`.

use crate::error::Error;
use crate::types::Dimensions;
use std::ops::RangeInclusive;

pub const DEFAULT_EYE_COUNT: usize = 300;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;
pub const DEFAULT_MIN_RADIUS: u32 = 1;
pub const DEFAULT_MAX_RADIUS: u32 = 160;
pub const DEFAULT_MARKER_RADIUS: f32 = 25.0;
pub const DEFAULT_WIDTH: usize = 1280;
pub const DEFAULT_HEIGHT: usize = 720;
pub const DEFAULT_TARGET_FPS: usize = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub title: String,
    /// Visual: how many eyes we *try* to fit; crowded canvases get fewer.
    pub eye_count: usize,
    /// Upper bound on candidate draws per placement (accepted + rejected).
    pub max_attempts: usize,
    pub min_radius: u32,
    pub max_radius: u32,
    /// Visual: size of the gold dot under the pointer.
    pub marker_radius: f32,
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Staring Eyes".to_string(),
            eye_count: DEFAULT_EYE_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            marker_radius: DEFAULT_MARKER_RADIUS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_radius == 0 {
            return Err(Error::Config("min_radius must be at least 1".into()));
        }
        if self.min_radius > self.max_radius {
            return Err(Error::Config(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "window must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn radius_range(&self) -> RangeInclusive<u32> {
        self.min_radius..=self.max_radius
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.eye_count, 300);
        assert_eq!(cfg.max_attempts, 10_000);
        assert_eq!(cfg.radius_range(), 1..=160);
    }

    #[test]
    fn zero_min_radius_is_rejected() {
        let cfg = Config { min_radius: 0, ..Config::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn inverted_radius_range_is_rejected() {
        let cfg = Config { min_radius: 50, max_radius: 10, ..Config::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn empty_window_is_rejected() {
        let cfg = Config { height: 0, ..Config::default() };
        assert!(matches!(cfg.validate(), Err(Error::Config(_))));
    }
}

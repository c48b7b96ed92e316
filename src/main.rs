// What you SEE:
// • A window full of red eyes of all sizes, none overlapping.
// • Move the mouse over the window: every eye's iris and pupil turn toward it,
//   and a gold dot follows the pointer.
// • Old frames fade out under a translucent black veil, leaving soft trails.
// • Resize the window and the eyes are scattered again to fit. ESC quits.

mod config;
mod draw;
mod error;
mod frame_loop;
mod placer;
mod render;
mod types;

use config::Config;
use draw::Drawer;
use error::Error;
use frame_loop::FrameLoop;
use placer::RandomCandidates;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    /* --- Logging ---
       RUST_LOG=debug also shows placement counts and FPS. */
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    /* --- Settings --- */
    let config = Config::default();
    config.validate()?;
    tracing::info!(
        eye_count = config.eye_count,
        max_attempts = config.max_attempts,
        width = config.width,
        height = config.height,
        "starting"
    );

    /* --- Window ---
       Visual: an empty black window opens. */
    let mut drawer = Drawer::new(&config.title, config.width, config.height, config.target_fps)?;

    /* --- Eye field ---
       Visual: nothing yet; the eyes appear on the first frame. */
    let dims = config.dimensions();
    let mut frame_loop = FrameLoop::new(config, dims, RandomCandidates::new(rand::rng()));

    /* ------------------------------ Main loop ------------------------------
       Runs once per display refresh until the window closes. */
    frame_loop.run(&mut drawer)
}

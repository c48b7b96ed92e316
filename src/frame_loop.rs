// The render loop: ask the host for a frame, pick up resizes and pointer moves,
// paint, repeat until the host goes away.

use crate::config::Config;
use crate::error::Error;
use crate::placer::{place, CandidateSource};
use crate::render::{render_frame, DrawCommand, RenderContext};
use crate::types::{Dimensions, Pointer};

/// What the loop needs from the outside world (a window, or a test double).
pub trait Host {
    /// Blocks until the host wants the next frame; false once it is torn down.
    fn request_frame(&mut self) -> bool;
    /// Current surface size; a change means the window was resized.
    fn dimensions(&self) -> Dimensions;
    /// Most recent pointer sample (last write wins).
    fn pointer(&self) -> Pointer;
    /// Paint one frame's commands and show them.
    fn present(&mut self, commands: &[DrawCommand]) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

pub struct FrameLoop<S> {
    ctx: RenderContext,
    source: S,
    config: Config,
    state: LoopState,
    frames: u64,
}

impl<S: CandidateSource> FrameLoop<S> {
    /// Place the first set of eyes for `dims`.
    /// Visual: nothing on screen yet; the first frame shows them.
    pub fn new(config: Config, dims: Dimensions, mut source: S) -> Self {
        let eyes = place(
            dims,
            config.eye_count,
            config.max_attempts,
            &config.radius_range(),
            &mut source,
        );
        tracing::info!(eyes = eyes.len(), width = dims.width, height = dims.height, "eye field ready");
        if eyes.is_empty() {
            tracing::warn!("no eyes fit on the canvas");
        }
        let ctx = RenderContext {
            dims,
            eyes,
            pointer: Pointer::absent(),
            marker_radius: config.marker_radius,
        };
        Self { ctx, source, config, state: LoopState::Idle, frames: 0 }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run frames until the host stops asking for them.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        self.state = LoopState::Running;
        tracing::debug!(state = ?self.state, eyes = self.ctx.eyes.len(), "render loop started");
        while host.request_frame() {
            self.step(host)?;
        }
        tracing::info!(frames = self.frames, "host closed, render loop finished");
        Ok(())
    }

    /// One frame: sync size and pointer with the host, then paint.
    pub fn step<H: Host>(&mut self, host: &mut H) -> Result<(), Error> {
        let dims = host.dimensions();
        if dims != self.ctx.dims {
            self.resize(dims);
        }
        self.ctx.pointer = host.pointer();

        let commands = render_frame(&self.ctx);
        host.present(&commands)?;
        self.frames += 1;
        Ok(())
    }

    /// New size means a brand new eye field; size and eyes change together.
    /// Visual: all eyes jump to new spots that fit the new window.
    pub fn resize(&mut self, dims: Dimensions) {
        let eyes = place(
            dims,
            self.config.eye_count,
            self.config.max_attempts,
            &self.config.radius_range(),
            &mut self.source,
        );
        tracing::info!(
            from_width = self.ctx.dims.width,
            from_height = self.ctx.dims.height,
            width = dims.width,
            height = dims.height,
            eyes = eyes.len(),
            "canvas resized, eyes re-placed"
        );
        self.ctx.dims = dims;
        self.ctx.eyes = eyes;
    }
}

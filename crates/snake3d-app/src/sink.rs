//! Render sink for headless runs: counts what would be drawn and logs it.

use glam::Mat4;
use log::{debug, trace};

use snake3d_core::render::{DrawRequest, RenderSink};

#[derive(Debug)]
pub struct LogSink {
    queued: usize,
    presented: u64,
    /// Emit a debug line every this many frames.
    log_every: u64,
}

impl LogSink {
    pub fn new(log_every: u64) -> Self {
        Self {
            queued: 0,
            presented: 0,
            log_every: log_every.max(1),
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub fn queued(&self) -> usize {
        self.queued
    }
}

impl RenderSink for LogSink {
    fn submit(&mut self, request: DrawRequest) {
        trace!("draw box at {} scale {}", request.position, request.scale);
        self.queued += 1;
    }

    fn present(&mut self, view: &Mat4, _projection: &Mat4) {
        self.presented += 1;
        if self.presented % self.log_every == 0 {
            let eye = view.inverse().w_axis.truncate();
            debug!(
                "frame {} presented {} boxes, eye at {eye}",
                self.presented, self.queued
            );
        }
        self.queued = 0;
    }
}

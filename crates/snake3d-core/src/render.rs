//! Render sink contract and camera.
//!
//! The simulation describes a frame as a list of flat-coloured boxes. A
//! `RenderSink` accumulates them and draws them all on `present`, using the
//! view and projection it is handed, then clears its queue.

use glam::{Mat4, Vec3};

use crate::config::GameConfig;
use crate::constants::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

/// One box to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRequest {
    /// Centre of the box in world space.
    pub position: Vec3,
    /// Box dimensions.
    pub scale: Vec3,
    pub color: Vec3,
}

impl DrawRequest {
    /// A cube of edge `size` centred on `position`.
    pub fn cube(position: Vec3, size: f32, color: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::splat(size),
            color,
        }
    }
}

pub trait RenderSink {
    /// Queue a box for the next `present`.
    fn submit(&mut self, request: DrawRequest);

    /// Draw every queued box with the given transforms and clear the queue.
    fn present(&mut self, view: &Mat4, projection: &Mat4);
}

/// Fixed perspective camera looking down at the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            target: Vec3::ZERO,
            fov_y_radians: CAMERA_FOV_DEGREES.to_radians(),
            aspect: config.aspect_ratio() as f32,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_radians, self.aspect, self.near, self.far)
    }
}

/// A frame as it was handed to `present`.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedFrame {
    pub draws: Vec<DrawRequest>,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Sink that keeps every presented frame in memory.
///
/// Useful for headless runs and tests; a GPU backend would issue the draws
/// where this one stores them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    queue: Vec<DrawRequest>,
    pub frames: Vec<PresentedFrame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests submitted since the last `present`.
    pub fn pending(&self) -> &[DrawRequest] {
        &self.queue
    }

    pub fn last_frame(&self) -> Option<&PresentedFrame> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, request: DrawRequest) {
        self.queue.push(request);
    }

    fn present(&mut self, view: &Mat4, projection: &Mat4) {
        self.frames.push(PresentedFrame {
            draws: std::mem::take(&mut self.queue),
            view: *view,
            projection: *projection,
        });
    }
}

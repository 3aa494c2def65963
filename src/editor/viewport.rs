//! Screen ↔ world coordinate mapping for the canvas.
//!
//! `screen = world * scale + offset`. The offset lives in screen space, so
//! panning is never divided by the scale.

use crate::constants::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use crate::types::{pos, Position};

/// Pan offset and zoom scale of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset: Position,
    scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Position::ZERO,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Viewport with the given offset and scale (scale is clamped).
    pub fn new(offset: Position, scale: f32) -> Self {
        Self {
            offset,
            scale: clamp_scale(scale),
        }
    }

    /// Current pan offset in screen pixels.
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Current zoom scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Zoom as a rounded percentage, for the zoom badge.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Maps a world-space point to canvas-local screen space.
    pub fn world_to_screen(&self, world: Position) -> Position {
        world * self.scale + self.offset
    }

    /// Maps a canvas-local screen point to world space.
    pub fn screen_to_world(&self, screen: Position) -> Position {
        (screen - self.offset) / self.scale
    }

    /// Adds a raw screen-space delta to the pan offset.
    pub fn pan_by(&mut self, delta: Position) {
        self.offset += delta;
    }

    /// Sets the scale, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_scale(scale);
    }

    /// Applies one discrete zoom step. A positive wheel delta (scrolling down)
    /// zooms out; a zero delta changes nothing.
    pub fn zoom_step(&mut self, wheel_delta_y: f32) {
        let direction = if wheel_delta_y > 0.0 {
            1.0
        } else if wheel_delta_y < 0.0 {
            -1.0
        } else {
            return;
        };
        self.set_scale(self.scale - direction * ZOOM_STEP);
    }

    /// Wheel scrolling without the zoom modifier pans against the wheel delta.
    pub fn scroll_by(&mut self, wheel_delta: Position) {
        self.pan_by(pos(-wheel_delta.x, -wheel_delta.y));
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

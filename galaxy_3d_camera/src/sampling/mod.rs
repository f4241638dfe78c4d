//! Sub-pixel sample patterns for temporal anti-aliasing jitter.
//!
//! A camera with an attached generator pulls one sample per frame in
//! `Camera::begin_frame`. Samples are offsets in pixels, centered on the
//! pixel (range [-0.5, 0.5)); the camera scales them into clip space.

mod dx_pattern;
mod halton;

pub use dx_pattern::DxSamplePattern;
pub use halton::HaltonSamplePattern;

use glam::Vec2;

/// Source of per-frame 2D sample offsets.
///
/// Shared between cameras as `Arc<Mutex<dyn PatternGenerator>>`.
pub trait PatternGenerator: Send {
    /// Produce the next sample and advance.
    fn next(&mut self) -> Vec2;

    /// Number of samples before the sequence repeats (0 = never).
    fn sample_count(&self) -> u32;
}

//! Immediate-mode UI seam for editing camera parameters.
//!
//! The camera draws its fields through `UiBuilder` and writes edits back
//! through its own setters. Backends (imgui, egui, ...) implement the trait.

mod mock_ui;

pub use mock_ui::{MockUi, UiValue};

use glam::{Vec2, Vec3};

/// Widget factory used by `Camera::render_ui`.
///
/// Each `add_*` call displays `value`, lets the user edit it in place and
/// returns `true` if it changed this frame.
pub trait UiBuilder {
    /// Open a collapsible group. Returns `false` when collapsed, in which
    /// case the caller skips its widgets and must not call `end_group`.
    fn begin_group(&mut self, label: &str) -> bool;

    fn end_group(&mut self);

    fn add_float_var(&mut self, label: &str, value: &mut f32, min: f32, max: f32, step: f32) -> bool;

    fn add_float2_var(&mut self, label: &str, value: &mut Vec2, min: f32, max: f32, step: f32) -> bool;

    fn add_float3_var(&mut self, label: &str, value: &mut Vec3, min: f32, max: f32, step: f32) -> bool;
}

/// Camera: parameters in, matrices out.
///
/// The caller sets a handful of parameters (position, target, up, lens,
/// depth range, jitter). View, projection, frustum planes and the
/// ray-tracing basis are derived lazily: every setter marks the camera
/// dirty, every derived accessor recomputes first if needed. Derived
/// accessors therefore take `&mut self`.
///
/// Per-frame contract: call `begin_frame()` once per frame before reading
/// any matrix, so that "previous frame" values stay one frame behind.

use std::fmt;
use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec2, Vec3};
use crate::buffer::ParameterBlock;
use crate::error::{Error, Result};
use crate::sampling::PatternGenerator;
use crate::ui::UiBuilder;
use crate::engine_warn;
use super::bounding_box::BoundingBox;
use super::camera_data::CameraData;
use super::frustum::Frustum;
use super::lens::{focal_length_to_fov_y, DEFAULT_FRAME_HEIGHT};

const SOURCE: &str = "galaxy3d::Camera";

/// Initial camera state.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDesc {
    pub name: String,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Lens focal length, same unit as `frame_height`. 0 selects an orthographic projection.
    pub focal_length: f32,
    pub frame_height: f32,
    pub aspect_ratio: f32,
    pub near_z: f32,
    pub far_z: f32,
    pub focal_distance: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            focal_length: 21.0,
            frame_height: DEFAULT_FRAME_HEIGHT,
            aspect_ratio: 1.7777,
            near_z: 0.1,
            far_z: 1000.0,
            focal_distance: 10000.0,
        }
    }
}

/// Shared sample-pattern generator driving the jitter, with its scale.
#[derive(Clone)]
struct JitterPattern {
    generator: Option<Arc<Mutex<dyn PatternGenerator>>>,
    scale: Vec2,
}

#[derive(Clone)]
pub struct Camera {
    name: String,
    data: CameraData,
    view_proj_no_jitter: Mat4,
    frustum: Frustum,

    persistent_view_mat: Mat4,
    persistent_proj_mat: Mat4,
    persistent_view_enabled: bool,
    persistent_proj_enabled: bool,

    jitter_pattern: JitterPattern,
    dirty: bool,
}

impl Camera {
    /// Camera with default parameters.
    pub fn new() -> Self {
        Self::from_desc(CameraDesc::default())
    }

    pub fn from_desc(desc: CameraDesc) -> Self {
        let data = CameraData {
            position: desc.position,
            target: desc.target,
            up: desc.up,
            focal_length: desc.focal_length,
            frame_height: desc.frame_height,
            aspect_ratio: desc.aspect_ratio,
            near_z: desc.near_z,
            far_z: desc.far_z,
            focal_distance: desc.focal_distance,
            ..CameraData::default()
        };

        Self {
            name: desc.name,
            data,
            view_proj_no_jitter: Mat4::IDENTITY,
            frustum: Frustum::default(),
            persistent_view_mat: Mat4::IDENTITY,
            persistent_proj_mat: Mat4::IDENTITY,
            persistent_view_enabled: false,
            persistent_proj_enabled: false,
            jitter_pattern: JitterPattern { generator: None, scale: Vec2::ONE },
            dirty: true,
        }
    }

    // ===== FRAME =====

    /// Per-frame hook.
    ///
    /// Applies the next jitter sample if a pattern generator is attached,
    /// then moves the last derived no-jitter view-projection (and the
    /// right-eye view-projection) into the "previous frame" slots.
    ///
    /// # Errors
    ///
    /// `Error::LockPoisoned` if the shared generator's lock is poisoned.
    pub fn begin_frame(&mut self) -> Result<()> {
        if let Some(generator) = &self.jitter_pattern.generator {
            let sample = generator
                .lock()
                .map_err(|_| Error::LockPoisoned("pattern generator".to_string()))?
                .next();
            let jitter = sample * self.jitter_pattern.scale;
            self.set_jitter_internal(jitter.x, jitter.y);
        }

        self.data.prev_view_proj_mat = self.view_proj_no_jitter;
        self.data.right_eye_prev_view_proj_mat = self.data.right_eye_view_proj_mat;
        Ok(())
    }

    // ===== DERIVATION =====

    /// `true` when derived data is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recompute every derived value if the camera is dirty. No-op otherwise.
    pub fn calculate_camera_parameters(&mut self) {
        if !self.dirty {
            return;
        }

        let data = &mut self.data;

        // A focal length of 0 means an orthographic camera (0 FOV), not an infinitely wide one
        let fov_y = if data.focal_length == 0.0 {
            0.0
        } else {
            focal_length_to_fov_y(data.focal_length, data.frame_height)
        };

        data.view_mat = if self.persistent_view_enabled {
            self.persistent_view_mat
        } else {
            Mat4::look_at_rh(data.position, data.target, data.up)
        };

        data.proj_mat = if self.persistent_proj_enabled {
            self.persistent_proj_mat
        } else if fov_y != 0.0 {
            Mat4::perspective_rh(fov_y, data.aspect_ratio, data.near_z, data.far_z)
        } else {
            // Half the look-at distance is the half size of the view volume
            let half = (data.position - data.target).length() * 0.5;
            Mat4::orthographic_rh(-half, half, -half, half, data.near_z, data.far_z)
        };

        // Jitter is a clip-space translation; offsets are fractions of the
        // resolution, so one pixel in NDC is 2 * jitter
        self.view_proj_no_jitter = data.proj_mat * data.view_mat;
        let jitter_mat = Mat4::from_translation(Vec3::new(2.0 * data.jitter_x, 2.0 * data.jitter_y, 0.0));
        data.proj_mat = jitter_mat * data.proj_mat;
        data.inv_proj = data.proj_mat.inverse();

        data.view_proj_mat = data.proj_mat * data.view_mat;
        data.inv_view_proj = data.view_proj_mat.inverse();

        self.frustum = Frustum::from_view_projection(&data.view_proj_mat);

        // Ray-tracing basis
        data.camera_w = (data.target - data.position).normalize() * data.focal_distance;
        data.camera_u = data.camera_w.cross(data.up).normalize();
        data.camera_v = data.camera_u.cross(data.camera_w).normalize();
        let half_height = data.focal_distance * (fov_y * 0.5).tan();
        data.camera_u *= half_height * data.aspect_ratio;
        data.camera_v *= half_height;

        self.dirty = false;
    }

    // ===== DERIVED GETTERS =====

    pub fn view_matrix(&mut self) -> Mat4 {
        self.calculate_camera_parameters();
        self.data.view_mat
    }

    /// Projection matrix, jitter included.
    pub fn projection_matrix(&mut self) -> Mat4 {
        self.calculate_camera_parameters();
        self.data.proj_mat
    }

    /// projection × view, jitter included.
    pub fn view_projection_matrix(&mut self) -> Mat4 {
        self.calculate_camera_parameters();
        self.data.view_proj_mat
    }

    /// projection × view without jitter.
    pub fn view_projection_matrix_no_jitter(&mut self) -> Mat4 {
        self.calculate_camera_parameters();
        self.view_proj_no_jitter
    }

    pub fn inverse_projection_matrix(&mut self) -> Mat4 {
        self.calculate_camera_parameters();
        self.data.inv_proj
    }

    pub fn inverse_view_projection_matrix(&mut self) -> Mat4 {
        self.calculate_camera_parameters();
        self.data.inv_view_proj
    }

    /// No-jitter view-projection captured by the last `begin_frame()`.
    pub fn prev_view_projection_matrix(&self) -> Mat4 {
        self.data.prev_view_proj_mat
    }

    pub fn frustum(&mut self) -> &Frustum {
        self.calculate_camera_parameters();
        &self.frustum
    }

    /// Ray generation basis `(u, v, w)`: right and up scaled to the focal
    /// plane half extents, forward scaled to the focal distance.
    pub fn ray_basis(&mut self) -> (Vec3, Vec3, Vec3) {
        self.calculate_camera_parameters();
        (self.data.camera_u, self.data.camera_v, self.data.camera_w)
    }

    /// Full parameter block, up to date.
    pub fn data(&mut self) -> &CameraData {
        self.calculate_camera_parameters();
        &self.data
    }

    // ===== PARAMETERS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn position(&self) -> Vec3 {
        self.data.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.data.position = position;
        self.mark_dirty();
    }

    pub fn target(&self) -> Vec3 {
        self.data.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.data.target = target;
        self.mark_dirty();
    }

    pub fn up_vector(&self) -> Vec3 {
        self.data.up
    }

    pub fn set_up_vector(&mut self, up: Vec3) {
        self.data.up = up;
        self.mark_dirty();
    }

    /// Set position, target and up in one call.
    pub fn move_to(&mut self, position: Vec3, target: Vec3, up: Vec3) {
        self.set_position(position);
        self.set_target(target);
        self.set_up_vector(up);
    }

    pub fn focal_length(&self) -> f32 {
        self.data.focal_length
    }

    pub fn set_focal_length(&mut self, focal_length: f32) {
        self.data.focal_length = focal_length;
        self.mark_dirty();
    }

    pub fn frame_height(&self) -> f32 {
        self.data.frame_height
    }

    pub fn set_frame_height(&mut self, frame_height: f32) {
        self.data.frame_height = frame_height;
        self.mark_dirty();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.data.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.data.aspect_ratio = aspect_ratio;
        self.mark_dirty();
    }

    pub fn near_plane(&self) -> f32 {
        self.data.near_z
    }

    pub fn set_near_plane(&mut self, near_z: f32) {
        self.data.near_z = near_z;
        self.mark_dirty();
    }

    pub fn far_plane(&self) -> f32 {
        self.data.far_z
    }

    pub fn set_far_plane(&mut self, far_z: f32) {
        self.data.far_z = far_z;
        self.mark_dirty();
    }

    pub fn set_depth_range(&mut self, near_z: f32, far_z: f32) {
        self.data.near_z = near_z;
        self.data.far_z = far_z;
        self.mark_dirty();
    }

    pub fn focal_distance(&self) -> f32 {
        self.data.focal_distance
    }

    pub fn set_focal_distance(&mut self, focal_distance: f32) {
        self.data.focal_distance = focal_distance;
        self.mark_dirty();
    }

    // ===== PERSISTENT MATRICES =====

    /// Use `view` as the view matrix until persistence is toggled off.
    pub fn set_view_matrix(&mut self, view: Mat4) {
        self.persistent_view_mat = view;
        self.toggle_persistent_view_matrix(true);
    }

    /// Use `proj` as the (pre-jitter) projection matrix until persistence is toggled off.
    pub fn set_projection_matrix(&mut self, proj: Mat4) {
        self.persistent_proj_mat = proj;
        self.toggle_persistent_projection_matrix(true);
    }

    pub fn toggle_persistent_view_matrix(&mut self, persistent: bool) {
        self.persistent_view_enabled = persistent;
        self.mark_dirty();
    }

    pub fn toggle_persistent_projection_matrix(&mut self, persistent: bool) {
        self.persistent_proj_enabled = persistent;
        self.mark_dirty();
    }

    pub fn is_persistent_view_matrix(&self) -> bool {
        self.persistent_view_enabled
    }

    pub fn is_persistent_projection_matrix(&self) -> bool {
        self.persistent_proj_enabled
    }

    // ===== CULLING =====

    /// `true` if `bbox` is entirely outside the view frustum.
    ///
    /// Conservative: some boxes outside the frustum near its edges are
    /// reported visible, a visible box is never culled.
    pub fn is_object_culled(&mut self, bbox: &BoundingBox) -> bool {
        self.calculate_camera_parameters();
        self.frustum.is_box_culled(bbox)
    }

    // ===== STEREO =====

    /// Set the right-eye view and projection. Stored as given, no
    /// persistence or jitter handling.
    pub fn set_right_eye_matrices(&mut self, view: Mat4, proj: Mat4) {
        self.data.right_eye_view_mat = view;
        self.data.right_eye_proj_mat = proj;
        self.data.right_eye_view_proj_mat = proj * view;
    }

    pub fn right_eye_view_matrix(&self) -> Mat4 {
        self.data.right_eye_view_mat
    }

    pub fn right_eye_projection_matrix(&self) -> Mat4 {
        self.data.right_eye_proj_mat
    }

    pub fn right_eye_view_projection_matrix(&self) -> Mat4 {
        self.data.right_eye_view_proj_mat
    }

    pub fn right_eye_prev_view_projection_matrix(&self) -> Mat4 {
        self.data.right_eye_prev_view_proj_mat
    }

    // ===== JITTER =====

    /// Attach a shared sample-pattern generator. Its samples, multiplied by
    /// `scale`, replace the jitter at each `begin_frame()`. Passing `None`
    /// detaches the current generator and resets the jitter to zero.
    ///
    /// `scale` is typically `1 / resolution` so samples in pixels become
    /// fractions of the screen.
    pub fn set_pattern_generator(&mut self, generator: Option<Arc<Mutex<dyn PatternGenerator>>>, scale: Vec2) {
        let detach = generator.is_none();
        self.jitter_pattern = JitterPattern { generator, scale };
        if detach {
            self.set_jitter_internal(0.0, 0.0);
        }
    }

    pub fn pattern_generator(&self) -> Option<&Arc<Mutex<dyn PatternGenerator>>> {
        self.jitter_pattern.generator.as_ref()
    }

    /// Set the jitter manually, as a fraction of the screen resolution
    /// (half a pixel along X is `0.5 / width`). Detaches any attached
    /// pattern generator.
    pub fn set_jitter(&mut self, jitter_x: f32, jitter_y: f32) {
        if self.jitter_pattern.generator.take().is_some() {
            engine_warn!(SOURCE,
                "Camera::set_jitter() called while a pattern generator is attached. Detaching the pattern generator");
        }
        self.set_jitter_internal(jitter_x, jitter_y);
    }

    fn set_jitter_internal(&mut self, jitter_x: f32, jitter_y: f32) {
        self.data.jitter_x = jitter_x;
        self.data.jitter_y = jitter_y;
        self.mark_dirty();
    }

    pub fn jitter_x(&self) -> f32 {
        self.data.jitter_x
    }

    pub fn jitter_y(&self) -> f32 {
        self.data.jitter_y
    }

    // ===== UPLOAD =====

    /// Size in bytes of the block written by `set_into_buffer`.
    pub fn shader_data_size(&self) -> usize {
        CameraData::SIZE
    }

    /// Write the parameter block at `offset`.
    ///
    /// # Panics
    ///
    /// If the block does not fit in `buffer` at `offset`. This is a layout
    /// mismatch between the caller and the shader, not a runtime condition.
    pub fn set_into_buffer<B: ParameterBlock + ?Sized>(&mut self, buffer: &mut B, offset: u64) -> Result<()> {
        self.calculate_camera_parameters();

        let size = self.shader_data_size() as u64;
        assert!(
            offset.checked_add(size).is_some_and(|end| end <= buffer.size()),
            "camera block ({} bytes at offset {}) exceeds buffer size {}",
            size, offset, buffer.size()
        );

        buffer.set_blob(offset, bytemuck::bytes_of(&self.data))
    }

    /// Write the parameter block at the variable `var_name`, located by its
    /// first member `"{var_name}.view_mat"`.
    ///
    /// # Errors
    ///
    /// `Error::FieldNotFound` (logged as a warning) if the layout has no
    /// such variable. Nothing is written in that case.
    pub fn set_into_buffer_by_name<B: ParameterBlock + ?Sized>(&mut self, buffer: &mut B, var_name: &str) -> Result<()> {
        let variable = format!("{}.view_mat", var_name);

        match buffer.variable_offset(&variable) {
            Some(offset) => self.set_into_buffer(buffer, offset),
            None => {
                engine_warn!(SOURCE,
                    "Camera::set_into_buffer_by_name() - variable \"{}\" not found in parameter block", var_name);
                Err(Error::FieldNotFound(variable))
            }
        }
    }

    // ===== UI =====

    /// Draw editable camera fields, optionally inside a group named `group`.
    /// Edits go through the regular setters.
    pub fn render_ui<U: UiBuilder + ?Sized>(&mut self, ui: &mut U, group: Option<&str>) {
        if let Some(label) = group {
            if !ui.begin_group(label) {
                return;
            }
        }

        let mut focal_length = self.focal_length();
        if ui.add_float_var("Focal Length", &mut focal_length, 0.0, f32::MAX, 0.25) {
            self.set_focal_length(focal_length);
        }

        let mut aspect_ratio = self.aspect_ratio();
        if ui.add_float_var("Aspect Ratio", &mut aspect_ratio, 0.0, f32::MAX, 0.001) {
            self.set_aspect_ratio(aspect_ratio);
        }

        let mut depth = Vec2::new(self.near_plane(), self.far_plane());
        if ui.add_float2_var("Depth Range", &mut depth, 0.0, f32::MAX, 0.1) {
            self.set_depth_range(depth.x, depth.y);
        }

        let mut position = self.position();
        if ui.add_float3_var("Position", &mut position, -f32::MAX, f32::MAX, 0.001) {
            self.set_position(position);
        }

        let mut target = self.target();
        if ui.add_float3_var("Target", &mut target, -f32::MAX, f32::MAX, 0.001) {
            self.set_target(target);
        }

        // "Up" shows and edits the up vector, never the target
        let mut up = self.up_vector();
        if ui.add_float3_var("Up", &mut up, -f32::MAX, f32::MAX, 0.001) {
            self.set_up_vector(up);
        }

        if group.is_some() {
            ui.end_group();
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("name", &self.name)
            .field("data", &self.data)
            .field("persistent_view_enabled", &self.persistent_view_enabled)
            .field("persistent_proj_enabled", &self.persistent_proj_enabled)
            .field("has_pattern_generator", &self.jitter_pattern.generator.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

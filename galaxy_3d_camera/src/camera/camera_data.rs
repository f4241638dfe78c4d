/// CameraData: the parameter block shared with shaders.
///
/// `#[repr(C)]` and `Pod` so it can be written to a buffer as raw bytes.
/// Matrices come first; every `Vec3` is paired with a scalar so the
/// layout matches std140 without implicit padding.

use glam::{Mat4, Vec3};
use bytemuck::{Pod, Zeroable};
use crate::buffer::{FieldDesc, FieldType};
use super::lens::DEFAULT_FRAME_HEIGHT;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraData {
    pub view_mat: Mat4,
    pub proj_mat: Mat4,
    pub view_proj_mat: Mat4,
    pub inv_view_proj: Mat4,
    pub inv_proj: Mat4,
    /// No-jitter view-projection of the previous frame
    pub prev_view_proj_mat: Mat4,
    pub right_eye_view_mat: Mat4,
    pub right_eye_proj_mat: Mat4,
    pub right_eye_view_proj_mat: Mat4,
    pub right_eye_prev_view_proj_mat: Mat4,

    pub position: Vec3,
    pub focal_length: f32,
    pub up: Vec3,
    pub aspect_ratio: f32,
    pub target: Vec3,
    pub near_z: f32,
    /// Ray-tracing basis: right, scaled to the half-width of the focal plane
    pub camera_u: Vec3,
    pub far_z: f32,
    /// Ray-tracing basis: up, scaled to the half-height of the focal plane
    pub camera_v: Vec3,
    pub jitter_x: f32,
    /// Ray-tracing basis: forward, scaled to the focal distance
    pub camera_w: Vec3,
    pub jitter_y: f32,

    pub frame_height: f32,
    pub focal_distance: f32,
    pub _padding: [f32; 2],
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            view_mat: Mat4::IDENTITY,
            proj_mat: Mat4::IDENTITY,
            view_proj_mat: Mat4::IDENTITY,
            inv_view_proj: Mat4::IDENTITY,
            inv_proj: Mat4::IDENTITY,
            prev_view_proj_mat: Mat4::IDENTITY,
            right_eye_view_mat: Mat4::IDENTITY,
            right_eye_proj_mat: Mat4::IDENTITY,
            right_eye_view_proj_mat: Mat4::IDENTITY,
            right_eye_prev_view_proj_mat: Mat4::IDENTITY,
            position: Vec3::ZERO,
            focal_length: 21.0,
            up: Vec3::Y,
            aspect_ratio: 1.7777,
            target: Vec3::NEG_Z,
            near_z: 0.1,
            camera_u: Vec3::Z,
            far_z: 1000.0,
            camera_v: Vec3::Y,
            jitter_x: 0.0,
            camera_w: Vec3::X,
            jitter_y: 0.0,
            frame_height: DEFAULT_FRAME_HEIGHT,
            focal_distance: 10000.0,
            _padding: [0.0; 2],
        }
    }
}

impl CameraData {
    /// Size of the block in bytes.
    pub const SIZE: usize = std::mem::size_of::<CameraData>();

    /// std140 field list describing this block, each name prefixed with
    /// `"{prefix}."`. Padding is left to the struct stride.
    pub fn field_descs(prefix: &str) -> Vec<FieldDesc> {
        const FIELDS: [(&str, FieldType); 24] = [
            ("view_mat", FieldType::Mat4),
            ("proj_mat", FieldType::Mat4),
            ("view_proj_mat", FieldType::Mat4),
            ("inv_view_proj", FieldType::Mat4),
            ("inv_proj", FieldType::Mat4),
            ("prev_view_proj_mat", FieldType::Mat4),
            ("right_eye_view_mat", FieldType::Mat4),
            ("right_eye_proj_mat", FieldType::Mat4),
            ("right_eye_view_proj_mat", FieldType::Mat4),
            ("right_eye_prev_view_proj_mat", FieldType::Mat4),
            ("position", FieldType::Vec3),
            ("focal_length", FieldType::Float),
            ("up", FieldType::Vec3),
            ("aspect_ratio", FieldType::Float),
            ("target", FieldType::Vec3),
            ("near_z", FieldType::Float),
            ("camera_u", FieldType::Vec3),
            ("far_z", FieldType::Float),
            ("camera_v", FieldType::Vec3),
            ("jitter_x", FieldType::Float),
            ("camera_w", FieldType::Vec3),
            ("jitter_y", FieldType::Float),
            ("frame_height", FieldType::Float),
            ("focal_distance", FieldType::Float),
        ];

        FIELDS
            .iter()
            .map(|(name, field_type)| FieldDesc::new(format!("{}.{}", prefix, name), *field_type))
            .collect()
    }
}

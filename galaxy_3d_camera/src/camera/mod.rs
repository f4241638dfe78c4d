//! Camera module: camera, parameter block, frustum and bounding box.
//!
//! The camera is owned and driven by the caller (scene or frame update).
//! It holds no references into the engine; collaborators (pattern
//! generator, parameter block, UI builder) are passed in or shared.

mod bounding_box;
mod camera;
mod camera_data;
mod frustum;
mod lens;

pub use bounding_box::BoundingBox;
pub use camera::{Camera, CameraDesc};
pub use camera_data::CameraData;
pub use frustum::{
    Frustum, FrustumPlane, FrustumTest,
    PLANE_RIGHT, PLANE_LEFT, PLANE_TOP, PLANE_BOTTOM, PLANE_FAR, PLANE_NEAR,
};
pub use lens::{focal_length_to_fov_y, fov_y_to_focal_length, DEFAULT_FRAME_HEIGHT};

/// Lens conversions between focal length and vertical field of view.
///
/// Focal length and frame height share a unit (millimetres by
/// convention). Angles are in radians.

/// Frame height of a full-frame (35mm film) sensor, in millimetres.
pub const DEFAULT_FRAME_HEIGHT: f32 = 24.0;

/// Vertical field of view for a lens of `focal_length` on a sensor of `frame_height`.
pub fn focal_length_to_fov_y(focal_length: f32, frame_height: f32) -> f32 {
    2.0 * (0.5 * frame_height / focal_length).atan()
}

/// Focal length producing the vertical field of view `fov_y` on a sensor of `frame_height`.
pub fn fov_y_to_focal_length(fov_y: f32, frame_height: f32) -> f32 {
    frame_height / (2.0 * (0.5 * fov_y).tan())
}

#[cfg(test)]
#[path = "lens_tests.rs"]
mod tests;

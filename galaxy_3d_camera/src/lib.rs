/*!
# Galaxy 3D Camera

Camera component for the Galaxy 3D rendering engine.

A `Camera` turns a few user-set parameters (position, target, up, focal
length, depth range, jitter) into view/projection matrices, frustum planes
and a ray-tracing basis, recomputed lazily when parameters change.

## Architecture

- **Camera**: parameters, dirty-flag cache, culling, jitter, stereo, upload
- **CameraData**: `#[repr(C)]` parameter block uploaded to shaders
- **Frustum**: six planes extracted from the view-projection matrix
- **PatternGenerator**: per-frame sub-pixel jitter samples (Halton, D3D 8x)
- **ParameterBlock**: named-field buffer layout the camera uploads into
- **UiBuilder**: immediate-mode widgets for editing camera parameters
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod buffer;
pub mod camera;
pub mod sampling;
pub mod ui;

#[cfg(test)]
mod test_utils;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::engine::Engine;

    // Camera types
    pub use crate::camera::{BoundingBox, Camera, CameraData, CameraDesc, Frustum, FrustumPlane, FrustumTest};

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module with lens helpers and plane indices
    pub mod camera {
        pub use crate::camera::*;
    }

    // Sample pattern sub-module
    pub mod sampling {
        pub use crate::sampling::*;
    }

    // Parameter block sub-module
    pub mod buffer {
        pub use crate::buffer::*;
    }

    // UI sub-module
    pub mod ui {
        pub use crate::ui::*;
    }
}

// Re-export math library at crate root
pub use glam;

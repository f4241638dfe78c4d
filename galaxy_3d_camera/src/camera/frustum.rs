/// Frustum: six clipping planes for visibility culling.
///
/// Planes are extracted from a view-projection matrix whose clip-space
/// depth range is [0, w] (glam's `*_rh` projections). Each plane stores:
/// - `xyz`: plane direction (not normalized, points into the volume)
/// - `sign`: component-wise sign of `xyz`, selects the AABB corner
/// - `neg_w`: the negated plane offset
///
/// A point P is inside a plane when `dot(xyz, P) > neg_w`.

use glam::{Mat4, Vec3, Vec4};
use super::bounding_box::BoundingBox;

/// Result of a 3-way frustum/box classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Box is entirely outside the frustum
    Outside,
    /// Box is entirely inside the frustum
    Inside,
    /// Box straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_RIGHT: usize = 0;
pub const PLANE_LEFT: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_BOTTOM: usize = 3;
pub const PLANE_FAR: usize = 4;
pub const PLANE_NEAR: usize = 5;

/// How each plane is built from the rows of the view-projection matrix:
/// `(row, sign, add w-row)`. Even planes negate the row, odd planes keep it.
/// The near plane is `z >= 0` and does not add the w row.
const PLANE_EXTRACTION: [(usize, f32, bool); 6] = [
    (0, -1.0, true),  // right:  w - x >= 0
    (0, 1.0, true),   // left:   w + x >= 0
    (1, -1.0, true),  // top:    w - y >= 0
    (1, 1.0, true),   // bottom: w + y >= 0
    (2, -1.0, true),  // far:    w - z >= 0
    (2, 1.0, false),  // near:       z >= 0
];

/// A single frustum plane in corner-selection form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrustumPlane {
    pub xyz: Vec3,
    pub sign: Vec3,
    pub neg_w: f32,
}

impl FrustumPlane {
    /// Build from homogeneous plane coefficients (A, B, C, D).
    pub fn from_coefficients(plane: Vec4) -> Self {
        let xyz = plane.truncate();
        Self {
            xyz,
            sign: sign(xyz),
            neg_w: -plane.w,
        }
    }

    /// `dot(xyz, point) + w`. Positive on the inner side. Not a
    /// euclidean distance: `xyz` is not normalized.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.xyz.dot(point) - self.neg_w
    }

    /// Corner of `bbox` farthest along the plane direction.
    fn positive_vertex(&self, bbox: &BoundingBox) -> Vec3 {
        bbox.center + bbox.extent * self.sign
    }

    /// Corner of `bbox` farthest against the plane direction.
    fn negative_vertex(&self, bbox: &BoundingBox) -> Vec3 {
        bbox.center - bbox.extent * self.sign
    }
}

/// Component-wise sign where zero maps to zero.
fn sign(v: Vec3) -> Vec3 {
    Vec3::select(v.cmpeq(Vec3::ZERO), Vec3::ZERO, v.signum())
}

/// Six frustum planes, ordered right, left, top, bottom, far, near.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frustum {
    pub planes: [FrustumPlane; 6],
}

impl Frustum {
    /// Extract the frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann with a [0, w] depth range. Works for both
    /// perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let w_row = vp.row(3);
        let planes = PLANE_EXTRACTION.map(|(row, factor, add_w)| {
            let mut plane = vp.row(row) * factor;
            if add_w {
                plane += w_row;
            }
            FrustumPlane::from_coefficients(plane)
        });

        Self { planes }
    }

    /// Conservative box-vs-frustum test.
    ///
    /// Returns `true` when the box lies entirely on the outer side of
    /// at least one plane. A box outside the frustum near a corner may
    /// still be reported visible; a visible box is never culled.
    pub fn is_box_culled(&self, bbox: &BoundingBox) -> bool {
        !self.planes.iter().all(|plane| {
            plane.xyz.dot(plane.positive_vertex(bbox)) > plane.neg_w
        })
    }

    /// Classify a box against the frustum (3-way test).
    ///
    /// - positive vertex outside any plane → `Outside`
    /// - negative vertex outside some plane → `Partial`
    /// - otherwise → `Inside`
    pub fn classify_box(&self, bbox: &BoundingBox) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            if plane.xyz.dot(plane.positive_vertex(bbox)) <= plane.neg_w {
                return FrustumTest::Outside;
            }
            if plane.xyz.dot(plane.negative_vertex(bbox)) <= plane.neg_w {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

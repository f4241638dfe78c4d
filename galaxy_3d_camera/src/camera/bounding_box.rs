/// Axis-aligned bounding box described by center and half-extent.
///
/// This is the form the frustum test consumes: the corner farthest
/// along a plane normal is `center + extent * sign(normal)`.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Box center
    pub center: Vec3,
    /// Half size along each axis (non-negative)
    pub extent: Vec3,
}

impl BoundingBox {
    pub fn new(center: Vec3, extent: Vec3) -> Self {
        Self { center, extent }
    }

    /// Box spanning `min..max`.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extent: (max - min) * 0.5,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.extent
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extent
    }

    /// Bounds of this box after an affine transform.
    ///
    /// Arvo's method: the center is transformed as a point, the extent
    /// by the absolute value of the linear part. Exact for AABBs, no
    /// need to transform the 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> BoundingBox {
        let center = matrix.transform_point3(self.center);
        let extent = matrix.x_axis.truncate().abs() * self.extent.x
            + matrix.y_axis.truncate().abs() * self.extent.y
            + matrix.z_axis.truncate().abs() * self.extent.z;

        BoundingBox { center, extent }
    }
}

#[cfg(test)]
#[path = "bounding_box_tests.rs"]
mod tests;

use glam::{Mat4, Vec3, Vec4};
use super::*;

/// 90° perspective looking down -Z from the origin, near 0.1, far 100.
fn create_perspective_frustum() -> Frustum {
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    Frustum::from_view_projection(&projection)
}

fn create_orthographic_frustum() -> Frustum {
    let projection = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    Frustum::from_view_projection(&projection)
}

fn outside_planes(frustum: &Frustum, point: Vec3) -> Vec<usize> {
    (0..6)
        .filter(|&i| frustum.planes[i].signed_distance(point) <= 0.0)
        .collect()
}

// ============================================================================
// FrustumPlane
// ============================================================================

#[test]
fn test_plane_from_coefficients() {
    let plane = FrustumPlane::from_coefficients(Vec4::new(0.0, 2.0, -3.0, 1.0));

    assert_eq!(plane.xyz, Vec3::new(0.0, 2.0, -3.0));
    assert_eq!(plane.sign, Vec3::new(0.0, 1.0, -1.0));
    assert_eq!(plane.neg_w, -1.0);
}

#[test]
fn test_plane_sign_of_negative_zero_is_zero() {
    let plane = FrustumPlane::from_coefficients(Vec4::new(-0.0, 0.0, 1.0, 0.0));
    assert_eq!(plane.sign, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_plane_signed_distance() {
    let plane = FrustumPlane::from_coefficients(Vec4::new(1.0, 0.0, 0.0, 2.0));

    assert_eq!(plane.signed_distance(Vec3::ZERO), 2.0);
    assert_eq!(plane.signed_distance(Vec3::new(-2.0, 0.0, 0.0)), 0.0);
    assert_eq!(plane.signed_distance(Vec3::new(-5.0, 7.0, 7.0)), -3.0);
}

// ============================================================================
// Frustum::from_view_projection: per-plane
// ============================================================================

#[test]
fn test_identity_matrix_planes() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    // Clip volume: x,y in [-w, w], z in [0, w] with w = 1
    assert_eq!(frustum.planes[PLANE_RIGHT].xyz, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(frustum.planes[PLANE_LEFT].xyz, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(frustum.planes[PLANE_TOP].xyz, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(frustum.planes[PLANE_BOTTOM].xyz, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(frustum.planes[PLANE_FAR].xyz, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(frustum.planes[PLANE_NEAR].xyz, Vec3::new(0.0, 0.0, 1.0));

    for i in 0..5 {
        assert_eq!(frustum.planes[i].neg_w, -1.0, "plane {i} should add the w row");
    }
    assert_eq!(frustum.planes[PLANE_NEAR].neg_w, 0.0);
}

#[test]
fn test_point_inside_all_planes() {
    let frustum = create_perspective_frustum();
    assert!(outside_planes(&frustum, Vec3::new(0.0, 0.0, -1.0)).is_empty());
}

#[test]
fn test_right_plane() {
    let frustum = create_perspective_frustum();
    assert_eq!(outside_planes(&frustum, Vec3::new(10.0, 0.0, -1.0)), vec![PLANE_RIGHT]);
}

#[test]
fn test_left_plane() {
    let frustum = create_perspective_frustum();
    assert_eq!(outside_planes(&frustum, Vec3::new(-10.0, 0.0, -1.0)), vec![PLANE_LEFT]);
}

#[test]
fn test_top_plane() {
    let frustum = create_perspective_frustum();
    assert_eq!(outside_planes(&frustum, Vec3::new(0.0, 10.0, -1.0)), vec![PLANE_TOP]);
}

#[test]
fn test_bottom_plane() {
    let frustum = create_perspective_frustum();
    assert_eq!(outside_planes(&frustum, Vec3::new(0.0, -10.0, -1.0)), vec![PLANE_BOTTOM]);
}

#[test]
fn test_far_plane() {
    let frustum = create_perspective_frustum();
    assert_eq!(outside_planes(&frustum, Vec3::new(0.0, 0.0, -200.0)), vec![PLANE_FAR]);
}

#[test]
fn test_near_plane() {
    let frustum = create_perspective_frustum();
    assert_eq!(outside_planes(&frustum, Vec3::new(0.0, 0.0, -0.05)), vec![PLANE_NEAR]);
}

// ============================================================================
// Frustum::is_box_culled
// ============================================================================

#[test]
fn test_box_inside_frustum() {
    let frustum = create_perspective_frustum();
    let bbox = BoundingBox::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE);
    assert!(!frustum.is_box_culled(&bbox));
}

#[test]
fn test_box_outside_frustum() {
    let frustum = create_perspective_frustum();
    let bbox = BoundingBox::new(Vec3::new(100.0, 100.0, -10.0), Vec3::ONE);
    assert!(frustum.is_box_culled(&bbox));
}

#[test]
fn test_box_behind_camera() {
    let frustum = create_perspective_frustum();
    let bbox = BoundingBox::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ONE);
    assert!(frustum.is_box_culled(&bbox));
}

#[test]
fn test_box_straddling_plane_is_not_culled() {
    let frustum = create_perspective_frustum();
    // Mostly right of the frustum, one corner still inside
    let bbox = BoundingBox::new(Vec3::new(11.0, 0.0, -10.0), Vec3::splat(2.0));
    assert!(!frustum.is_box_culled(&bbox));
}

// ============================================================================
// Frustum::classify_box
// ============================================================================

#[test]
fn test_classify_inside() {
    let frustum = create_perspective_frustum();
    let bbox = BoundingBox::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE);
    assert_eq!(frustum.classify_box(&bbox), FrustumTest::Inside);
}

#[test]
fn test_classify_partial_across_near_plane() {
    let frustum = create_perspective_frustum();
    let bbox = BoundingBox::new(Vec3::ZERO, Vec3::splat(0.5));
    assert_eq!(frustum.classify_box(&bbox), FrustumTest::Partial);
}

#[test]
fn test_classify_orthographic() {
    let frustum = create_orthographic_frustum();

    let inside = BoundingBox::new(Vec3::new(0.0, 0.0, -50.0), Vec3::ONE);
    let partial = BoundingBox::new(Vec3::new(10.0, 0.0, -50.0), Vec3::ONE);
    let outside = BoundingBox::new(Vec3::new(15.0, 0.0, -50.0), Vec3::ONE);

    assert_eq!(frustum.classify_box(&inside), FrustumTest::Inside);
    assert_eq!(frustum.classify_box(&partial), FrustumTest::Partial);
    assert_eq!(frustum.classify_box(&outside), FrustumTest::Outside);
}

#[test]
fn test_classify_agrees_with_culling() {
    let frustum = create_perspective_frustum();
    let boxes = [
        BoundingBox::new(Vec3::new(0.0, 0.0, -10.0), Vec3::ONE),
        BoundingBox::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ONE),
        BoundingBox::new(Vec3::ZERO, Vec3::splat(0.5)),
        BoundingBox::new(Vec3::new(0.0, 0.0, -500.0), Vec3::splat(3.0)),
    ];

    for bbox in &boxes {
        let culled = frustum.is_box_culled(bbox);
        let outside = frustum.classify_box(bbox) == FrustumTest::Outside;
        assert_eq!(culled, outside, "disagreement for {:?}", bbox);
    }
}

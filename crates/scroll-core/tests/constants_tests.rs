// Host-side tests for constants and the camera they configure.

use glam::{Vec3, Vec4};
use scroll_core::constants::*;
use scroll_core::Camera;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(OBJECTS_DISTANCE > 0.0);
    assert!(PARALLAX_DAMPING > 0.0 && PARALLAX_DAMPING <= 1.0);
    assert!(PARALLAX_RATE_PER_SEC > 0.0);
    assert!(KICK_DURATION_SEC > 0.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(TOON_BANDS >= 2);
    assert!(DEFAULT_MATERIAL_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn camera_sees_every_object_from_its_section() {
    let objects_y: Vec<f32> = (0..3).map(|i| -OBJECTS_DISTANCE * i as f32).collect();
    for (i, &y) in objects_y.iter().enumerate() {
        let x = OBJECT_X_OFFSETS[i];
        // Section i puts the camera at y = -i * distance.
        let cam = Camera::new(Vec3::new(0.0, y, CAMERA_Z), 16.0 / 9.0);
        let clip = cam.view_projection() * Vec4::new(x, y, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0, "object {} at {:?}", i, ndc);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}

#[test]
fn camera_rejects_bad_aspect() {
    assert_eq!(Camera::new(Vec3::ZERO, 0.0).aspect, 1.0);
    assert_eq!(Camera::new(Vec3::ZERO, f32::NAN).aspect, 1.0);
    assert_eq!(Camera::new(Vec3::ZERO, 2.0).aspect, 2.0);
}

#[test]
fn camera_looks_down_negative_z() {
    let cam = Camera::new(Vec3::new(1.0, 2.0, CAMERA_Z), 1.0);
    let view = cam.view_matrix();
    let ahead = view.transform_point3(Vec3::new(1.0, 2.0, 0.0));
    assert!((ahead - Vec3::new(0.0, 0.0, -CAMERA_Z)).length() < 1e-5);
}

// Host-side tests for per-frame decisions and the camera.

use pulse_core::*;

#[test]
fn paused_app_does_nothing() {
    for element in [None, Some(true), Some(false)] {
        assert_eq!(plan_frame(true, element), FramePlan::default());
    }
}

#[test]
fn playing_element_refreshes_and_draws() {
    let plan = plan_frame(false, Some(false));
    assert!(plan.reschedule && plan.refresh && plan.draw);
}

#[test]
fn loading_element_draws_static_field() {
    for element in [None, Some(true)] {
        let plan = plan_frame(false, element);
        assert!(plan.reschedule && plan.draw);
        assert!(!plan.refresh);
    }
}

#[test]
fn camera_looks_at_field_from_positive_z() {
    let cam = Camera::for_viewport(1600, 900);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-5);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);

    // the origin sits CAMERA_Z in front of the eye
    let origin = cam.view_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((origin.z + CAMERA_Z).abs() < 1e-5);

    let clip = cam.projection_matrix() * origin.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn camera_tolerates_zero_sized_viewport() {
    let cam = Camera::for_viewport(0, 0);
    assert_eq!(cam.aspect, 1.0);
    assert!(cam.projection_matrix().is_finite());
}

use std::f32::consts::{FRAC_PI_2, TAU};

use viewer::globe::orbit_cam::{
    OrbitCamera, AUTO_ROTATE_RAD_PER_SEC, CAMERA_DISTANCE, POLAR_MAX_RAD, POLAR_MIN_RAD,
};

#[test]
fn pitch_stays_inside_polar_band() {
    let mut cam = OrbitCamera::default();
    cam.apply_drag(0.0, 1e6);
    let (lo, hi) = OrbitCamera::pitch_limits();
    assert!((cam.pitch - hi).abs() < 1e-6);
    cam.apply_drag(0.0, -1e6);
    assert!((cam.pitch - lo).abs() < 1e-6);
}

#[test]
fn pitch_limits_match_polar_band() {
    let (lo, hi) = OrbitCamera::pitch_limits();
    assert!((hi - (FRAC_PI_2 - POLAR_MIN_RAD)).abs() < 1e-6);
    assert!((lo - (FRAC_PI_2 - POLAR_MAX_RAD)).abs() < 1e-6);
    assert!(lo < 0.0 && hi > 0.0);
}

#[test]
fn distance_never_changes() {
    let mut cam = OrbitCamera::default();
    for step in 0..200 {
        cam.apply_drag((step % 17) as f32 - 8.0, (step % 13) as f32 - 6.0);
        cam.auto_rotate(0.016);
        let d = cam.eye().length();
        assert!((d - CAMERA_DISTANCE).abs() < 1e-2, "distance drifted to {d}");
    }
}

#[test]
fn auto_rotate_is_one_revolution_per_minute() {
    let mut cam = OrbitCamera::default();
    let start = cam.yaw;
    for _ in 0..60 {
        cam.auto_rotate(1.0);
    }
    assert!((cam.yaw - start - TAU).abs() < 1e-3);
    assert!((AUTO_ROTATE_RAD_PER_SEC - TAU / 60.0).abs() < 1e-9);
}

#[test]
fn drag_orbits_without_rolling() {
    let mut cam = OrbitCamera::default();
    cam.apply_drag(40.0, 10.0);
    let eye = cam.eye();
    // The eye moves on the sphere of fixed radius; up stays +Y by construction.
    assert!(eye.length() > 0.0);
    let vp = cam.view_proj();
    assert!(vp.iter().flatten().any(|v| v.abs() > 0.0));
}

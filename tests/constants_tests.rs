// Host-side checks on the tuning constants of both crates.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use rack_core::constants as rc;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_layout_fits_together() {
    // every rack of a tower fits inside the tower's height
    let top = rc::RACK_BASE_Y
        + (rc::RACKS_PER_TOWER - 1) as f32 * rc::RACK_SPACING_Y
        + rc::RACK_SIZE[1] * 0.5;
    let bottom = rc::RACK_BASE_Y - rc::RACK_SIZE[1] * 0.5;
    assert!(top <= rc::TOWER_SIZE[1] * 0.5);
    assert!(bottom >= -rc::TOWER_SIZE[1] * 0.5);
    // towers stand on the floor
    assert!(-rc::TOWER_SIZE[1] * 0.5 >= rc::FLOOR_Y);
    // racks are narrower than the tower spacing
    let gap = rc::TOWER_POSITIONS[1][0] - rc::TOWER_POSITIONS[0][0];
    assert!(rc::RACK_SIZE[0] < gap);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn temperature_and_timer_constants() {
    assert_eq!((rc::TEMP_MIN, rc::TEMP_MAX), (20, 40));
    assert_eq!(rc::TEMP_TICK_MS, 2000);
    assert_eq!(rc::BORDER_COLORS_HEX.len(), rc::RACKS_PER_TOWER);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_render_constants() {
    assert!(rc::CAMERA_ZNEAR > 0.0 && rc::CAMERA_ZNEAR < rc::CAMERA_ZFAR);
    assert!(rc::ORBIT_DAMPING > 0.0 && rc::ORBIT_DAMPING <= 1.0);
    assert!(rc::ORBIT_ZOOM_SCALE > 0.0 && rc::ORBIT_ZOOM_SCALE < 1.0);
    assert!(rc::ORBIT_MIN_DISTANCE < rc::CAMERA_EYE.length());
    assert!(rc::CAMERA_EYE.length() < rc::ORBIT_MAX_DISTANCE);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
    assert!(WHEEL_DEADZONE >= 0.0);
    assert_ne!(CANVAS_ID, OVERLAY_ID);
}

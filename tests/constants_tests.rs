// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn flight_tuning_is_within_reasonable_bounds() {
    assert!(ACCELERATION > 0.0);
    // friction must damp, never amplify
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(MAX_SPEED > 0.0);
    assert!(TURN_RATE > 0.0 && TURN_RATE < std::f32::consts::PI);
    assert!(CLIMB_STEP > 0.0);
    assert!(CAMERA_START.y >= MIN_ALTITUDE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn proximity_constants_are_positive_and_product_starts_out_of_range() {
    assert!(NEAR_THRESHOLD > 0.0);
    assert!(HYSTERESIS_MARGIN >= 0.0);
    assert!(CAMERA_START.distance(PRODUCT_ANCHOR) > NEAR_THRESHOLD);
    assert!(PRODUCT_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_steps_reach_their_limits() {
    assert!(FLASH_START > 0.0 && FLASH_STEP > 0.0);
    assert!(FADE_STEP > 0.0 && FADE_STEP <= 1.0);
    assert!(SHADER_TIME_STEP > 0.0);
    assert!(PRODUCT_BOB_AMPLITUDE > 0.0 && DRONE_BOB_AMPLITUDE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motor_ramp_is_bounded() {
    assert!(MOTOR_DELAY_MS > 0);
    assert!(MOTOR_VOLUME_STEP > 0.0 && MOTOR_VOLUME_STEP < MOTOR_VOLUME_CEILING);
    assert!(MOTOR_VOLUME_CEILING <= 1.0);
    assert!((0.0..=1.0).contains(&STARTUP_CUE_VOLUME));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presets_differ_between_day_and_night() {
    assert!(NIGHT_AMBIENT < DAY_AMBIENT);
    assert!(NIGHT_SUN < DAY_SUN);
    assert_ne!(DAY_SKY_HEX, NIGHT_SKY_HEX);
    assert!(DAY_SKY_HEX <= 0xffffff && NIGHT_SKY_HEX <= 0xffffff);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clock_and_renderer_settings_are_sane() {
    assert!(TICK_HZ > 0 && MAX_TICKS_PER_FRAME >= 1);
    assert!(RENDER_SCALE > 0.0 && RENDER_SCALE <= 1.0);
    assert!(Z_NEAR > 0.0 && Z_FAR > Z_NEAR);
    assert!(FOV_Y_DEG > 0.0 && FOV_Y_DEG < 180.0);
    assert!(FOG_NEAR < FOG_FAR);
    assert!(TONE_MAPPING_EXPOSURE > 0.0);
    assert!(START_SCREEN_FADE_MS >= 0);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        START_SCREEN_ID,
        START_BUTTON_ID,
        PROMPT_ID,
        PRODUCT_OVERLAY_ID,
        PRODUCT_IMAGE_ID,
        FLIP_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn asset_urls_are_rooted() {
    for url in [MAP_URL, PRODUCT_URL, DRONE_URL, STARTUP_CUE_URL, MOTOR_LOOP_URL] {
        assert!(url.starts_with('/'), "{url}");
    }
}

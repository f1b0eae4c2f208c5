// Host-side tests for post-processing effect state and lighting presets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod flythrough {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use flythrough::constants::*;
use flythrough::effects::*;

fn run(ticks: usize) -> Vec<EffectState> {
    let cfg = EffectConfig::default();
    let mut s = EffectState::new(&cfg);
    let mut out = vec![s.clone()];
    for _ in 0..ticks {
        s.tick(cfg.time_step, &cfg);
        out.push(s.clone());
    }
    out
}

#[test]
fn starts_black_with_flash_pending() {
    let s = EffectState::new(&EffectConfig::default());
    assert_eq!(s.fade, 0.0);
    assert!(s.flash > 0.0);
    assert!(!s.night_vision);
    assert_eq!(s.elapsed, 0.0);
}

#[test]
fn fade_is_non_decreasing_and_settles_at_one() {
    let history = run(60);
    for pair in history.windows(2) {
        assert!(pair[1].fade >= pair[0].fade);
        assert!((0.0..=1.0).contains(&pair[1].fade));
    }
    assert_eq!(history.last().map(|s| s.fade), Some(1.0));
}

#[test]
fn flash_is_non_increasing_and_settles_at_zero() {
    let history = run(60);
    for pair in history.windows(2) {
        assert!(pair[1].flash <= pair[0].flash);
        assert!(pair[1].flash >= 0.0);
    }
    assert_eq!(history.last().map(|s| s.flash), Some(0.0));
}

#[test]
fn elapsed_time_grows_every_tick() {
    let history = run(10);
    for pair in history.windows(2) {
        assert!(pair[1].elapsed > pair[0].elapsed);
    }
    let last = history.last().map(|s| s.elapsed).unwrap_or_default();
    assert!((last - 10.0 * SHADER_TIME_STEP).abs() < 1e-5);
}

#[test]
fn night_vision_swaps_presets_and_returns_exactly() {
    let cfg = EffectConfig::default();
    let mut s = EffectState::new(&cfg);
    let day = s.lighting();
    assert_eq!(day, LightingPreset::day());
    assert_eq!(s.night_uniform(), 0.0);

    assert!(s.toggle_night_vision());
    assert_eq!(s.lighting(), LightingPreset::night());
    assert_eq!(s.night_uniform(), 1.0);
    assert_ne!(s.lighting().ambient_intensity, day.ambient_intensity);

    assert!(!s.toggle_night_vision());
    let back = s.lighting();
    assert_eq!(back.ambient_intensity, day.ambient_intensity);
    assert_eq!(back.sun_intensity, day.sun_intensity);
    assert_eq!(back.background_rgb, day.background_rgb);
    assert_eq!(back.fog_rgb, day.fog_rgb);
}

#[test]
fn srgb_hex_conversion_hits_endpoints() {
    assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    let white = srgb_hex_to_linear(0xffffff);
    for c in white {
        assert!((c - 1.0).abs() < 1e-6);
    }
    // mid grey is darker in linear space
    let grey = srgb_hex_to_linear(0x808080);
    assert!(grey[0] > 0.2 && grey[0] < 0.25);
    let red = srgb_hex_to_linear(0xff0000);
    assert!(red[0] > 0.99 && red[1] == 0.0 && red[2] == 0.0);
}

#[test]
fn bob_oscillates_within_amplitude() {
    let mut bob = Bob::new(0.1, 0.5);
    assert_eq!(bob.offset(), 0.0);
    let mut seen_up = false;
    let mut seen_down = false;
    for _ in 0..100 {
        bob.tick();
        let o = bob.offset();
        assert!(o.abs() <= 0.5 + 1e-6);
        seen_up |= o > 0.4;
        seen_down |= o < -0.4;
    }
    assert!(seen_up && seen_down);
}

// Host-side tests for the engine startup sequence and the clock helpers it
// schedules against.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod flythrough {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod startup {
        include!("../src/core/startup.rs");
    }
}

use flythrough::clock::*;
use flythrough::startup::*;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn first_trigger_plays_cue_and_dismisses_start_screen() {
    let cfg = StartupConfig::default();
    let mut s = EngineStartup::default();
    assert_eq!(s.state(), EngineState::NotStarted);

    let fx = s.trigger(ms(100), &cfg);
    assert_eq!(
        fx.as_slice(),
        &[
            StartupEffect::UnlockAudio,
            StartupEffect::PlayStartupCue,
            StartupEffect::DismissStartScreen,
        ]
    );
    assert_eq!(s.state(), EngineState::Starting);
    let ev = s.scheduled_motor_start().expect("motor start scheduled");
    assert_eq!(ev.due, ms(100) + cfg.motor_delay);
}

#[test]
fn repeated_triggers_are_no_ops() {
    let cfg = StartupConfig::default();
    let mut s = EngineStartup::default();
    let mut cues = 0;
    for t in [0, 10, 20, 2000, 5000] {
        cues += s
            .trigger(ms(t), &cfg)
            .iter()
            .filter(|e| **e == StartupEffect::PlayStartupCue)
            .count();
    }
    assert_eq!(cues, 1);
    // later triggers leave the first schedule untouched
    assert_eq!(
        s.scheduled_motor_start().map(|e| e.due),
        Some(cfg.motor_delay)
    );
}

#[test]
fn ticks_before_trigger_do_nothing() {
    let cfg = StartupConfig::default();
    let mut s = EngineStartup::default();
    for t in 0..10 {
        assert!(s.tick(ms(t * 1000), &cfg).is_empty());
    }
    assert_eq!(s.state(), EngineState::NotStarted);
}

#[test]
fn motor_starts_after_wall_clock_delay_not_tick_count() {
    let cfg = StartupConfig::default();
    let clock = ManualClock::default();
    let mut s = EngineStartup::default();
    s.trigger(clock.now(), &cfg);

    // many ticks inside the delay window change nothing
    for _ in 0..80 {
        clock.advance(ms(10));
        assert!(s.tick(clock.now(), &cfg).is_empty());
    }
    assert_eq!(s.state(), EngineState::Starting);

    clock.advance(ms(700));
    let fx = s.tick(clock.now(), &cfg);
    assert_eq!(fx.as_slice(), &[StartupEffect::StartMotorLoop]);
    assert_eq!(s.state(), EngineState::Running);
    assert!(s.scheduled_motor_start().is_none());
}

#[test]
fn motor_volume_ramps_to_ceiling_then_holds() {
    let cfg = StartupConfig::default();
    let mut s = EngineStartup::default();
    s.trigger(ms(0), &cfg);
    s.tick(cfg.motor_delay, &cfg);
    assert_eq!(s.state(), EngineState::Running);

    let mut last = 0.0;
    let mut updates = 0;
    for _ in 0..100 {
        for fx in s.tick(cfg.motor_delay, &cfg) {
            match fx {
                StartupEffect::SetMotorVolume(v) => {
                    assert!(v > last);
                    assert!(v <= cfg.motor_volume_ceiling);
                    last = v;
                    updates += 1;
                }
                other => panic!("unexpected effect {:?}", other),
            }
        }
    }
    assert_eq!(last, cfg.motor_volume_ceiling);
    assert_eq!(s.motor_volume(), cfg.motor_volume_ceiling);
    let expected = (cfg.motor_volume_ceiling / cfg.motor_volume_step).ceil() as usize;
    assert!(updates == expected || updates == expected + 1);
    assert!(s.tick(cfg.motor_delay, &cfg).is_empty());
}

#[test]
fn cancelled_motor_start_never_fires() {
    let cfg = StartupConfig::default();
    let mut s = EngineStartup::default();
    s.trigger(ms(0), &cfg);
    if let Some(ev) = s.scheduled_motor_start() {
        ev.cancel_token().cancel();
    }
    assert!(s.tick(ms(10_000), &cfg).is_empty());
    assert_eq!(s.state(), EngineState::Starting);
    assert!(s.scheduled_motor_start().is_none());
}

#[test]
fn scheduled_event_fires_at_due_time() {
    let ev = ScheduledEvent::after(ms(50), ms(100));
    assert_eq!(ev.poll(ms(149)), EventPoll::Waiting);
    assert_eq!(ev.poll(ms(150)), EventPoll::Fired);
    assert_eq!(ev.poll(ms(500)), EventPoll::Fired);
    let token = ev.cancel_token();
    token.cancel();
    assert!(token.is_cancelled());
    assert_eq!(ev.poll(ms(500)), EventPoll::Cancelled);
}

#[test]
fn manual_clock_only_moves_when_advanced() {
    let clock = ManualClock::default();
    assert_eq!(clock.now(), Duration::ZERO);
    clock.advance(ms(16));
    clock.advance(ms(16));
    assert_eq!(clock.now(), ms(32));
}

#[test]
fn fixed_step_accumulates_partial_frames() {
    let mut fs = FixedStep::new(60, 4);
    assert_eq!(fs.advance(ms(10)), 0);
    assert_eq!(fs.advance(ms(10)), 1);
    // 33.4 ms is two whole 60 Hz steps
    assert_eq!(fs.advance(Duration::from_micros(33_400)), 2);
}

#[test]
fn fixed_step_caps_ticks_and_drops_backlog() {
    let mut fs = FixedStep::new(60, 4);
    assert_eq!(fs.advance(Duration::from_secs(5)), 4);
    // backlog discarded: a short frame afterwards runs at most one tick
    assert!(fs.advance(ms(17)) <= 1);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}

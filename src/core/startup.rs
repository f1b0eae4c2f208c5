use super::clock::{EventPoll, ScheduledEvent};
use super::constants::*;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct StartupConfig {
    /// Wall-clock delay between the startup cue and the motor loop.
    pub motor_delay: Duration,
    pub motor_volume_step: f32,
    pub motor_volume_ceiling: f32,
    pub startup_cue_volume: f32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            motor_delay: Duration::from_millis(MOTOR_DELAY_MS),
            motor_volume_step: MOTOR_VOLUME_STEP,
            motor_volume_ceiling: MOTOR_VOLUME_CEILING,
            startup_cue_volume: STARTUP_CUE_VOLUME,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineState {
    #[default]
    NotStarted,
    Starting,
    Running,
}

/// Side effects the host must carry out for the startup sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartupEffect {
    /// Resume a suspended audio context (gesture unlock).
    UnlockAudio,
    PlayStartupCue,
    DismissStartScreen,
    /// Begin the looping motor layer at zero volume.
    StartMotorLoop,
    SetMotorVolume(f32),
}

pub type StartupEffects = SmallVec<[StartupEffect; 4]>;

/// One-way NotStarted -> Starting -> Running sequence.
#[derive(Clone, Debug, Default)]
pub struct EngineStartup {
    state: EngineState,
    motor_volume: f32,
    motor_start: Option<ScheduledEvent>,
}

impl EngineStartup {
    #[inline]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    pub fn motor_volume(&self) -> f32 {
        self.motor_volume
    }

    /// Pending motor-start event, if the sequence is waiting on it.
    pub fn scheduled_motor_start(&self) -> Option<&ScheduledEvent> {
        self.motor_start.as_ref()
    }

    /// First call starts the engine; every later call is a no-op.
    pub fn trigger(&mut self, now: Duration, cfg: &StartupConfig) -> StartupEffects {
        let mut out = StartupEffects::new();
        if self.state != EngineState::NotStarted {
            return out;
        }
        self.state = EngineState::Starting;
        self.motor_volume = 0.0;
        self.motor_start = Some(ScheduledEvent::after(now, cfg.motor_delay));
        out.push(StartupEffect::UnlockAudio);
        out.push(StartupEffect::PlayStartupCue);
        out.push(StartupEffect::DismissStartScreen);
        log::info!("[engine] starting; motor in {:?}", cfg.motor_delay);
        out
    }

    /// Fire the scheduled motor start when due, then ramp its volume.
    pub fn tick(&mut self, now: Duration, cfg: &StartupConfig) -> StartupEffects {
        let mut out = StartupEffects::new();
        match self.state {
            EngineState::NotStarted => {}
            EngineState::Starting => {
                let poll = match &self.motor_start {
                    Some(ev) => ev.poll(now),
                    None => EventPoll::Cancelled,
                };
                match poll {
                    EventPoll::Waiting => {}
                    EventPoll::Fired => {
                        self.motor_start = None;
                        self.state = EngineState::Running;
                        out.push(StartupEffect::StartMotorLoop);
                        log::info!("[engine] motor loop started");
                    }
                    // Engine stays in Starting; nothing reschedules it.
                    EventPoll::Cancelled => self.motor_start = None,
                }
            }
            EngineState::Running => {
                if self.motor_volume < cfg.motor_volume_ceiling {
                    self.motor_volume =
                        (self.motor_volume + cfg.motor_volume_step).min(cfg.motor_volume_ceiling);
                    out.push(StartupEffect::SetMotorVolume(self.motor_volume));
                }
            }
        }
        out
    }
}

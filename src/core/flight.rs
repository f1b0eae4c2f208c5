use super::bounds::MapBounds;
use super::constants::*;
use super::input::{Control, InputState};
use glam::Vec3;

/// Tuning for the first-person flight model. All rates are per tick.
#[derive(Clone, Debug)]
pub struct FlightConfig {
    pub acceleration: f32,
    pub friction: f32,
    pub max_speed: f32,
    pub turn_rate: f32,
    pub climb_step: f32,
    pub min_altitude: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            friction: FRICTION,
            max_speed: MAX_SPEED,
            turn_rate: TURN_RATE,
            climb_step: CLIMB_STEP,
            min_altitude: MIN_ALTITUDE,
        }
    }
}

/// Camera pose and momentum.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightState {
    pub position: Vec3,
    pub yaw: f32,
    pub velocity: Vec3,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            position: CAMERA_START,
            yaw: 0.0,
            velocity: Vec3::ZERO,
        }
    }
}

/// Unit vector the camera looks along for a given yaw (-Z at yaw 0).
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

impl FlightState {
    #[inline]
    pub fn forward(&self) -> Vec3 {
        forward_from_yaw(self.yaw)
    }

    /// Advance one tick: turn, thrust, damp, cap speed, integrate, climb,
    /// then clamp. `bounds == None` means the map has not loaded and the
    /// horizontal clamp is skipped.
    pub fn step(&mut self, input: &InputState, bounds: Option<&MapBounds>, cfg: &FlightConfig) {
        if input.is_held(Control::TurnLeft) {
            self.yaw += cfg.turn_rate;
        }
        if input.is_held(Control::TurnRight) {
            self.yaw -= cfg.turn_rate;
        }

        let forward = self.forward();
        if input.is_held(Control::Forward) {
            self.velocity += forward * cfg.acceleration;
        }
        if input.is_held(Control::Back) {
            self.velocity -= forward * cfg.acceleration;
        }

        self.velocity *= cfg.friction;
        self.velocity = self.velocity.clamp_length_max(cfg.max_speed);

        self.position += self.velocity;

        if input.is_held(Control::Ascend) {
            self.position.y += cfg.climb_step;
        }
        if input.is_held(Control::Descend) {
            self.position.y -= cfg.climb_step;
        }
        self.position.y = self.position.y.max(cfg.min_altitude);

        if let Some(b) = bounds {
            self.position = b.clamp(self.position);
        }
    }
}

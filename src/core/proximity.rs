use super::constants::{HYSTERESIS_MARGIN, NEAR_THRESHOLD};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct ProximityConfig {
    /// Distance under which the product can be opened.
    pub near_threshold: f32,
    /// Extra distance past `near_threshold` before an open overlay closes
    /// itself. Tuned independently of the threshold.
    pub hysteresis_margin: f32,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            near_threshold: NEAR_THRESHOLD,
            hysteresis_margin: HYSTERESIS_MARGIN,
        }
    }
}

impl ProximityConfig {
    #[inline]
    pub fn auto_close_distance(&self) -> f32 {
        self.near_threshold + self.hysteresis_margin
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Distance-driven prompt and the product overlay state machine.
#[derive(Clone, Debug, Default)]
pub struct ProductInteraction {
    state: OverlayState,
    in_range: bool,
}

impl ProductInteraction {
    #[inline]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[inline]
    pub fn in_range(&self) -> bool {
        self.in_range
    }

    /// The "press E" affordance shows only while close and not already open.
    #[inline]
    pub fn prompt_visible(&self) -> bool {
        self.in_range && self.state == OverlayState::Closed
    }

    /// Per-tick refresh of the range signal plus passive auto-close.
    /// Returns the new `in_range`.
    pub fn update(&mut self, camera: Vec3, target: Vec3, cfg: &ProximityConfig) -> bool {
        let distance = camera.distance(target);
        self.in_range = distance < cfg.near_threshold;
        if self.state == OverlayState::Open && distance > cfg.auto_close_distance() {
            self.state = OverlayState::Closed;
        }
        self.in_range
    }

    /// Explicit interact press. Closing always succeeds; opening requires
    /// being in range at the moment of the press.
    pub fn toggle(&mut self, camera: Vec3, target: Vec3, cfg: &ProximityConfig) -> OverlayState {
        match self.state {
            OverlayState::Open => self.state = OverlayState::Closed,
            OverlayState::Closed => {
                self.in_range = camera.distance(target) < cfg.near_threshold;
                if self.in_range {
                    self.state = OverlayState::Open;
                }
            }
        }
        self.state
    }
}

/// Which side of the product the overlay image shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductFace {
    #[default]
    Front,
    Back,
}

impl ProductFace {
    pub fn flipped(self) -> Self {
        match self {
            ProductFace::Front => ProductFace::Back,
            ProductFace::Back => ProductFace::Front,
        }
    }

    pub fn image_src(self) -> &'static str {
        match self {
            ProductFace::Front => "/images/imagen1.png",
            ProductFace::Back => "/images/imagen2.png",
        }
    }
}

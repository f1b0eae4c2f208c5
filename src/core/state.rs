// Application state for the flythrough: every piece of per-frame and
// per-event mutable state lives here and is only changed through the entry
// points below. The web front-end owns one `AppState` behind an
// `Rc<RefCell<_>>` and applies the returned `Command`s to the DOM and audio.

use super::bounds::MapBounds;
use super::constants::*;
use super::effects::{Bob, EffectConfig, EffectState};
use super::flight::{FlightConfig, FlightState};
use super::input::{control_for_key, Control, InputState};
use super::loadable::Loadable;
use super::proximity::{OverlayState, ProductFace, ProductInteraction, ProximityConfig};
use super::startup::{EngineStartup, StartupConfig, StartupEffect};
use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub flight: FlightConfig,
    pub proximity: ProximityConfig,
    pub startup: StartupConfig,
    pub effects: EffectConfig,
}

/// Host-side work requested by the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Startup(StartupEffect),
    SetPromptVisible(bool),
    SetProductOverlayVisible(bool),
    SetProductImage(&'static str),
}

pub type Commands = SmallVec<[Command; 4]>;

/// Camera-local placement of the drone body overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DronePose {
    pub offset: Vec3,
    pub roll: f32,
}

pub struct AppState {
    pub config: AppConfig,
    input: InputState,
    flight: FlightState,
    interaction: ProductInteraction,
    face: ProductFace,
    effects: EffectState,
    startup: EngineStartup,
    bounds: Loadable<MapBounds>,
    product_anchor: Loadable<Vec3>,
    product_bob: Bob,
    drone_bob: Bob,
    prompt_shown: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let effects = EffectState::new(&config.effects);
        Self {
            config,
            input: InputState::default(),
            flight: FlightState::default(),
            interaction: ProductInteraction::default(),
            face: ProductFace::default(),
            effects,
            startup: EngineStartup::default(),
            bounds: Loadable::Pending,
            product_anchor: Loadable::Pending,
            product_bob: Bob::new(PRODUCT_BOB_RATE, PRODUCT_BOB_AMPLITUDE),
            drone_bob: Bob::new(DRONE_BOB_RATE, DRONE_BOB_AMPLITUDE),
            prompt_shown: false,
        }
    }

    // ---------------- accessors ----------------

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    // Runtime movement only happens in `tick`.
    #[cfg(test)]
    pub fn flight_mut(&mut self) -> &mut FlightState {
        &mut self.flight
    }

    pub fn effects(&self) -> &EffectState {
        &self.effects
    }

    pub fn interaction(&self) -> &ProductInteraction {
        &self.interaction
    }

    pub fn startup(&self) -> &EngineStartup {
        &self.startup
    }

    pub fn bounds(&self) -> Option<&MapBounds> {
        self.bounds.get()
    }

    pub fn product_face(&self) -> ProductFace {
        self.face
    }

    /// Current (bobbing) product position once the model is in the scene.
    pub fn product_position(&self) -> Option<Vec3> {
        self.product_anchor
            .get()
            .map(|a| *a + Vec3::Y * self.product_bob.offset())
    }

    pub fn drone_pose(&self) -> DronePose {
        DronePose {
            offset: DRONE_OFFSET + Vec3::Y * self.drone_bob.offset(),
            roll: self.drone_bob.phase.sin() * DRONE_ROLL_AMPLITUDE,
        }
    }

    // ---------------- asset readiness ----------------

    pub fn set_map_bounds(&mut self, bounds: MapBounds) -> bool {
        self.bounds.resolve(bounds)
    }

    pub fn map_failed(&mut self) {
        self.bounds.fail();
    }

    pub fn set_product_ready(&mut self, anchor: Vec3) -> bool {
        self.product_anchor.resolve(anchor)
    }

    pub fn product_failed(&mut self) {
        self.product_anchor.fail();
    }

    // ---------------- events ----------------

    pub fn key_down(&mut self, key: &str, now: Duration) -> Commands {
        let mut out = Commands::new();
        let Some(control) = control_for_key(key) else {
            return out;
        };
        let fresh = self.input.press(control);
        if control.starts_engine() {
            self.trigger_startup(now, &mut out);
        }
        if !fresh {
            return out;
        }
        match control {
            Control::NightVision => {
                let on = self.effects.toggle_night_vision();
                log::info!("[keys] night vision={}", on);
            }
            Control::Interact => self.toggle_overlay(&mut out),
            _ => {}
        }
        out
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(control) = control_for_key(key) {
            self.input.release(control);
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Start-screen button; same transition as the first flight key.
    pub fn start_clicked(&mut self, now: Duration) -> Commands {
        let mut out = Commands::new();
        self.trigger_startup(now, &mut out);
        out
    }

    pub fn flip_clicked(&mut self) -> Commands {
        self.face = self.face.flipped();
        let mut out = Commands::new();
        out.push(Command::SetProductImage(self.face.image_src()));
        out
    }

    /// One nominal 60 Hz step: movement, effects, proximity, then audio.
    pub fn tick(&mut self, now: Duration) -> Commands {
        let mut out = Commands::new();

        self.flight
            .step(&self.input, self.bounds.get(), &self.config.flight);

        self.effects
            .tick(self.config.effects.time_step, &self.config.effects);
        self.product_bob.tick();
        self.drone_bob.tick();

        if let Some(target) = self.product_position() {
            let before = self.interaction.state();
            self.interaction
                .update(self.flight.position, target, &self.config.proximity);
            if before == OverlayState::Open && self.interaction.state() == OverlayState::Closed {
                log::info!("[product] overlay auto-closed");
                out.push(Command::SetProductOverlayVisible(false));
            }
            self.sync_prompt(&mut out);
        }

        out.extend(
            self.startup
                .tick(now, &self.config.startup)
                .into_iter()
                .map(Command::Startup),
        );
        out
    }

    // ---------------- helpers ----------------

    fn trigger_startup(&mut self, now: Duration, out: &mut Commands) {
        out.extend(
            self.startup
                .trigger(now, &self.config.startup)
                .into_iter()
                .map(Command::Startup),
        );
    }

    fn toggle_overlay(&mut self, out: &mut Commands) {
        // Product not in the scene yet: nothing to interact with.
        let Some(target) = self.product_position() else {
            return;
        };
        let before = self.interaction.state();
        let after = self
            .interaction
            .toggle(self.flight.position, target, &self.config.proximity);
        if before != after {
            out.push(Command::SetProductOverlayVisible(
                after == OverlayState::Open,
            ));
            self.sync_prompt(out);
        }
    }

    fn sync_prompt(&mut self, out: &mut Commands) {
        let visible = self.interaction.prompt_visible();
        if visible != self.prompt_shown {
            self.prompt_shown = visible;
            out.push(Command::SetPromptVisible(visible));
        }
    }
}

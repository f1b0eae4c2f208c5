use crate::assets;
use crate::constants::{MOTOR_LOOP_URL, STARTUP_CUE_URL};
use crate::core::{Loadable, StartupEffect};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// A decoded clip routed through its own gain to the destination.
pub struct Sound {
    label: &'static str,
    gain: web::GainNode,
    buffer: Loadable<web::AudioBuffer>,
    looped: bool,
    // a loop asked to start before its buffer decoded
    start_pending: bool,
    source: Option<web::AudioBufferSourceNode>,
}

impl Sound {
    pub fn new(
        audio_ctx: &web::AudioContext,
        label: &'static str,
        volume: f32,
        looped: bool,
    ) -> Result<Self, ()> {
        let gain = create_gain(audio_ctx, volume, label)?;
        _ = gain.connect_with_audio_node(&audio_ctx.destination());
        Ok(Self {
            label,
            gain,
            buffer: Loadable::Pending,
            looped,
            start_pending: false,
            source: None,
        })
    }

    pub fn set_buffer(&mut self, audio_ctx: &web::AudioContext, buffer: web::AudioBuffer) {
        if !self.buffer.resolve(buffer) {
            return;
        }
        log::info!("[audio] {} ready", self.label);
        if self.start_pending {
            self.start_pending = false;
            self.play(audio_ctx);
        }
    }

    pub fn load_failed(&mut self) {
        self.buffer.fail();
        self.start_pending = false;
    }

    /// Start playback. One-shots that are not decoded yet are skipped; loops
    /// remember the request and start once their buffer arrives.
    pub fn play(&mut self, audio_ctx: &web::AudioContext) {
        let Some(buffer) = self.buffer.get() else {
            if self.looped && matches!(self.buffer, Loadable::Pending) {
                self.start_pending = true;
            } else {
                log::debug!("[audio] {} not loaded; skipped", self.label);
            }
            return;
        };
        if self.looped && self.source.is_some() {
            return;
        }
        let src = match audio_ctx.create_buffer_source() {
            Ok(s) => s,
            Err(e) => {
                log::error!("{} AudioBufferSourceNode error: {:?}", self.label, e);
                return;
            }
        };
        src.set_buffer(Some(buffer));
        src.set_loop(self.looped);
        _ = src.connect_with_audio_node(&self.gain);
        _ = src.start();
        self.source = Some(src);
    }

    #[inline]
    pub fn set_volume(&self, volume: f32) {
        self.gain.gain().set_value(volume);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Startup,
    Motor,
}

impl Cue {
    pub fn url(self) -> &'static str {
        match self {
            Cue::Startup => STARTUP_CUE_URL,
            Cue::Motor => MOTOR_LOOP_URL,
        }
    }
}

/// Audio context plus the two clips of the engine startup sequence.
pub struct AudioRig {
    pub ctx: web::AudioContext,
    pub startup_cue: Sound,
    pub motor: Sound,
}

impl AudioRig {
    pub fn new(startup_cue_volume: f32) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let startup_cue = Sound::new(&ctx, "startup cue", startup_cue_volume, false)
            .map_err(|_| anyhow::anyhow!("startup cue gain"))?;
        let motor = Sound::new(&ctx, "motor loop", 0.0, true)
            .map_err(|_| anyhow::anyhow!("motor gain"))?;
        Ok(Self {
            ctx,
            startup_cue,
            motor,
        })
    }

    pub fn sound_mut(&mut self, cue: Cue) -> &mut Sound {
        match cue {
            Cue::Startup => &mut self.startup_cue,
            Cue::Motor => &mut self.motor,
        }
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn unlock(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    pub fn apply(&mut self, effect: StartupEffect) {
        match effect {
            StartupEffect::UnlockAudio => self.unlock(),
            StartupEffect::PlayStartupCue => self.startup_cue.play(&self.ctx),
            StartupEffect::StartMotorLoop => {
                self.motor.set_volume(0.0);
                self.motor.play(&self.ctx);
            }
            StartupEffect::SetMotorVolume(v) => self.motor.set_volume(v),
            StartupEffect::DismissStartScreen => {}
        }
    }
}

/// Fetch and decode an audio file into a buffer.
pub async fn load_buffer(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let bytes = assets::fetch_array_buffer(url).await?;
    let promise = audio_ctx
        .decode_audio_data(&bytes)
        .map_err(|e| anyhow::anyhow!("decodeAudioData({}): {:?}", url, e))?;
    let decoded = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|_| anyhow::anyhow!("{} did not decode to an AudioBuffer", url))
}

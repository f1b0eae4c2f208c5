use super::constants::*;

#[derive(Clone, Debug)]
pub struct EffectConfig {
    pub flash_start: f32,
    pub flash_step: f32,
    pub fade_step: f32,
    /// Shader time advanced per tick.
    pub time_step: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            flash_start: FLASH_START,
            flash_step: FLASH_STEP,
            fade_step: FADE_STEP,
            time_step: SHADER_TIME_STEP,
        }
    }
}

/// Scene lighting and sky colours selected by the night-vision toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingPreset {
    pub ambient_intensity: f32,
    pub sun_intensity: f32,
    pub background_rgb: [f32; 3],
    pub fog_rgb: [f32; 3],
}

impl LightingPreset {
    pub fn day() -> Self {
        Self {
            ambient_intensity: DAY_AMBIENT,
            sun_intensity: DAY_SUN,
            background_rgb: srgb_hex_to_linear(DAY_SKY_HEX),
            fog_rgb: srgb_hex_to_linear(DAY_SKY_HEX),
        }
    }

    pub fn night() -> Self {
        Self {
            ambient_intensity: NIGHT_AMBIENT,
            sun_intensity: NIGHT_SUN,
            background_rgb: srgb_hex_to_linear(NIGHT_SKY_HEX),
            fog_rgb: srgb_hex_to_linear(NIGHT_SKY_HEX),
        }
    }
}

/// Convert a 0xRRGGBB sRGB colour to linear components.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

/// Post-processing scalars written to the drone shader every frame.
#[derive(Clone, Debug)]
pub struct EffectState {
    pub elapsed: f32,
    pub fade: f32,
    pub flash: f32,
    pub night_vision: bool,
}

impl EffectState {
    pub fn new(cfg: &EffectConfig) -> Self {
        Self {
            elapsed: 0.0,
            fade: 0.0,
            flash: cfg.flash_start.max(0.0),
            night_vision: false,
        }
    }

    /// Fade in from black and burn off the start-up flash.
    pub fn tick(&mut self, dt: f32, cfg: &EffectConfig) {
        self.elapsed += dt;
        self.flash = (self.flash - cfg.flash_step).max(0.0);
        self.fade = (self.fade + cfg.fade_step).min(1.0);
    }

    pub fn toggle_night_vision(&mut self) -> bool {
        self.night_vision = !self.night_vision;
        self.night_vision
    }

    #[inline]
    pub fn night_uniform(&self) -> f32 {
        if self.night_vision {
            1.0
        } else {
            0.0
        }
    }

    pub fn lighting(&self) -> LightingPreset {
        if self.night_vision {
            LightingPreset::night()
        } else {
            LightingPreset::day()
        }
    }
}

/// Sinusoidal idle motion: `amplitude * sin(phase)`, phase advancing per tick.
#[derive(Clone, Copy, Debug)]
pub struct Bob {
    pub phase: f32,
    pub rate: f32,
    pub amplitude: f32,
}

impl Bob {
    pub const fn new(rate: f32, amplitude: f32) -> Self {
        Self {
            phase: 0.0,
            rate,
            amplitude,
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.phase += self.rate;
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.phase.sin() * self.amplitude
    }
}

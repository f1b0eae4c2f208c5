use crate::audio::AudioRig;
use crate::core::{Command, StartupEffect};
use crate::overlay;
use web_sys as web;

/// Browser-side collaborators that model commands are applied to.
pub struct Host {
    pub document: web::Document,
    /// `None` when the audio context could not be created; sound is skipped.
    pub audio: Option<AudioRig>,
}

impl Host {
    pub fn apply(&mut self, commands: impl IntoIterator<Item = Command>) {
        for cmd in commands {
            match cmd {
                Command::Startup(StartupEffect::DismissStartScreen) => {
                    overlay::dismiss_start_screen(&self.document)
                }
                Command::Startup(effect) => {
                    if let Some(audio) = self.audio.as_mut() {
                        audio.apply(effect);
                    }
                }
                Command::SetPromptVisible(v) => overlay::set_prompt_visible(&self.document, v),
                Command::SetProductOverlayVisible(v) => {
                    overlay::set_product_visible(&self.document, v)
                }
                Command::SetProductImage(src) => overlay::set_product_image(&self.document, src),
            }
        }
    }
}

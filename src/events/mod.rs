pub mod keyboard;

pub use keyboard::{wire_focus_loss, wire_keyboard};

use fnv::FnvHashSet;

/// Logical controls the flythrough responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
    Ascend,
    Descend,
    NightVision,
    Interact,
}

impl Control {
    /// Flight keys double as the "start the engine" gesture.
    #[inline]
    pub fn starts_engine(self) -> bool {
        matches!(
            self,
            Control::Forward
                | Control::Back
                | Control::TurnLeft
                | Control::TurnRight
                | Control::Ascend
                | Control::Descend
        )
    }
}

/// Map a `KeyboardEvent.key` string to a control, ignoring case.
#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    if key == " " {
        return Some(Control::Ascend);
    }
    match key.to_ascii_lowercase().as_str() {
        "w" => Some(Control::Forward),
        "s" => Some(Control::Back),
        "a" => Some(Control::TurnLeft),
        "d" => Some(Control::TurnRight),
        "shift" => Some(Control::Descend),
        "q" => Some(Control::NightVision),
        "e" => Some(Control::Interact),
        _ => None,
    }
}

#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: FnvHashSet<Control>,
}

impl InputState {
    /// Mark a control held. Returns `true` only on the up->down edge, so
    /// browser key repeat does not count as a fresh press.
    pub fn press(&mut self, control: Control) -> bool {
        self.held.insert(control)
    }

    pub fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    #[inline]
    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    // Window lost focus; keyup events will never arrive for held keys.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

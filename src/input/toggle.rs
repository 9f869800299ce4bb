use super::counter::EdgeEvent;

/// Push-on, push-off state driven by confirmed presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleLatch {
    on: bool,
}

impl ToggleLatch {
    pub const fn new(on: bool) -> Self {
        Self { on }
    }

    /// Flip on a confirmed press; anything else leaves the state alone.
    pub fn on_event(&mut self, event: EdgeEvent) -> bool {
        if event == EdgeEvent::PressConfirmed {
            self.on = !self.on;
        }
        self.on
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }
}

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);

    fn set(&mut self, on: bool) {
        if on { self.on() } else { self.off() }
    }
}

/// Raw digital input. Polarity is left to the consumer.
pub trait Button {
    /// `true` when the line reads electrically high.
    fn is_high(&mut self) -> bool;
}

use embassy_time::Duration;

/// Detects a press held for at least `threshold`.
///
/// Feed it the debounced state each tick. It fires once per press and re-arms on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldDetector {
    threshold: Duration,
    held_for: Duration,
    fired: bool,
}

impl HoldDetector {
    pub const fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            held_for: Duration::from_ticks(0),
            fired: false,
        }
    }

    /// Returns `true` on the tick the hold threshold is first reached.
    pub fn update(&mut self, active: bool, elapsed: Duration) -> bool {
        if !active {
            self.held_for = Duration::from_ticks(0);
            self.fired = false;
            return false;
        }

        self.held_for = self.held_for.checked_add(elapsed).unwrap_or(Duration::MAX);
        if !self.fired && self.held_for >= self.threshold {
            self.fired = true;
            debug!("hold threshold reached after {} ms", self.held_for.as_millis());
            return true;
        }
        false
    }

    /// Whether the current press has been held past the threshold.
    pub fn is_held(&self) -> bool {
        self.fired
    }

    pub fn held_for(&self) -> Duration {
        self.held_for
    }
}

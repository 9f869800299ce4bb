//! Debounced, edge-triggered press counter for a single digital input.
//!
//! The counter is fed one raw sample per tick. A raw level only becomes the
//! debounced level after it has held for the debounce window, and the count
//! advances once per confirmed not-pressed to pressed edge. Holding the button
//! counts once; contact chatter shorter than the window is never seen.

use embassy_time::Duration;

use crate::error::ConfigError;

/// Typical switch chatter settles within 20 ms.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(20);

/// Full range of the 8-bit count.
pub const DEFAULT_MAX_COUNT: u8 = u8::MAX;

/// Raw level that means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Switch to ground with a pull-up (the usual wiring).
    Low,
    /// Switch to the supply with a pull-down.
    High,
}

impl ActiveLevel {
    /// Whether a raw level (`true` = high) is the active one.
    pub const fn is_active(self, raw: bool) -> bool {
        match self {
            ActiveLevel::Low => !raw,
            ActiveLevel::High => raw,
        }
    }
}

/// Result of one [`DebouncedInputCounter::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeEvent {
    None,
    PressConfirmed,
    ReleaseConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterConfig {
    pub active_level: ActiveLevel,
    /// Zero turns the counter into a plain edge detector.
    pub debounce_window: Duration,
    pub max_count: u8,
}

impl CounterConfig {
    pub const fn new(active_level: ActiveLevel, debounce_window: Duration) -> Self {
        Self {
            active_level,
            debounce_window,
            max_count: DEFAULT_MAX_COUNT,
        }
    }

    pub const fn with_max_count(mut self, max_count: u8) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 {
            return Err(ConfigError::ZeroMaxCount);
        }
        Ok(())
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::new(ActiveLevel::Low, DEFAULT_DEBOUNCE_WINDOW)
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedInputCounter {
    config: CounterConfig,
    /// Set by the first sample; nothing is assumed about the line before that.
    primed: bool,
    raw: bool,
    pending: bool,
    debounced: bool,
    stable_for: Duration,
    count: u8,
}

impl DebouncedInputCounter {
    pub fn new(config: CounterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // Until primed, `debounced` holds the inactive level so `is_active` reads false.
        let inactive = !matches!(config.active_level, ActiveLevel::High);
        Ok(Self {
            config,
            primed: false,
            raw: inactive,
            pending: inactive,
            debounced: inactive,
            stable_for: Duration::from_ticks(0),
            count: 0,
        })
    }

    /// Feed one raw sample (`true` = electrically high) taken `elapsed` after the previous one.
    pub fn sample(&mut self, raw: bool, elapsed: Duration) -> EdgeEvent {
        self.raw = raw;

        if !self.primed {
            self.primed = true;
            self.pending = raw;
            self.debounced = raw;
            self.stable_for = Duration::from_ticks(0);
            trace!("input primed, active: {}", self.is_active());
            return EdgeEvent::None;
        }

        if raw != self.pending {
            self.pending = raw;
            self.stable_for = Duration::from_ticks(0);
        } else {
            self.stable_for = self.stable_for.checked_add(elapsed).unwrap_or(Duration::MAX);
        }

        if self.stable_for < self.config.debounce_window || self.pending == self.debounced {
            return EdgeEvent::None;
        }

        self.debounced = self.pending;
        if self.config.active_level.is_active(self.debounced) {
            if self.count < self.config.max_count {
                self.count += 1;
            }
            EdgeEvent::PressConfirmed
        } else {
            EdgeEvent::ReleaseConfirmed
        }
    }

    /// Zero the count. A button held through the reset stays pressed and is not counted again.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn max_count(&self) -> u8 {
        self.config.max_count
    }

    pub fn is_saturated(&self) -> bool {
        self.count >= self.config.max_count
    }

    /// Debounced "pressed" state.
    pub fn is_active(&self) -> bool {
        self.config.active_level.is_active(self.debounced)
    }

    /// Last raw sample, unfiltered.
    pub fn raw(&self) -> bool {
        self.raw
    }

    /// How long the pending level has been steady.
    pub fn stable_for(&self) -> Duration {
        self.stable_for
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }
}

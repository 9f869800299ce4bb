use embassy_time::Duration;

use crate::error::ConfigError;
use crate::input::counter::{DEFAULT_DEBOUNCE_WINDOW, DEFAULT_MAX_COUNT};
use crate::input::limit::DEFAULT_LIMIT;
use crate::input::{ActiveLevel, CounterConfig, LimitPolicy};

/// Main loop cadence.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    /// Shared by every button on the panel.
    pub active_level: ActiveLevel,
    pub debounce_window: Duration,
    pub tick_period: Duration,
    pub max_count: u8,
    pub limit: u8,
    pub limit_policy: LimitPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            active_level: ActiveLevel::Low,
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            tick_period: DEFAULT_TICK_PERIOD,
            max_count: DEFAULT_MAX_COUNT,
            limit: DEFAULT_LIMIT,
            limit_policy: LimitPolicy::Latch,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period == Duration::from_ticks(0) {
            return Err(ConfigError::ZeroTickPeriod);
        }
        self.counter().validate()?;
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if self.limit > self.max_count {
            return Err(ConfigError::LimitAboveMax {
                limit: self.limit,
                max: self.max_count,
            });
        }
        Ok(())
    }

    /// Counter settings for the counted button.
    pub fn counter(&self) -> CounterConfig {
        CounterConfig::new(self.active_level, self.debounce_window).with_max_count(self.max_count)
    }

    /// Reset and bootloader buttons only need their level; a 1-bit count is enough.
    pub fn control(&self) -> CounterConfig {
        CounterConfig::new(self.active_level, self.debounce_window).with_max_count(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.limit, 50);
        assert_eq!(config.max_count, 255);
        assert_eq!(config.tick_period, Duration::from_millis(10));
        assert_eq!(config.debounce_window, Duration::from_millis(20));
    }

    #[test]
    fn rejects_bad_values() {
        let zero_tick = AppConfig {
            tick_period: Duration::from_ticks(0),
            ..AppConfig::default()
        };
        assert_eq!(zero_tick.validate(), Err(ConfigError::ZeroTickPeriod));

        let zero_max = AppConfig {
            max_count: 0,
            ..AppConfig::default()
        };
        assert_eq!(zero_max.validate(), Err(ConfigError::ZeroMaxCount));

        let zero_limit = AppConfig {
            limit: 0,
            ..AppConfig::default()
        };
        assert_eq!(zero_limit.validate(), Err(ConfigError::ZeroLimit));

        let unreachable = AppConfig {
            limit: 60,
            max_count: 50,
            ..AppConfig::default()
        };
        assert_eq!(
            unreachable.validate(),
            Err(ConfigError::LimitAboveMax { limit: 60, max: 50 })
        );
    }
}

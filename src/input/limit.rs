use crate::error::ConfigError;

/// Presses needed to light the limit LED.
pub const DEFAULT_LIMIT: u8 = 50;

/// `count >= limit`.
pub const fn has_reached_limit(count: u8, limit: u8) -> bool {
    count >= limit
}

/// How a [`LimitIndicator`] follows the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitPolicy {
    /// Once reached, stays reached until [`LimitIndicator::clear`].
    #[default]
    Latch,
    /// Reached exactly while the count is at or above the limit.
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LimitIndicator {
    limit: u8,
    policy: LimitPolicy,
    lit: bool,
}

impl LimitIndicator {
    pub fn new(limit: u8, policy: LimitPolicy) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(Self {
            limit,
            policy,
            lit: false,
        })
    }

    /// Re-evaluate against `count`; returns whether the indicator is lit.
    pub fn update(&mut self, count: u8) -> bool {
        let reached = has_reached_limit(count, self.limit);
        self.lit = match self.policy {
            LimitPolicy::Latch => self.lit || reached,
            LimitPolicy::Live => reached,
        };
        self.lit
    }

    pub fn clear(&mut self) {
        self.lit = false;
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn limit(&self) -> u8 {
        self.limit
    }

    pub fn policy(&self) -> LimitPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_comparison() {
        assert!(!has_reached_limit(49, 50));
        assert!(has_reached_limit(50, 50));
        assert!(has_reached_limit(255, 50));
    }

    #[test]
    fn latch_survives_count_reset() {
        let mut indicator = LimitIndicator::new(3, LimitPolicy::Latch).unwrap();
        assert!(!indicator.update(2));
        assert!(indicator.update(3));
        assert!(indicator.update(0));

        indicator.clear();
        assert!(!indicator.update(0));
    }

    #[test]
    fn live_follows_count() {
        let mut indicator = LimitIndicator::new(3, LimitPolicy::Live).unwrap();
        assert!(indicator.update(4));
        assert!(!indicator.update(0));
        assert!(!indicator.is_lit());
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert_eq!(
            LimitIndicator::new(0, LimitPolicy::Latch),
            Err(ConfigError::ZeroLimit)
        );
    }
}

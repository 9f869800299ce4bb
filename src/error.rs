use core::fmt;

/// Rejected configuration.
///
/// Raised only by constructors and `validate`; sampling never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A counter maximum of zero leaves nothing to count.
    ZeroMaxCount,
    /// A limit of zero is reached before the first press.
    ZeroLimit,
    /// The limit is above the saturation point of the counter.
    LimitAboveMax { limit: u8, max: u8 },
    /// The polling loop needs a non-zero period.
    ZeroTickPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMaxCount => f.write_str("maximum count must be at least 1"),
            ConfigError::ZeroLimit => f.write_str("limit must be at least 1"),
            ConfigError::LimitAboveMax { limit, max } => {
                write!(f, "limit {} can never be reached by a count saturating at {}", limit, max)
            }
            ConfigError::ZeroTickPeriod => f.write_str("tick period must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn display_names_the_offending_values() {
        let err = ConfigError::LimitAboveMax { limit: 60, max: 50 };
        assert_eq!(
            err.to_string(),
            "limit 60 can never be reached by a count saturating at 50"
        );
    }
}

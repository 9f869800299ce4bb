//! Debounced input handling: the press counter and the small policies built on its events.

pub mod bounce;
pub mod counter;
pub mod hold;
pub mod limit;
pub mod toggle;

pub use counter::{ActiveLevel, CounterConfig, DebouncedInputCounter, EdgeEvent};
pub use limit::{LimitIndicator, LimitPolicy, has_reached_limit};

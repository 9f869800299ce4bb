//! Contact bounce measurement.
//!
//! Counts every raw level change with no filtering, grouping changes that are
//! closer together than a quiet window into one burst. The longest burst seen
//! is a good lower bound for the debounce window of that switch.

use embassy_time::Duration;
use heapless::HistoryBuffer;

/// One group of raw transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BounceBurst {
    /// Raw level changes in the burst; 1 means a clean transition.
    pub edges: u16,
    /// Time from the first change to the last.
    pub span: Duration,
    /// Raw level the line settled on.
    pub settled: bool,
}

impl BounceBurst {
    pub fn bounced(&self) -> bool {
        self.edges > 1
    }
}

pub struct BounceProbe<const N: usize> {
    quiet: Duration,
    last_raw: Option<bool>,
    in_burst: bool,
    edges: u16,
    span: Duration,
    quiet_for: Duration,
    history: HistoryBuffer<BounceBurst, N>,
}

impl<const N: usize> BounceProbe<N> {
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            last_raw: None,
            in_burst: false,
            edges: 0,
            span: Duration::from_ticks(0),
            quiet_for: Duration::from_ticks(0),
            history: HistoryBuffer::new(),
        }
    }

    /// Feed one raw sample; returns a burst when it closes.
    pub fn observe(&mut self, raw: bool, elapsed: Duration) -> Option<BounceBurst> {
        let last = self.last_raw.replace(raw)?;
        let edge = raw != last;

        if !self.in_burst {
            if edge {
                self.in_burst = true;
                self.edges = 1;
                self.span = Duration::from_ticks(0);
                self.quiet_for = Duration::from_ticks(0);
            }
            return None;
        }

        self.quiet_for = self.quiet_for.checked_add(elapsed).unwrap_or(Duration::MAX);
        if edge {
            self.span = self.span.checked_add(self.quiet_for).unwrap_or(Duration::MAX);
            self.quiet_for = Duration::from_ticks(0);
            self.edges = self.edges.saturating_add(1);
            return None;
        }
        if self.quiet_for < self.quiet {
            return None;
        }

        self.in_burst = false;
        let burst = BounceBurst {
            edges: self.edges,
            span: self.span,
            settled: raw,
        };
        if burst.bounced() {
            debug!("bounce: {} edges over {} us", burst.edges, burst.span.as_micros());
        }
        self.history.write(burst);
        Some(burst)
    }

    pub fn last(&self) -> Option<&BounceBurst> {
        self.history.recent()
    }

    /// Oldest first.
    pub fn bursts(&self) -> impl Iterator<Item = &BounceBurst> {
        self.history.oldest_ordered()
    }

    /// Longest recorded burst span.
    pub fn worst_span(&self) -> Option<Duration> {
        self.history.as_slice().iter().map(|burst| burst.span).max()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.in_burst = false;
    }
}

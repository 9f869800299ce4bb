//! Press counter application.
//!
//! One call to [`PressCounterApp::tick`] is one pass of the board's main loop:
//! - SW2 presses are counted, and LED D2 shows the debounced SW2 state.
//! - LED D3 lights when the count reaches the limit.
//! - Holding SW3 clears the count and LED D3.
//! - Pressing SW1 asks the caller to restart into the bootloader.

pub mod config;

use embassy_time::Duration;

pub use config::{AppConfig, DEFAULT_TICK_PERIOD};

use crate::error::ConfigError;
use crate::hardware::{Button, Led};
use crate::input::{DebouncedInputCounter, EdgeEvent, LimitIndicator};

/// Board I/O used by the application.
pub struct Panel<B, L> {
    /// SW2
    pub count_button: B,
    /// SW3
    pub reset_button: B,
    /// SW1
    pub boot_button: B,
    /// D2
    pub press_led: L,
    /// D3
    pub limit_led: L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    Continue,
    /// SW1 was pressed; the caller should reset the MCU.
    EnterBootloader,
}

pub struct PressCounterApp<B, L> {
    panel: Panel<B, L>,
    config: AppConfig,
    presses: DebouncedInputCounter,
    reset: DebouncedInputCounter,
    boot: DebouncedInputCounter,
    limit: LimitIndicator,
    last_event: EdgeEvent,
}

impl<B, L> PressCounterApp<B, L>
where
    B: Button,
    L: Led,
{
    pub fn new(mut panel: Panel<B, L>, config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        panel.press_led.off();
        panel.limit_led.off();

        Ok(Self {
            panel,
            config,
            presses: DebouncedInputCounter::new(config.counter())?,
            reset: DebouncedInputCounter::new(config.control())?,
            boot: DebouncedInputCounter::new(config.control())?,
            limit: LimitIndicator::new(config.limit, config.limit_policy)?,
            last_event: EdgeEvent::None,
        })
    }

    /// Run one pass of the main loop, `elapsed` after the previous one.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        let event = self.presses.sample(self.panel.count_button.is_high(), elapsed);
        self.last_event = event;
        self.panel.press_led.set(self.presses.is_active());

        match event {
            EdgeEvent::PressConfirmed if self.presses.is_saturated() => {
                warn!("press count saturated at {}", self.presses.count());
            }
            EdgeEvent::PressConfirmed => debug!("press {}", self.presses.count()),
            EdgeEvent::ReleaseConfirmed => trace!("release"),
            EdgeEvent::None => {}
        }

        let was_lit = self.limit.is_lit();
        if self.limit.update(self.presses.count()) && !was_lit {
            info!("limit of {} presses reached", self.limit.limit());
        }

        let reset_event = self.reset.sample(self.panel.reset_button.is_high(), elapsed);
        if reset_event == EdgeEvent::PressConfirmed {
            info!("count cleared at {}", self.presses.count());
        }
        if self.reset.is_active() {
            self.presses.reset();
            self.limit.clear();
        }
        self.panel.limit_led.set(self.limit.is_lit());

        if self.boot.sample(self.panel.boot_button.is_high(), elapsed) == EdgeEvent::PressConfirmed {
            warn!("bootloader requested");
            return TickOutcome::EnterBootloader;
        }
        TickOutcome::Continue
    }

    pub fn count(&self) -> u8 {
        self.presses.count()
    }

    pub fn limit_reached(&self) -> bool {
        self.limit.is_lit()
    }

    /// Event produced by the counted button on the last tick.
    pub fn last_event(&self) -> EdgeEvent {
        self.last_event
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn panel(&self) -> &Panel<B, L> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel<B, L> {
        &mut self.panel
    }
}

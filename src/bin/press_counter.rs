//! STM32 Blue Pill Button Press Counter
//! =============================================================================================
//!
//! Counts presses of a pushbutton, with debouncing, and lights an LED once a
//! press limit is reached.
//!
//! Hardware Connections (all buttons switch to GND, internal pull-ups enabled):
//!   SW1 (bootloader)  -> PB12
//!   SW2 (count)       -> PB13
//!   SW3 (clear)       -> PB14
//!   LED D2 (pressed)  -> PC13 (onboard, lit when low)
//!   LED D3 (limit)    -> PA1 (via resistor to GND, lit when high)
//!
//! Behavior:
//! 1. Each debounced SW2 press adds one to the count; holding SW2 counts once
//! 2. D2 shows the debounced SW2 state
//! 3. D3 lights when the count reaches 50 and stays lit until SW3 is held
//! 4. SW1 resets the MCU so the bootloader can take over
//! 5. Every counted press is reported over defmt RTT
//!
//! Build:
//!   cargo build --release --features board --target thumbv7m-none-eabi

#![no_std]
#![no_main]

use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    channel::{Channel, Receiver},
};
use embassy_time::Ticker;
use panic_probe as _; // Panic handler
use press_counter::{
    app::{AppConfig, Panel, PressCounterApp, TickOutcome},
    hardware::{GpioButton, GpioLed},
    input::{ActiveLevel, EdgeEvent},
};

/// Snapshot sent to the report task after each counted press
#[derive(defmt::Format)]
struct PressReport {
    count: u8,
    limit_reached: bool,
}

// Channel for press reports (sampling task -> report task)
static REPORT_CHANNEL: Channel<ThreadModeRawMutex, PressReport, 4> = Channel::new();

/// Main application entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Initialize peripherals with default configuration
    let p = embassy_stm32::init(Default::default());

    let config = AppConfig::default();
    defmt::info!("Press counter starting: {}", config);

    let panel = Panel {
        boot_button: GpioButton::new(Input::new(p.PB12, Pull::Up)),
        count_button: GpioButton::new(Input::new(p.PB13, Pull::Up)),
        reset_button: GpioButton::new(Input::new(p.PB14, Pull::Up)),
        // Initial levels keep both LEDs dark until the first tick
        press_led: GpioLed::active_low(Output::new(p.PC13, Level::High, Speed::Low)),
        limit_led: GpioLed::new(Output::new(p.PA1, Level::Low, Speed::Low), ActiveLevel::High),
    };

    let mut app = PressCounterApp::new(panel, config).expect("Invalid press counter configuration");

    // Spawn press report task
    spawner
        .spawn(report_task(REPORT_CHANNEL.receiver()))
        .expect("Failed to spawn report task");

    let sender = REPORT_CHANNEL.sender();
    let mut ticker = Ticker::every(config.tick_period);

    // Main polling loop - one sample of every button per tick
    loop {
        if app.tick(config.tick_period) == TickOutcome::EnterBootloader {
            defmt::warn!("SW1 pressed, resetting");
            cortex_m::peripheral::SCB::sys_reset();
        }

        if app.last_event() == EdgeEvent::PressConfirmed {
            // Never wait on the report task; a full channel drops the report
            if sender
                .try_send(PressReport {
                    count: app.count(),
                    limit_reached: app.limit_reached(),
                })
                .is_err()
            {
                defmt::debug!("Report channel full");
            }
        }

        ticker.next().await;
    }
}

/// Press Report Task
///
/// Logs the running count and limit state after each counted press.
#[embassy_executor::task]
async fn report_task(receiver: Receiver<'static, ThreadModeRawMutex, PressReport, 4>) {
    loop {
        let report = receiver.receive().await;
        defmt::info!("{}", report);
    }
}

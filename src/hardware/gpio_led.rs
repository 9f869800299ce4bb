use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use super::traits::Led;
use crate::input::ActiveLevel;

pub struct GpioLed<P> {
    pin: P,
    polarity: ActiveLevel,
}

impl<P> GpioLed<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    /// LED lit when the pin is driven to `polarity`.
    pub fn new(pin: P, polarity: ActiveLevel) -> Self {
        Self { pin, polarity }
    }

    /// Blue Pill PC13 style: anode to 3V3, lit when the pin is low.
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    pub fn is_on(&mut self) -> bool {
        let high = match self.pin.is_set_high() {
            Ok(high) => high,
            Err(never) => match never {},
        };
        self.polarity.is_active(high)
    }

    fn drive(&mut self, high: bool) {
        let result = if high { self.pin.set_high() } else { self.pin.set_low() };
        if let Err(never) = result {
            match never {}
        }
    }
}

impl<P> Led for GpioLed<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn on(&mut self) {
        self.drive(self.polarity == ActiveLevel::High);
    }

    fn off(&mut self) {
        self.drive(self.polarity == ActiveLevel::Low);
    }

    fn toggle(&mut self) {
        if let Err(never) = StatefulOutputPin::toggle(&mut self.pin) {
            match never {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct FakePin {
        high: bool,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for FakePin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn active_low_led_drives_pin_low_to_light() {
        let mut led = GpioLed::active_low(FakePin::default());
        led.off();
        assert!(led.pin.high);
        assert!(!led.is_on());

        led.on();
        assert!(!led.pin.high);
        assert!(led.is_on());

        led.toggle();
        assert!(!led.is_on());
    }

    #[test]
    fn active_high_led_follows_set() {
        let mut led = GpioLed::new(FakePin::default(), ActiveLevel::High);
        led.set(true);
        assert!(led.pin.high);
        led.set(false);
        assert!(!led.pin.high);
    }
}

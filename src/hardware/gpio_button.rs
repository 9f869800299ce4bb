use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use super::traits::Button;

pub struct GpioButton<P> {
    pin: P,
}

impl<P> GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> Button for GpioButton<P>
where
    P: InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

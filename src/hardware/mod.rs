pub mod gpio_button;
pub mod gpio_led;
pub mod traits;

pub use gpio_button::GpioButton;
pub use gpio_led::GpioLed;
pub use traits::{Button, Led};

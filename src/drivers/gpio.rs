//! `embedded-hal` pin handle over the raw GPIO helpers in [`hw_init`].
//!
//! Every consumer in the firmware (sensors, ignition button, indicators,
//! LCD bus) is generic over `InputPin` / `OutputPin`, so this is the only
//! place where a pin number turns into a register access.  Direction and
//! pull are fixed once by [`hw_init::init_peripherals`]; a `GpioPin` does
//! not reconfigure anything.

use core::convert::Infallible;

use embedded_hal::digital::{Error as _, ErrorType, InputPin, OutputPin, PinState};
use log::warn;

use crate::drivers::hw_init;

/// Sample an input once.  A failed read reports HIGH; on active-low wiring
/// that means "not engaged" / "not pressed", the same as a missing device.
pub fn sample_level<P: InputPin>(pin: &mut P) -> PinState {
    match pin.is_low() {
        Ok(true) => PinState::Low,
        Ok(false) => PinState::High,
        Err(e) => {
            warn!("GPIO read failed ({:?}), treating as HIGH", e.kind());
            PinState::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioPin {
    pin: i32,
}

impl GpioPin {
    pub const fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl ErrorType for GpioPin {
    type Error = Infallible;
}

impl InputPin for GpioPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(hw_init::gpio_read(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!hw_init::gpio_read(self.pin))
    }
}

impl OutputPin for GpioPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, true);
        Ok(())
    }
}

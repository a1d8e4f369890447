//! Seat pressure and seatbelt buckle switches.
//!
//! All four are dry contacts to ground with the pad's pull-up enabled:
//! a closed contact (seat occupied, belt buckled) reads LOW.
//!
//! ## Polarity policy
//!
//! | Raw level | Engaged |
//! |-----------|---------|
//! | LOW (0)   | true    |
//! | HIGH (1)  | false   |
//!
//! An unplugged switch floats HIGH and is therefore indistinguishable from
//! "not engaged".  There is no error path.

use embedded_hal::digital::{InputPin, PinState};

use crate::drivers::gpio::sample_level;

/// Map a raw active-low level to the logical "engaged" state.
pub fn engaged(level: PinState) -> bool {
    level == PinState::Low
}

/// One active-low contact switch.
pub struct OccupancySensor<P> {
    pin: P,
}

impl<P: InputPin> OccupancySensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Sample the switch now.
    pub fn is_engaged(&mut self) -> bool {
        engaged(sample_level(&mut self.pin))
    }
}

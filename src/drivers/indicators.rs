//! Green / red / alarm indicator outputs.
//!
//! Three discrete active-high outputs:
//!
//! | Indicator | Meaning                              |
//! |-----------|--------------------------------------|
//! | green     | all occupancy conditions met         |
//! | red       | engine running                       |
//! | alarm     | last ignition attempt was refused    |
//!
//! Each output is driven low on construction and then remembers the last
//! commanded level, so callers can query it without reading back the pad.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

/// One active-high output with its last commanded level.
pub struct Indicator<P> {
    name: &'static str,
    pin: P,
    on: bool,
}

impl<P: OutputPin> Indicator<P> {
    pub fn new(name: &'static str, pin: P) -> Self {
        let mut indicator = Self { name, pin, on: false };
        indicator.set(false);
        indicator
    }

    pub fn set(&mut self, on: bool) {
        if let Err(e) = self.pin.set_state(PinState::from(on)) {
            warn!("{} indicator write failed ({:?})", self.name, e.kind());
        }
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

pub struct Indicators<P> {
    pub green: Indicator<P>,
    pub red: Indicator<P>,
    pub alarm: Indicator<P>,
}

impl<P: OutputPin> Indicators<P> {
    pub fn new(green: P, red: P, alarm: P) -> Self {
        Self {
            green: Indicator::new("green", green),
            red: Indicator::new("red", red),
            alarm: Indicator::new("alarm", alarm),
        }
    }

    pub fn off(&mut self) {
        self.green.set(false);
        self.red.set(false);
        self.alarm.set(false);
    }

    /// Current (green, red, alarm) levels.
    pub fn current(&self) -> (bool, bool, bool) {
        (self.green.is_on(), self.red.is_on(), self.alarm.is_on())
    }
}

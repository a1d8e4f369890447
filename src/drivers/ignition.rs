//! Ignition push-button release detector.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  The button is polled once
//! per control tick; there is no ISR.  Debounce comes from the sampling
//! cadence itself, so the detector must stay on the polled path.
//!
//! ## Event contract
//!
//! | Sample | `held` before | Event | `held` after |
//! |--------|---------------|-------|--------------|
//! | LOW    | any           | no    | true         |
//! | HIGH   | true          | yes   | false        |
//! | HIGH   | false         | no    | false        |
//!
//! A held button yields nothing; the single event fires on the first HIGH
//! sample after at least one LOW sample was observed.

use embedded_hal::digital::PinState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnitionEdgeDetector {
    /// A press was observed and has not been released yet.
    held: bool,
}

impl IgnitionEdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample.  Returns `true` exactly once per press-release.
    pub fn poll(&mut self, level: PinState) -> bool {
        let pressed_now = level == PinState::Low;

        if pressed_now {
            self.held = true;
        }

        if self.held && !pressed_now {
            self.held = false;
            return true;
        }

        false
    }
}

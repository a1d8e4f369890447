//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`], the ignition button input and the three
//! indicator outputs, exposing them through [`SensorPort`] and
//! [`IndicatorPort`].  On non-espidf targets the underlying pins hit the
//! GPIO simulation in `hw_init::sim`.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::app::ports::{IndicatorPort, SensorPort};
use crate::drivers::gpio::sample_level;
use crate::drivers::indicators::Indicators;
use crate::fsm::context::SensorSnapshot;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all discrete I/O behind port traits.
pub struct HardwareAdapter<I, O> {
    sensor_hub: SensorHub<I>,
    ignition: I,
    indicators: Indicators<O>,
}

impl<I: InputPin, O: OutputPin> HardwareAdapter<I, O> {
    pub fn new(sensor_hub: SensorHub<I>, ignition: I, indicators: Indicators<O>) -> Self {
        Self {
            sensor_hub,
            ignition,
            indicators,
        }
    }

    /// Last commanded (green, red, alarm) levels.
    pub fn indicator_levels(&self) -> (bool, bool, bool) {
        self.indicators.current()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> SensorPort for HardwareAdapter<I, O> {
    fn ignition_level(&mut self) -> PinState {
        sample_level(&mut self.ignition)
    }

    fn read_all(&mut self) -> SensorSnapshot {
        self.sensor_hub.poll()
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<I: InputPin, O: OutputPin> IndicatorPort for HardwareAdapter<I, O> {
    fn set_green(&mut self, on: bool) {
        self.indicators.green.set(on);
    }

    fn set_red(&mut self, on: bool) {
        self.indicators.red.set(on);
    }

    fn set_alarm(&mut self, on: bool) {
        self.indicators.alarm.set(on);
    }

    fn all_off(&mut self) {
        self.indicators.off();
    }
}

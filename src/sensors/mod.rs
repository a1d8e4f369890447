//! Sensor subsystem: the occupancy switch driver and the aggregating
//! [`SensorHub`].
//!
//! The hub owns the four switches and produces a [`SensorSnapshot`] each
//! tick that gets written into `FsmContext.sensors`.  Nothing is carried
//! over between ticks: every snapshot is a fresh read.

pub mod occupancy;

use embedded_hal::digital::InputPin;

use crate::fsm::context::SensorSnapshot;
use occupancy::OccupancySensor;

/// Aggregates the seat and seatbelt switches and produces a unified snapshot.
pub struct SensorHub<P> {
    pub driver_seat: OccupancySensor<P>,
    pub driver_belt: OccupancySensor<P>,
    pub passenger_seat: OccupancySensor<P>,
    pub passenger_belt: OccupancySensor<P>,
}

impl<P: InputPin> SensorHub<P> {
    /// Construct a new hub from the four input pins.
    pub fn new(driver_seat: P, driver_belt: P, passenger_seat: P, passenger_belt: P) -> Self {
        Self {
            driver_seat: OccupancySensor::new(driver_seat),
            driver_belt: OccupancySensor::new(driver_belt),
            passenger_seat: OccupancySensor::new(passenger_seat),
            passenger_belt: OccupancySensor::new(passenger_belt),
        }
    }

    /// Read every switch and return a unified snapshot.
    pub fn poll(&mut self) -> SensorSnapshot {
        SensorSnapshot {
            driver_seat: self.driver_seat.is_engaged(),
            driver_belt: self.driver_belt.is_engaged(),
            passenger_seat: self.passenger_seat.is_engaged(),
            passenger_belt: self.passenger_belt.is_engaged(),
        }
    }
}

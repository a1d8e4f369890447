//! Ignition readiness evaluation.
//!
//! Readiness is recomputed from scratch every tick from the latest
//! [`SensorSnapshot`]; nothing is latched.  Each unmet precondition owns
//! one bit of a `u8` mask so the state handlers can report every missing
//! condition on a refused start, in a fixed order.
//!
//! `ready ⇔ unmet(snap) == 0`.

use core::fmt;

use crate::fsm::context::SensorSnapshot;

/// A single precondition for starting the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Condition {
    DriverSeat = 0b0000_0001,
    DriverBelt = 0b0000_0010,
    PassengerSeat = 0b0000_0100,
    PassengerBelt = 0b0000_1000,
}

impl Condition {
    /// Every condition, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::DriverSeat,
        Self::DriverBelt,
        Self::PassengerSeat,
        Self::PassengerBelt,
    ];

    /// Return the bitmask for this condition.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Whether the condition holds in `snap`.
    pub fn is_met(self, snap: &SensorSnapshot) -> bool {
        match self {
            Self::DriverSeat => snap.driver_seat,
            Self::DriverBelt => snap.driver_belt,
            Self::PassengerSeat => snap.passenger_seat,
            Self::PassengerBelt => snap.passenger_belt,
        }
    }

    /// Conditions whose bit is set in `mask`, in reporting order.
    pub fn iter_unmet(mask: u8) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |c| mask & c.mask() != 0)
    }
}

/// The diagnostic line printed for an unmet condition.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverSeat => write!(f, "Driver seat not occupied"),
            Self::DriverBelt => write!(f, "Driver seatbelt not fastened"),
            Self::PassengerSeat => write!(f, "Passenger seat not occupied"),
            Self::PassengerBelt => write!(f, "Passenger seatbelt not fastened"),
        }
    }
}

/// Bitmask of conditions not satisfied by `snap`.
pub fn unmet(snap: &SensorSnapshot) -> u8 {
    Condition::ALL
        .iter()
        .filter(|c| !c.is_met(snap))
        .fold(0, |mask, c| mask | c.mask())
}

/// True when all four seat and belt conditions hold.
pub fn evaluate(snap: &SensorSnapshot) -> bool {
    snap.driver_seat && snap.driver_belt && snap.passenger_seat && snap.passenger_belt
}

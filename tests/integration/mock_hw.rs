//! Mock adapters for integration tests.
//!
//! Records every indicator call and lockout so tests can assert on the
//! full output history without touching real GPIO.

use std::collections::VecDeque;
use std::time::Duration;

use embedded_hal::digital::PinState;
use interlock::app::events::AppEvent;
use interlock::app::ports::{ClockPort, EventSink, IndicatorPort, SensorPort, StatusDisplayPort};
use interlock::fsm::context::SensorSnapshot;

// ── Indicator call record ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCall {
    Green(bool),
    Red(bool),
    Alarm(bool),
}

// ── MockHardware ──────────────────────────────────────────────

/// Scripted inputs plus recorded outputs.
///
/// `ignition` is consumed one level per tick; once empty the button
/// reads released (HIGH).
#[derive(Default)]
pub struct MockHardware {
    pub ignition: VecDeque<PinState>,
    pub sensors: SensorSnapshot,
    pub calls: Vec<IndicatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one press-and-release so the next two ticks yield an event
    /// on the second.
    pub fn press_ignition(&mut self) {
        self.ignition.push_back(PinState::Low);
        self.ignition.push_back(PinState::High);
    }

    pub fn all_engaged(&mut self) {
        self.sensors = SensorSnapshot {
            driver_seat: true,
            driver_belt: true,
            passenger_seat: true,
            passenger_belt: true,
        };
    }

    fn last(&self, pick: fn(&IndicatorCall) -> Option<bool>) -> bool {
        self.calls.iter().rev().find_map(pick).unwrap_or(false)
    }

    pub fn green(&self) -> bool {
        self.last(|c| match c {
            IndicatorCall::Green(on) => Some(*on),
            _ => None,
        })
    }

    pub fn red(&self) -> bool {
        self.last(|c| match c {
            IndicatorCall::Red(on) => Some(*on),
            _ => None,
        })
    }

    pub fn alarm(&self) -> bool {
        self.last(|c| match c {
            IndicatorCall::Alarm(on) => Some(*on),
            _ => None,
        })
    }
}

impl SensorPort for MockHardware {
    fn ignition_level(&mut self) -> PinState {
        self.ignition.pop_front().unwrap_or(PinState::High)
    }

    fn read_all(&mut self) -> SensorSnapshot {
        self.sensors
    }
}

impl IndicatorPort for MockHardware {
    fn set_green(&mut self, on: bool) {
        self.calls.push(IndicatorCall::Green(on));
    }

    fn set_red(&mut self, on: bool) {
        self.calls.push(IndicatorCall::Red(on));
    }

    fn set_alarm(&mut self, on: bool) {
        self.calls.push(IndicatorCall::Alarm(on));
    }
}

// ── MockStatusDisplay ─────────────────────────────────────────

#[derive(Default)]
pub struct MockStatusDisplay {
    pub running: bool,
    pub starts: u32,
    pub stops: u32,
}

impl StatusDisplayPort for MockStatusDisplay {
    fn ensure_running(&mut self) {
        if !self.running {
            self.running = true;
            self.starts += 1;
        }
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

// ── MockClock ─────────────────────────────────────────────────

/// Records suspensions instead of sleeping.
#[derive(Default)]
pub struct MockClock {
    pub blocked: Vec<Duration>,
}

impl ClockPort for MockClock {
    fn uptime_secs(&self) -> u64 {
        self.blocked.iter().map(Duration::as_secs).sum()
    }

    fn block_for(&mut self, duration: Duration) {
        self.blocked.push(duration);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, event: &AppEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

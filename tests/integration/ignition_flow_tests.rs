//! Integration tests for the ignition → readiness → FSM → indicators pipeline.
//!
//! These run on the host (x86_64) and drive [`AppService`] tick by tick
//! through mock ports, checking indicator levels, emitted events, the
//! display task lifecycle and the lockout suspension.

use std::time::Duration;

use embedded_hal::digital::PinState;
use interlock::adapters::hardware::HardwareAdapter;
use interlock::app::events::AppEvent;
use interlock::app::service::AppService;
use interlock::config::SystemConfig;
use interlock::drivers::gpio::GpioPin;
use interlock::drivers::hw_init::{self, sim};
use interlock::drivers::indicators::Indicators;
use interlock::fsm::StateId;
use interlock::fsm::context::SensorSnapshot;
use interlock::pins;
use interlock::sensors::SensorHub;
use interlock::status_display::EngineStatus;

use crate::mock_hw::{MockClock, MockHardware, MockStatusDisplay, RecordingSink};

struct Rig {
    app: AppService,
    hw: MockHardware,
    status: MockStatusDisplay,
    clock: MockClock,
    sink: RecordingSink,
    engine: EngineStatus,
}

impl Rig {
    fn new() -> Self {
        let engine = EngineStatus::new();
        let mut rig = Self {
            app: AppService::new(SystemConfig::default(), engine.clone()),
            hw: MockHardware::new(),
            status: MockStatusDisplay::default(),
            clock: MockClock::default(),
            sink: RecordingSink::default(),
            engine,
        };
        rig.app.start(&mut rig.hw, &mut rig.sink);
        rig
    }

    fn tick(&mut self) {
        self.app
            .tick(&mut self.hw, &mut self.status, &mut self.clock, &mut self.sink);
    }

    /// Press and release the button over two ticks.
    fn ignition(&mut self) {
        self.hw.press_ignition();
        self.tick();
        self.tick();
    }

    fn running() -> Self {
        let mut rig = Self::new();
        rig.hw.all_engaged();
        rig.ignition();
        assert_eq!(rig.app.state(), StateId::Running);
        rig.sink.clear();
        rig
    }
}

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn boot_turns_all_indicators_off() {
    let rig = Rig::new();
    assert_eq!(rig.app.state(), StateId::Stopped);
    assert!(!rig.hw.green() && !rig.hw.red() && !rig.hw.alarm());
    assert_eq!(rig.sink.events, [AppEvent::Started(StateId::Stopped)]);
    assert!(!rig.engine.is_running());
}

// ── Scenario A: permitted start ───────────────────────────────

#[test]
fn ready_and_ignition_starts_engine() {
    let mut rig = Rig::new();
    rig.hw.all_engaged();

    rig.hw.press_ignition();
    rig.tick();
    assert!(rig.hw.green(), "green shows readiness before the press completes");
    assert_eq!(rig.app.state(), StateId::Stopped);
    rig.sink.clear();

    rig.tick();
    assert_eq!(rig.app.state(), StateId::Running);
    assert!(rig.hw.red());
    assert!(!rig.hw.green());
    assert!(rig.engine.is_running());
    assert_eq!(
        rig.sink.events,
        [
            AppEvent::EngineStarting,
            AppEvent::StateChanged {
                from: StateId::Stopped,
                to: StateId::Running
            },
        ]
    );
    assert!(rig.clock.blocked.is_empty());
}

// ── Scenario B: refused start ─────────────────────────────────

#[test]
fn unready_ignition_is_refused_with_lockout() {
    let mut rig = Rig::new();
    rig.hw.sensors = SensorSnapshot {
        driver_seat: true,
        ..SensorSnapshot::default()
    };

    rig.ignition();
    assert_eq!(rig.app.state(), StateId::Stopped);
    assert!(rig.hw.alarm());
    assert!(!rig.hw.green());
    assert!(!rig.hw.red());
    assert_eq!(rig.sink.count(&AppEvent::IgnitionRefused { unmet: 0b1110 }), 1);
    assert_eq!(rig.clock.blocked, [Duration::from_secs(3)]);

    // The alarm drops on the next quiet cycle and no further lockout happens.
    rig.tick();
    assert!(!rig.hw.alarm());
    assert_eq!(rig.clock.blocked.len(), 1);
}

#[test]
fn every_unmet_condition_is_reported() {
    let mut rig = Rig::new();
    rig.ignition();
    assert_eq!(rig.sink.count(&AppEvent::IgnitionRefused { unmet: 0b1111 }), 1);
}

// ── Scenario C: stop ──────────────────────────────────────────

#[test]
fn ignition_while_running_stops_engine() {
    let mut rig = Rig::running();
    rig.tick();
    assert!(rig.status.running);

    rig.ignition();
    assert_eq!(rig.app.state(), StateId::Stopped);
    assert!(!rig.hw.red());
    assert!(!rig.engine.is_running());
    assert!(!rig.status.running);
    assert_eq!(rig.status.stops, 1);
    assert_eq!(rig.sink.count(&AppEvent::EngineStopping), 1);

    // Back in STOPPED, green again follows readiness.
    rig.tick();
    assert!(rig.hw.green());
}

#[test]
fn stop_works_even_when_not_ready() {
    let mut rig = Rig::running();
    rig.hw.sensors = SensorSnapshot::default();
    rig.ignition();
    assert_eq!(rig.app.state(), StateId::Stopped);
    assert!(rig.clock.blocked.is_empty());
}

// ── Scenario D: running ───────────────────────────────────────

#[test]
fn running_keeps_one_display_task() {
    let mut rig = Rig::running();
    for _ in 0..50 {
        rig.tick();
    }
    assert_eq!(rig.app.state(), StateId::Running);
    assert!(rig.status.running);
    assert_eq!(rig.status.starts, 1);
    assert!(rig.app.commands().display);
}

#[test]
fn display_restarts_for_each_run() {
    let mut rig = Rig::running();
    rig.tick();
    rig.ignition();
    rig.ignition();
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Running);
    assert_eq!(rig.status.starts, 2);
    assert_eq!(rig.status.stops, 1);
}

#[test]
fn running_ignores_sensor_changes() {
    let mut rig = Rig::running();
    rig.hw.sensors = SensorSnapshot::default();
    for _ in 0..5 {
        rig.tick();
    }
    assert_eq!(rig.app.state(), StateId::Running);
    assert!(rig.hw.red());
    assert!(!rig.hw.green());
    assert!(!rig.app.is_ready());
}

// ── Welcome message ───────────────────────────────────────────

#[test]
fn welcome_fires_exactly_once() {
    let mut rig = Rig::new();
    let seated = SensorSnapshot {
        driver_seat: true,
        ..SensorSnapshot::default()
    };
    for snap in [SensorSnapshot::default(), seated, SensorSnapshot::default(), seated] {
        rig.hw.sensors = snap;
        rig.tick();
    }
    assert_eq!(rig.sink.count(&AppEvent::Welcome), 1);
}

// ── Edge detection through the service ────────────────────────

#[test]
fn long_press_yields_single_event_on_release() {
    let mut rig = Rig::new();
    rig.hw.all_engaged();
    rig.hw.ignition.extend([PinState::Low; 25]);
    for _ in 0..25 {
        rig.tick();
        assert_eq!(rig.app.state(), StateId::Stopped);
    }
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Running);
    for _ in 0..10 {
        rig.tick();
    }
    assert_eq!(rig.app.state(), StateId::Running);
}

// ── Idempotence ───────────────────────────────────────────────

#[test]
fn unchanged_inputs_give_unchanged_outputs() {
    let mut rig = Rig::new();
    rig.hw.all_engaged();
    rig.tick();
    let commands = rig.app.commands();
    rig.sink.clear();

    for _ in 0..20 {
        rig.tick();
        assert_eq!(rig.app.commands(), commands);
        assert_eq!(rig.app.state(), StateId::Stopped);
    }
    assert!(rig.sink.events.is_empty());
    assert_eq!(rig.app.tick_count(), 21);
}

// ── Full stack over simulated GPIO ────────────────────────────

/// The only test in this binary that touches the board pin map.
#[test]
fn board_pins_drive_the_interlock() {
    hw_init::init_peripherals().unwrap();

    let hub = SensorHub::new(
        GpioPin::new(pins::DRIVER_SEAT_GPIO),
        GpioPin::new(pins::DRIVER_BELT_GPIO),
        GpioPin::new(pins::PASSENGER_SEAT_GPIO),
        GpioPin::new(pins::PASSENGER_BELT_GPIO),
    );
    let indicators = Indicators::new(
        GpioPin::new(pins::GREEN_LED_GPIO),
        GpioPin::new(pins::RED_LED_GPIO),
        GpioPin::new(pins::ALARM_GPIO),
    );
    let mut hw = HardwareAdapter::new(hub, GpioPin::new(pins::IGNITION_BUTTON_GPIO), indicators);
    let (mut status, mut clock, mut sink) = (
        MockStatusDisplay::default(),
        MockClock::default(),
        RecordingSink::default(),
    );
    let mut app = AppService::new(SystemConfig::default(), EngineStatus::new());
    app.start(&mut hw, &mut sink);

    for pin in [
        pins::DRIVER_SEAT_GPIO,
        pins::DRIVER_BELT_GPIO,
        pins::PASSENGER_SEAT_GPIO,
        pins::PASSENGER_BELT_GPIO,
    ] {
        sim::set_level(pin, false);
    }
    app.tick(&mut hw, &mut status, &mut clock, &mut sink);
    assert!(sim::level(pins::GREEN_LED_GPIO));

    sim::set_level(pins::IGNITION_BUTTON_GPIO, false);
    app.tick(&mut hw, &mut status, &mut clock, &mut sink);
    sim::set_level(pins::IGNITION_BUTTON_GPIO, true);
    app.tick(&mut hw, &mut status, &mut clock, &mut sink);

    assert_eq!(app.state(), StateId::Running);
    assert!(sim::level(pins::RED_LED_GPIO));
    assert!(!sim::level(pins::GREEN_LED_GPIO));
    assert!(!sim::level(pins::ALARM_GPIO));
}

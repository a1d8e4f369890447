//! Ignition Interlock Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter     LcdDisplay    LogEventSink  Esp32Time     │
//! │  (Sensor+Indicator)  (Display)     (EventSink)   (Clock)       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Ignition edge · Readiness · FSM                       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  StatusDisplayTask (APP core, 1 Hz while RUNNING)              │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use esp_idf_hal::delay::Ets;
use log::info;

use interlock::adapters::display::LcdDisplay;
use interlock::adapters::hardware::HardwareAdapter;
use interlock::adapters::log_sink::LogEventSink;
use interlock::adapters::time::Esp32TimeAdapter;
use interlock::app::service::AppService;
use interlock::config::SystemConfig;
use interlock::drivers::gpio::GpioPin;
use interlock::drivers::hw_init;
use interlock::drivers::indicators::Indicators;
use interlock::drivers::lcd::Hd44780;
use interlock::error::Error;
use interlock::pins;
use interlock::sensors::SensorHub;
use interlock::status_display::{EngineStatus, StatusDisplayTask};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Interlock v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate().map_err(Error::from)?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Peripherals (fail fast) ────────────────────────────
    hw_init::init_peripherals().map_err(Error::from)?;

    let mut lcd = Hd44780::new(
        GpioPin::new(pins::LCD_RS_GPIO),
        GpioPin::new(pins::LCD_E_GPIO),
        [
            GpioPin::new(pins::LCD_D4_GPIO),
            GpioPin::new(pins::LCD_D5_GPIO),
            GpioPin::new(pins::LCD_D6_GPIO),
            GpioPin::new(pins::LCD_D7_GPIO),
        ],
        Ets,
    );
    lcd.init().map_err(Error::from)?;
    let display = Arc::new(Mutex::new(LcdDisplay::new(lcd)));

    // ── 4. Adapters ───────────────────────────────────────────
    let sensor_hub = SensorHub::new(
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
    let mut hw = HardwareAdapter::new(
        sensor_hub,
        GpioPin::new(pins::IGNITION_BUTTON_GPIO),
        indicators,
    );
    let mut clock = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();

    // ── 5. Application core + display task ────────────────────
    let engine = EngineStatus::new();
    let mut status = StatusDisplayTask::new(display, clock.clone(), engine.clone(), &config);
    let loop_interval = config.control_loop_interval();
    let mut app = AppService::new(config, engine);
    app.start(&mut hw, &mut sink);

    info!(
        "Control loop running every {}ms",
        loop_interval.as_millis()
    );

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        app.tick(&mut hw, &mut status, &mut clock, &mut sink);
        std::thread::sleep(loop_interval);
    }
}

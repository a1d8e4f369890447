//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, indicators, display, clock, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.  None of the ports return errors: a failed read degrades to
//! "not engaged" and a failed write is logged by the adapter.

use core::time::Duration;

use embedded_hal::digital::PinState;

use crate::fsm::context::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain input levels.
pub trait SensorPort {
    /// Raw level of the ignition button (LOW = pressed).
    fn ignition_level(&mut self) -> PinState;

    /// Read every occupancy switch and return a unified snapshot.
    fn read_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the LEDs and alarm.
pub trait IndicatorPort {
    fn set_green(&mut self, on: bool);
    fn set_red(&mut self, on: bool);
    fn set_alarm(&mut self, on: bool);

    /// Everything off, as at boot.
    fn all_off(&mut self) {
        self.set_green(false);
        self.set_red(false);
        self.set_alarm(false);
    }
}

// ───────────────────────────────────────────────────────────────
// Display port (character LCD)
// ───────────────────────────────────────────────────────────────

/// A character display addressed by column and row.
pub trait DisplayPort {
    fn clear(&mut self);

    /// Write `text` starting at (`col`, `row`).  Text past the right edge
    /// is dropped.
    fn write_at(&mut self, col: u8, row: u8, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time and blocking suspension.
pub trait ClockPort {
    /// Whole seconds since boot.
    fn uptime_secs(&self) -> u64;

    /// Suspend the caller for `duration`.
    fn block_for(&mut self, duration: Duration);
}

// ───────────────────────────────────────────────────────────────
// Status display control
// ───────────────────────────────────────────────────────────────

/// Lifecycle control for the background elapsed-time renderer.
pub trait StatusDisplayPort {
    /// Start the renderer unless it is already running.
    fn ensure_running(&mut self);

    /// Stop the renderer and wait for it to exit.  No-op when idle.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

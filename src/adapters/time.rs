//! ESP32 time adapter.
//!
//! Provides monotonic time queries and the blocking lockout sleep.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.

use std::time::Duration;

use crate::app::ports::ClockPort;

/// Time adapter for the ESP32-S3 platform.
///
/// Clones share the same boot reference.
#[derive(Debug, Clone)]
pub struct Esp32TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_us(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since adapter creation (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl ClockPort for Esp32TimeAdapter {
    fn uptime_secs(&self) -> u64 {
        self.uptime_us() / 1_000_000
    }

    /// On ESP-IDF `thread::sleep` yields to FreeRTOS (`vTaskDelay`), so the
    /// display task keeps running during a lockout.
    fn block_for(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

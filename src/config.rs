//! System configuration parameters
//!
//! Timing parameters for the interlock controller.  Sensor polarity is
//! fixed by the wiring and deliberately absent from this struct.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Maximum greeting length that fits on one LCD row.
pub const GREETING_CAPACITY: usize = 16;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Control loop sampling period (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Control loop suspension after a refused ignition attempt (seconds)
    pub lockout_secs: u16,
    /// Status display refresh period (milliseconds)
    pub display_refresh_ms: u32,

    // --- Display ---
    /// Text shown on the first LCD row while the engine runs
    pub display_greeting: heapless::String<GREETING_CAPACITY>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut display_greeting = heapless::String::new();
        let _ = display_greeting.push_str("Hello, World!");

        Self {
            // Timing
            control_loop_interval_ms: 20, // 50 Hz
            lockout_secs: 3,
            display_refresh_ms: 1000, // 1 Hz

            // Display
            display_greeting,
        }
    }
}

impl SystemConfig {
    /// Reject values that would stall or spin the control loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be non-zero",
            ));
        }
        if self.display_refresh_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "display_refresh_ms must be non-zero",
            ));
        }
        if self.lockout_secs == 0 {
            return Err(ConfigError::ValidationFailed("lockout_secs must be non-zero"));
        }
        Ok(())
    }

    pub fn lockout(&self) -> core::time::Duration {
        core::time::Duration::from_secs(u64::from(self.lockout_secs))
    }

    pub fn control_loop_interval(&self) -> core::time::Duration {
        core::time::Duration::from_millis(u64::from(self.control_loop_interval_ms))
    }

    pub fn display_refresh(&self) -> core::time::Duration {
        core::time::Duration::from_millis(u64::from(self.display_refresh_ms))
    }
}

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

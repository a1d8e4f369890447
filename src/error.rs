//! Unified error types for the interlock firmware.
//!
//! The control loop itself cannot fail: pin reads and writes are treated as
//! infallible and degrade to "not engaged" / "unchanged".  Everything that
//! *can* fail happens at boot, and every such failure funnels into [`Error`]
//! so `main` can abort uniformly.

use core::fmt;

use crate::config::ConfigError;
use crate::drivers::hw_init::HwInitError;
use crate::drivers::lcd::LcdError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible boot-time operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// The character display did not accept its init sequence.
    Display(LcdError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<LcdError> for Error {
    fn from(e: LcdError) -> Self {
        Self::Display(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_subsystem() {
        let e: Error = ConfigError::ValidationFailed("lockout_secs must be non-zero").into();
        assert_eq!(
            e.to_string(),
            "config: validation failed: lockout_secs must be non-zero"
        );

        let e: Error = LcdError::Pin.into();
        assert_eq!(e.to_string(), "display: LCD pin write failed");
    }
}

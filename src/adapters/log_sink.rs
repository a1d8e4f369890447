//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the
//! ESP-IDF logger (UART / USB-CDC in production).  The operator-facing
//! lines are printed verbatim; framework events carry a short tag.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::readiness::Condition;

pub const WELCOME_LINE: &str = "Welcome to enhanced Alarm system model 218 -W25";
pub const STARTING_LINE: &str = "Starting the engine.";
pub const STOPPING_LINE: &str = "Stopping the engine.";

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::Welcome => info!("{}", WELCOME_LINE),
            AppEvent::EngineStarting => info!("{}", STARTING_LINE),
            AppEvent::EngineStopping => info!("{}", STOPPING_LINE),
            AppEvent::IgnitionRefused { unmet } => {
                for condition in Condition::iter_unmet(*unmet) {
                    warn!("{}", condition);
                }
            }
        }
    }
}

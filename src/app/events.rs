//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them; the firmware only logs them.

use crate::fsm::StateId;
use crate::fsm::context::Notice;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The application service has started (carries initial state).
    Started(StateId),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// Driver seat occupied for the first time since boot.
    Welcome,

    EngineStarting,

    EngineStopping,

    /// A start attempt was refused.  `unmet` is the
    /// [`Condition`](crate::readiness::Condition) mask.
    IgnitionRefused { unmet: u8 },
}

impl From<Notice> for AppEvent {
    fn from(notice: Notice) -> Self {
        match notice {
            Notice::Welcome => Self::Welcome,
            Notice::EngineStarting => Self::EngineStarting,
            Notice::EngineStopping => Self::EngineStopping,
            Notice::IgnitionRefused { unmet } => Self::IgnitionRefused { unmet },
        }
    }
}

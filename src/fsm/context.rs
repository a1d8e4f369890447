//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to.  It contains the latest sensor snapshot, the ignition pulse
//! for this tick, indicator command outputs, timing information and
//! configuration.  Think of it as the "blackboard" in a blackboard
//! architecture.

use heapless::Vec;
use log::warn;

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Sensor snapshot (read-only to state handlers; written by sensor hub)
// ---------------------------------------------------------------------------

/// A point-in-time snapshot of the four occupancy switches.
/// `true` means engaged (seat occupied / belt buckled).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    pub driver_seat: bool,
    pub driver_belt: bool,
    pub passenger_seat: bool,
    pub passenger_belt: bool,
}

// ---------------------------------------------------------------------------
// Indicator commands (written by state handlers; consumed by AppService)
// ---------------------------------------------------------------------------

/// Commands that state handlers write to request output actions.
/// The service applies these to the indicator port each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorCommands {
    /// Green "ready to start" LED.
    pub green: bool,
    /// Red "engine running" LED.
    pub red: bool,
    /// Audible alarm.
    pub alarm: bool,
    /// Elapsed-time rendering on the LCD.
    pub display: bool,
    /// One-shot: suspend the control loop for the lockout period.
    pub lockout: bool,
}

impl IndicatorCommands {
    /// Everything off.
    pub fn all_off() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Notices (state handlers → service → event sink)
// ---------------------------------------------------------------------------

/// Operator-facing notices raised by state handlers during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Driver seat occupied for the first time since boot.
    Welcome,
    EngineStarting,
    EngineStopping,
    /// Start refused; carries the unmet-condition mask.
    IgnitionRefused { unmet: u8 },
}

/// A handler raises at most two notices per tick; four leaves headroom.
pub const NOTICE_CAPACITY: usize = 4;

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Duration of one tick in seconds (inverse of control loop frequency).
    pub tick_period_secs: f32,

    // -- Inputs --
    /// Latest sensor readings.  Updated before each FSM tick.
    pub sensors: SensorSnapshot,
    /// True on the tick the ignition button was released.
    pub ignition_event: bool,
    /// Unmet-condition mask for `sensors` (0 = ready).
    pub unmet: u8,

    // -- Outputs --
    /// Commands to be applied to the indicators after the FSM tick.
    pub commands: IndicatorCommands,
    /// Notices raised during the current tick, drained by the service.
    pending: Vec<Notice, NOTICE_CAPACITY>,

    // -- One-shot flags --
    /// Cleared once the greeting has been printed.
    pub welcome_pending: bool,

    // -- Configuration --
    pub config: SystemConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            ticks_in_state: 0,
            tick_period_secs: config.control_loop_interval_ms as f32 / 1000.0,
            sensors: SensorSnapshot::default(),
            ignition_event: false,
            unmet: 0,
            commands: IndicatorCommands::all_off(),
            pending: Vec::new(),
            welcome_pending: true,
            config,
        }
    }

    /// All four occupancy conditions hold.
    pub fn is_ready(&self) -> bool {
        self.unmet == 0
    }

    /// Seconds elapsed since the current state was entered.
    pub fn secs_in_state(&self) -> f32 {
        self.ticks_in_state as f32 * self.tick_period_secs
    }

    /// Queue a notice for the service to emit after this tick.
    pub fn notify(&mut self, notice: Notice) {
        if self.pending.push(notice).is_err() {
            warn!("FSM notice queue full, dropping {:?}", notice);
        }
    }

    /// Take every queued notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice, NOTICE_CAPACITY> {
        core::mem::take(&mut self.pending)
    }

    /// Read and clear the one-shot lockout request.
    pub fn take_lockout(&mut self) -> bool {
        core::mem::take(&mut self.commands.lockout)
    }
}

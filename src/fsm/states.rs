//! Concrete state handler functions and table builder.
//!
//! Each state is defined by three plain `fn` pointers.  No closures, no
//! dynamic dispatch, no heap.
//!
//! ```text
//!           ┌──[ignition, not ready]──┐  alarm on, lockout
//!           ▼                         │
//!        STOPPED ─────────────────────┘
//!         │   ▲
//!  [ignition, ready]   [ignition]
//!         ▼   │
//!        RUNNING ──[no ignition]──▶ RUNNING  (elapsed time on LCD)
//! ```

use super::context::{FsmContext, Notice};
use super::{StateDescriptor, StateId};
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Stopped
        StateDescriptor {
            id: StateId::Stopped,
            name: "Stopped",
            on_enter: Some(stopped_enter),
            on_exit: None,
            on_update: stopped_update,
        },
        // Index 1 — Running
        StateDescriptor {
            id: StateId::Running,
            name: "Running",
            on_enter: Some(running_enter),
            on_exit: Some(running_exit),
            on_update: running_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  STOPPED state: waiting for a permitted start
// ═══════════════════════════════════════════════════════════════════════════

fn stopped_enter(ctx: &mut FsmContext) {
    // Green and alarm are refreshed by the next update; only the
    // running-side outputs need forcing here.
    ctx.commands.red = false;
    ctx.commands.display = false;
    info!("STOPPED: engine off, waiting for ignition");
}

fn stopped_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.welcome_pending && ctx.sensors.driver_seat {
        ctx.welcome_pending = false;
        ctx.notify(Notice::Welcome);
    }

    ctx.commands.green = ctx.is_ready();

    if !ctx.ignition_event {
        ctx.commands.alarm = false;
        return None;
    }

    if ctx.is_ready() {
        return Some(StateId::Running);
    }

    warn!("STOPPED: ignition refused, unmet=0b{:04b}", ctx.unmet);
    ctx.commands.alarm = true;
    ctx.commands.lockout = true;
    let unmet = ctx.unmet;
    ctx.notify(Notice::IgnitionRefused { unmet });
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  RUNNING state: engine on, elapsed time on the display
// ═══════════════════════════════════════════════════════════════════════════

fn running_enter(ctx: &mut FsmContext) {
    // Alarm untouched.
    ctx.commands.green = false;
    ctx.commands.red = true;
    ctx.notify(Notice::EngineStarting);
}

fn running_exit(ctx: &mut FsmContext) {
    ctx.commands.red = false;
    ctx.commands.display = false;
    ctx.notify(Notice::EngineStopping);
    info!("RUNNING: engine ran for {:.1}s", ctx.secs_in_state());
}

fn running_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.ignition_event {
        return Some(StateId::Stopped);
    }
    ctx.commands.display = true;
    None
}

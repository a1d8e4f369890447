//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the FSM, its context and the ignition edge
//! detector.  It exposes a clean, hardware-agnostic API.  All I/O flows
//! through port traits injected at call sites, making the entire service
//! testable with mock adapters.
//!
//! ```text
//!    SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                   │       AppService       │
//! IndicatorPort ◀── │ Edge · Readiness · FSM │ ──▶ StatusDisplayPort
//!                   └────────────────────────┘ ──▶ ClockPort (lockout)
//! ```

use log::{info, warn};

use crate::config::SystemConfig;
use crate::drivers::ignition::IgnitionEdgeDetector;
use crate::fsm::context::{FsmContext, IndicatorCommands};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::readiness;
use crate::status_display::EngineStatus;

use super::events::AppEvent;
use super::ports::{ClockPort, EventSink, IndicatorPort, SensorPort, StatusDisplayPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: Fsm,
    ctx: FsmContext,
    ignition: IgnitionEdgeDetector,
    /// Single writer of the engine flag the display thread reads.
    engine: EngineStatus,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig, engine: EngineStatus) -> Self {
        Self {
            fsm: Fsm::new(build_state_table(), StateId::Stopped),
            ctx: FsmContext::new(config),
            ignition: IgnitionEdgeDetector::default(),
            engine,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Enter the initial STOPPED state with every indicator off.
    pub fn start(&mut self, hw: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        self.engine.set_running(false);
        hw.all_off();
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: ignition → sensors → readiness → FSM →
    /// indicators → events → display → lockout.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`IndicatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + IndicatorPort),
        status: &mut impl StatusDisplayPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();

        // 1. Ignition edge, then the occupancy switches
        self.ctx.ignition_event = self.ignition.poll(hw.ignition_level());
        let snapshot = hw.read_all();
        self.ctx.sensors = snapshot;

        // 2. Readiness
        self.ctx.unmet = readiness::unmet(&snapshot);

        // 3. FSM tick (pure state logic)
        self.fsm.tick(&mut self.ctx);
        let new_state = self.fsm.current_state();
        self.engine.set_running(new_state == StateId::Running);

        // 4. Apply indicator commands via IndicatorPort
        self.apply_indicators(hw);

        // 5. Notices first, then the state change
        for notice in self.ctx.drain_notices() {
            sink.emit(&AppEvent::from(notice));
        }
        if new_state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }

        // 6. Elapsed-time renderer
        if self.ctx.commands.display {
            status.ensure_running();
        } else if status.is_running() {
            status.stop();
        }

        // 7. Refused start: suspend the whole loop
        if self.ctx.take_lockout() {
            let lockout = self.ctx.config.lockout();
            warn!("Ignition lockout: suspending for {}s", lockout.as_secs());
            clock.block_for(lockout);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Readiness computed on the last tick.
    pub fn is_ready(&self) -> bool {
        self.ctx.is_ready()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Indicator commands as of the last tick.
    pub fn commands(&self) -> IndicatorCommands {
        self.ctx.commands
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_indicators(&self, hw: &mut impl IndicatorPort) {
        let cmds = &self.ctx.commands;
        hw.set_green(cmds.green);
        hw.set_red(cmds.red);
        hw.set_alarm(cmds.alarm);
    }
}

//! Background elapsed-time renderer for the character LCD.
//!
//! The control loop owns the engine state; this module only reads it
//! through [`EngineStatus`].  While the engine runs, a dedicated thread
//! (pinned to the APP core on the ESP32-S3) refreshes the LCD once per
//! `display_refresh_ms`:
//!
//! ```text
//!   row 0 │  Hello, World! │   ← greeting, column 2
//!   row 1 │  1234          │   ← whole seconds since boot, column 2
//! ```
//!
//! The thread is started once per RUNNING period and stopped (signalled
//! and joined) when the engine leaves RUNNING, so at most one renderer
//! exists at any time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use log::{info, warn};

use crate::app::ports::{ClockPort, DisplayPort, StatusDisplayPort};
use crate::config::{GREETING_CAPACITY, SystemConfig};
use crate::drivers::task_pin::{Core, spawn_on_core};

const RENDER_PRIORITY: u8 = 3;
const RENDER_STACK_KB: usize = 4;
/// Counter field width: digits plus trailing blanks that erase a
/// previously longer value.
const ELAPSED_FIELD: usize = 6;
/// Columns 0-1 of both rows are reserved for the status glyphs.
const TEXT_COL: u8 = 2;
const GREETING_ROW: u8 = 0;
const ELAPSED_ROW: u8 = 1;

// ───────────────────────────────────────────────────────────────
// Engine status flag
// ───────────────────────────────────────────────────────────────

/// Engine running flag shared between the control loop and the renderer.
///
/// Cloning shares the flag.  Only [`AppService`](crate::app::service::AppService)
/// writes it.
#[derive(Debug, Clone, Default)]
pub struct EngineStatus(Arc<AtomicBool>);

impl EngineStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub(crate) fn set_running(&self, running: bool) {
        self.0.store(running, Ordering::Release);
    }
}

// ───────────────────────────────────────────────────────────────
// Renderer task
// ───────────────────────────────────────────────────────────────

/// Owns the renderer thread and its stop channel.
pub struct StatusDisplayTask<D, C> {
    display: Arc<Mutex<D>>,
    clock: C,
    engine: EngineStatus,
    refresh: Duration,
    greeting: heapless::String<GREETING_CAPACITY>,
    worker: Option<(JoinHandle<()>, Sender<()>)>,
}

impl<D, C> StatusDisplayTask<D, C>
where
    D: DisplayPort + Send + 'static,
    C: ClockPort + Clone + Send + 'static,
{
    pub fn new(
        display: Arc<Mutex<D>>,
        clock: C,
        engine: EngineStatus,
        config: &SystemConfig,
    ) -> Self {
        Self {
            display,
            clock,
            engine,
            refresh: config.display_refresh(),
            greeting: config.display_greeting.clone(),
            worker: None,
        }
    }
}

impl<D, C> StatusDisplayPort for StatusDisplayTask<D, C>
where
    D: DisplayPort + Send + 'static,
    C: ClockPort + Clone + Send + 'static,
{
    fn ensure_running(&mut self) {
        if self.worker.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let display = Arc::clone(&self.display);
        let clock = self.clock.clone();
        let engine = self.engine.clone();
        let refresh = self.refresh;
        let greeting = self.greeting.clone();

        let spawned = spawn_on_core(
            Core::App,
            RENDER_PRIORITY,
            RENDER_STACK_KB,
            "status-lcd\0",
            move || {
                with_display(&display, |d| {
                    d.clear();
                    d.write_at(TEXT_COL, GREETING_ROW, &greeting);
                });
                loop {
                    if engine.is_running() {
                        let text = elapsed_text(clock.uptime_secs());
                        with_display(&display, |d| d.write_at(TEXT_COL, ELAPSED_ROW, &text));
                    }
                    match rx.recv_timeout(refresh) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            },
        );

        match spawned {
            Ok(handle) => {
                self.worker = Some((handle, tx));
                info!("status display: started");
            }
            // Retried on the next tick that still wants the display.
            Err(e) => warn!("status display: spawn failed: {}", e),
        }
    }

    fn stop(&mut self) {
        let Some((handle, tx)) = self.worker.take() else {
            return;
        };
        // A send error means the thread already exited.
        let _ = tx.send(());
        if handle.join().is_err() {
            warn!("status display: renderer panicked");
        }
        info!("status display: stopped");
    }

    fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl<D, C> Drop for StatusDisplayTask<D, C> {
    fn drop(&mut self) {
        if let Some((handle, tx)) = self.worker.take() {
            let _ = tx.send(());
            let _ = handle.join();
        }
    }
}

/// `"<secs>  "` clipped to the counter field.
fn elapsed_text(secs: u64) -> String {
    let mut text = format!("{secs}  ");
    text.truncate(ELAPSED_FIELD);
    text
}

/// Lock the display, recovering it from a poisoned mutex.
fn with_display<D>(display: &Mutex<D>, f: impl FnOnce(&mut D)) {
    match display.lock() {
        Ok(mut guard) => f(&mut guard),
        Err(poisoned) => f(&mut poisoned.into_inner()),
    }
}

//! Clock engine: owns the chime state, drives firings and reports termination

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info};

use super::{Chime, ChimeKind, ClockState, ClockStatus};
use crate::{error::ClockError, tasks::clock_task, utils::print_line};

/// Default run length before the clock completes on its own (3 hours)
pub const DEFAULT_LIMIT_SECONDS: u64 = 3 * 3600;

/// Default firing interval
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Construction parameters for a [`Clock`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSettings {
    pub tick: String,
    pub tock: String,
    pub bong: String,
    pub limit_seconds: u64,
    /// Interval between firings. Each firing counts as one elapsed second.
    pub period: Duration,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            tick: "tick".to_string(),
            tock: "tock".to_string(),
            bong: "bong".to_string(),
            limit_seconds: DEFAULT_LIMIT_SECONDS,
            period: DEFAULT_PERIOD,
        }
    }
}

/// Where emitted chimes go
#[derive(Debug)]
pub enum ChimeSink {
    /// Print each chime as a line on stdout
    Stdout,
    /// Forward each chime to a listener
    Channel(mpsc::UnboundedSender<Chime>),
}

impl ChimeSink {
    fn emit(&self, chime: Chime) {
        match self {
            ChimeSink::Stdout => print_line(chime),
            ChimeSink::Channel(tx) => {
                if tx.send(chime).is_err() {
                    debug!("Chime listener is gone, dropping chime");
                }
            }
        }
    }
}

/// Periodic tick/tock/bong clock
///
/// A clock is single-use: [`Clock::start`] spawns the periodic loop once, and
/// after the loop reaches a terminal status the instance is not restarted.
/// All state access goes through the synchronized accessors below, so the
/// loop and the command session can share one `Arc<Clock>`.
#[derive(Debug)]
pub struct Clock {
    state: Mutex<ClockState>,
    limit_seconds: u64,
    period: Duration,
    sink: ChimeSink,
    /// Stop request flag, only ever flipped to `true`
    stop_tx: watch::Sender<bool>,
    /// Receiving half handed to the loop on start
    stop_rx: Mutex<Option<watch::Receiver<bool>>>,
    status_tx: watch::Sender<ClockStatus>,
}

impl Clock {
    /// Create a clock that prints chimes to stdout
    pub fn new(settings: ClockSettings) -> Self {
        Self::with_sink(settings, ChimeSink::Stdout)
    }

    /// Create a clock that emits chimes to the given sink
    pub fn with_sink(settings: ClockSettings, sink: ChimeSink) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        let (status_tx, _) = watch::channel(ClockStatus::Idle);

        Self {
            state: Mutex::new(ClockState::new(settings.tick, settings.tock, settings.bong)),
            limit_seconds: settings.limit_seconds,
            // tokio intervals reject a zero period
            period: settings.period.max(Duration::from_millis(1)),
            sink,
            stop_tx,
            stop_rx: Mutex::new(Some(stop_rx)),
            status_tx,
        }
    }

    fn state(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start the periodic loop on the current tokio runtime
    ///
    /// Returns immediately. The handle resolves to the terminal status once
    /// the loop has exited and released its interval.
    pub fn start(self: &Arc<Self>) -> Result<JoinHandle<ClockStatus>, ClockError> {
        let stop_rx = self
            .stop_rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(ClockError::AlreadyStarted)?;

        self.state().elapsed_seconds = 0;
        self.status_tx.send_replace(ClockStatus::Running);
        info!(
            "Clock started: limit={}s, period={:?}",
            self.limit_seconds, self.period
        );

        Ok(tokio::spawn(clock_task(Arc::clone(self), stop_rx)))
    }

    /// Run one firing: count a second, classify it and emit if printing is on
    ///
    /// Returns `true` once the limit has been reached.
    pub(crate) fn fire(&self) -> bool {
        let (elapsed, chime) = {
            let mut state = self.state();
            let elapsed = state.advance();
            let kind = ChimeKind::classify(elapsed);
            let chime = state.print_enabled.then(|| Chime {
                kind,
                message: state.message(kind).to_string(),
                elapsed_seconds: elapsed,
            });
            (elapsed, chime)
        };

        match chime {
            Some(chime) => {
                debug!("Firing {}: {}", elapsed, chime.kind);
                self.sink.emit(chime);
            }
            None => debug!("Firing {}: printing disabled", elapsed),
        }

        elapsed >= self.limit_seconds
    }

    /// Record the terminal status reported by the loop
    pub(crate) fn finish(&self, status: ClockStatus) {
        self.status_tx.send_replace(status);
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// Ask the periodic loop to exit at its next scheduling opportunity
    ///
    /// Safe to call any number of times, before start or after the loop has
    /// already completed; only the first call has an effect.
    pub fn request_stop(&self) {
        if !self.stop_tx.send_replace(true) {
            info!("Clock stop requested");
        }
    }

    /// Resolve once the clock reaches its limit and stops itself
    ///
    /// Never resolves if the clock was stopped externally instead.
    pub async fn finished(&self) {
        let mut status_rx = self.status_tx.subscribe();
        if status_rx
            .wait_for(|status| *status == ClockStatus::Completed)
            .await
            .is_err()
        {
            std::future::pending::<()>().await;
        }
    }

    /// Resolve with the terminal status, whichever way the loop exited
    pub async fn halted(&self) -> ClockStatus {
        let mut status_rx = self.status_tx.subscribe();
        let status = match status_rx.wait_for(|status| status.is_terminal()).await {
            Ok(status) => *status,
            Err(_) => self.status(),
        };
        status
    }

    pub fn status(&self) -> ClockStatus {
        *self.status_tx.borrow()
    }

    pub fn tick(&self) -> String {
        self.message(ChimeKind::Tick)
    }

    pub fn tock(&self) -> String {
        self.message(ChimeKind::Tock)
    }

    pub fn bong(&self) -> String {
        self.message(ChimeKind::Bong)
    }

    pub fn set_tick(&self, value: impl Into<String>) {
        self.set_message(ChimeKind::Tick, value);
    }

    pub fn set_tock(&self, value: impl Into<String>) {
        self.set_message(ChimeKind::Tock, value);
    }

    pub fn set_bong(&self, value: impl Into<String>) {
        self.set_message(ChimeKind::Bong, value);
    }

    /// Current message for a chime kind
    pub fn message(&self, kind: ChimeKind) -> String {
        self.state().message(kind).to_string()
    }

    /// Replace the message for a chime kind, effective from the next firing
    pub fn set_message(&self, kind: ChimeKind, value: impl Into<String>) {
        let value = value.into();
        debug!("Setting {} message to {:?}", kind, value);
        self.state().set_message(kind, value);
    }

    /// Flip printing on or off and return the new setting
    pub fn toggle_print(&self) -> bool {
        let mut state = self.state();
        state.print_enabled = !state.print_enabled;
        info!(
            "Printing {}",
            if state.print_enabled { "enabled" } else { "disabled" }
        );
        state.print_enabled
    }

    pub fn is_print_enabled(&self) -> bool {
        self.state().print_enabled
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.state().elapsed_seconds
    }

    pub fn limit_seconds(&self) -> u64 {
        self.limit_seconds
    }
}

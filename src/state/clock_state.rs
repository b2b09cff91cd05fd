//! Clock state structure and lifecycle status

use super::ChimeKind;

/// Mutable state read on every firing and edited by the command session
#[derive(Debug, Clone)]
pub struct ClockState {
    pub tick: String,
    pub tock: String,
    pub bong: String,
    pub print_enabled: bool,
    pub elapsed_seconds: u64,
}

impl ClockState {
    /// Create a fresh state with printing enabled and nothing elapsed
    pub fn new(tick: String, tock: String, bong: String) -> Self {
        Self {
            tick,
            tock,
            bong,
            print_enabled: true,
            elapsed_seconds: 0,
        }
    }

    /// Message currently configured for a chime kind
    pub fn message(&self, kind: ChimeKind) -> &str {
        match kind {
            ChimeKind::Tick => &self.tick,
            ChimeKind::Tock => &self.tock,
            ChimeKind::Bong => &self.bong,
        }
    }

    /// Replace the message for a chime kind
    pub fn set_message(&mut self, kind: ChimeKind, value: String) {
        match kind {
            ChimeKind::Tick => self.tick = value,
            ChimeKind::Tock => self.tock = value,
            ChimeKind::Bong => self.bong = value,
        }
    }

    /// Count one more elapsed second and return the new total
    pub fn advance(&mut self) -> u64 {
        self.elapsed_seconds += 1;
        self.elapsed_seconds
    }
}

/// Lifecycle of the periodic loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockStatus {
    /// Constructed, loop not started yet
    #[default]
    Idle,
    Running,
    /// Reached the configured limit and stopped itself
    Completed,
    /// Halted by an external stop request
    Stopped,
}

impl ClockStatus {
    /// Whether the loop has exited for good
    pub fn is_terminal(self) -> bool {
        matches!(self, ClockStatus::Completed | ClockStatus::Stopped)
    }
}

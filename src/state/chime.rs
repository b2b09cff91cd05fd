//! Chime classification and the value emitted on every firing

use std::fmt;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Which message a firing produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChimeKind {
    /// Second-class firing
    Tick,
    /// Minute-class firing
    Tock,
    /// Hour-class firing
    Bong,
}

impl ChimeKind {
    /// Classify an elapsed second count. The largest unit wins, so every
    /// multiple of an hour is a bong even though it is also a whole minute.
    pub fn classify(elapsed_seconds: u64) -> Self {
        if elapsed_seconds > 0 && elapsed_seconds % SECONDS_PER_HOUR == 0 {
            ChimeKind::Bong
        } else if elapsed_seconds > 0 && elapsed_seconds % SECONDS_PER_MINUTE == 0 {
            ChimeKind::Tock
        } else {
            ChimeKind::Tick
        }
    }

    /// Elapsed time expressed in this kind's unit (integer division)
    pub fn scale(self, elapsed_seconds: u64) -> u64 {
        match self {
            ChimeKind::Tick => elapsed_seconds,
            ChimeKind::Tock => elapsed_seconds / SECONDS_PER_MINUTE,
            ChimeKind::Bong => elapsed_seconds / SECONDS_PER_HOUR,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ChimeKind::Tick => "seconds",
            ChimeKind::Tock => "minutes",
            ChimeKind::Bong => "hours",
        }
    }
}

impl fmt::Display for ChimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChimeKind::Tick => "tick",
            ChimeKind::Tock => "tock",
            ChimeKind::Bong => "bong",
        };
        f.write_str(name)
    }
}

/// One emitted chime: the message current at firing time plus the elapsed count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chime {
    pub kind: ChimeKind,
    pub message: String,
    pub elapsed_seconds: u64,
}

impl Chime {
    /// Elapsed time in the unit matching the chime kind
    pub fn scaled_elapsed(&self) -> u64 {
        self.kind.scale(self.elapsed_seconds)
    }
}

impl fmt::Display for Chime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ {} {} have elapsed ]",
            self.message,
            self.scaled_elapsed(),
            self.kind.unit()
        )
    }
}

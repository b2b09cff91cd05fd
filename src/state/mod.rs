//! State management module
//! 
//! This module contains the clock engine and the state it guards.

pub mod chime;
pub mod clock;
pub mod clock_state;

// Re-export main types
pub use chime::{Chime, ChimeKind};
pub use clock::{ChimeSink, Clock, ClockSettings};
pub use clock_state::{ClockState, ClockStatus};

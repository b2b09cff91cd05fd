//! Clock Chime - a console clock with live-editable chimes
//!
//! The clock prints one message every second ("tick"), another every minute
//! ("tock") and another every hour ("bong") until its limit is reached. A
//! command session edits the messages, toggles printing or quits while the
//! clock keeps running.

pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{ClockError, CommandError};
pub use session::{Command, Session};
pub use state::{Chime, ChimeKind, ChimeSink, Clock, ClockSettings, ClockStatus};
pub use utils::{shutdown_signal, Shutdown, ShutdownReason};

//! Utility functions module
//! 
//! This module contains process-level plumbing: shutdown coordination,
//! OS signals and the console input and output.

pub mod input;
pub mod output;
pub mod shutdown;
pub mod signals;

// Re-export main functions
pub use input::spawn_stdin_reader;
pub use output::print_line;
pub use shutdown::{Shutdown, ShutdownReason};
pub use signals::shutdown_signal;

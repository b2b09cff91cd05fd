//! Command session module
//! 
//! This module turns console lines into clock operations.

pub mod command;
pub mod session;

// Re-export main types
pub use command::Command;
pub use session::{Flow, Session, USAGE};

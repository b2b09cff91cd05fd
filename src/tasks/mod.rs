//! Background tasks module
//! 
//! This module contains the periodic loop that drives the clock.

pub mod clock_task;

// Re-export main functions
pub use clock_task::clock_task;

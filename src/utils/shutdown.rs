//! Cooperative shutdown shared by every stop trigger

use std::fmt;
use tokio::sync::watch;
use tracing::{debug, info};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// OS signal with its number
    Signal(i32),
    /// User typed `quit`
    Quit,
    /// The clock reached its limit
    Completed,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Signal(signal) => write!(f, "signal {}", signal),
            ShutdownReason::Quit => f.write_str("quit command"),
            ShutdownReason::Completed => f.write_str("clock limit reached"),
        }
    }
}

/// Do-once cancellation guard
///
/// Clones share one slot. The first [`Shutdown::trigger`] records its reason
/// and wakes every waiter; later triggers, concurrent or not, are ignored.
#[derive(Debug, Clone)]
pub struct Shutdown {
    reason_tx: watch::Sender<Option<ShutdownReason>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (reason_tx, _) = watch::channel(None);
        Self { reason_tx }
    }

    /// Request shutdown. Returns `true` only for the call that won.
    pub fn trigger(&self, reason: ShutdownReason) -> bool {
        let won = self.reason_tx.send_if_modified(|current| {
            if current.is_none() {
                *current = Some(reason);
                true
            } else {
                false
            }
        });

        if won {
            info!("Shutdown requested by {}", reason);
        } else {
            debug!("Ignoring shutdown by {}, already shutting down", reason);
        }
        won
    }

    /// Reason recorded by the winning trigger, if any
    pub fn reason(&self) -> Option<ShutdownReason> {
        *self.reason_tx.borrow()
    }

    pub fn is_triggered(&self) -> bool {
        self.reason().is_some()
    }

    /// Wait until some trigger fires and return its reason
    pub async fn triggered(&self) -> ShutdownReason {
        let mut reason_rx = self.reason_tx.subscribe();
        loop {
            if let Some(reason) = *reason_rx.borrow_and_update() {
                return reason;
            }
            // Our own sender keeps the channel open
            if reason_rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

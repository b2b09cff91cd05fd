//! Console input reader

use std::{
    io::{self, BufRead},
    thread,
};
use tokio::sync::mpsc;
use tracing::debug;

/// Read stdin lines on a dedicated thread and forward them to a channel
///
/// Blocking console reads stay off the runtime so they never hold up
/// shutdown. The channel closes at end of input or after a read error that
/// is not just invalid UTF-8.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();

    let spawned = thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let fatal = matches!(&line, Err(e) if e.kind() != io::ErrorKind::InvalidData);
                if tx.send(line).is_err() || fatal {
                    break;
                }
            }
            debug!("Stdin reader finished");
        });

    if let Err(e) = spawned {
        tracing::error!("Failed to spawn stdin reader: {}", e);
    }

    rx
}

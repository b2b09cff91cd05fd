//! Signal handling for graceful shutdown

use std::io;

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Wait for the first shutdown signal (SIGTERM, SIGINT) and return its number
pub async fn shutdown_signal() -> io::Result<i32> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])?;
    let handle = signals.handle();

    let signal = signals.next().await;
    handle.close();

    match signal {
        Some(signal) => {
            info!("Received signal: {}", signal);
            Ok(signal)
        }
        None => Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "signal stream closed before any signal arrived",
        )),
    }
}

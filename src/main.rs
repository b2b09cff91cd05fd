//! Clock Chime - a console clock with live-editable chimes
//!
//! This is the main entry point for the clock-chime application.

use std::sync::Arc;
use tracing::{error, info};

use clock_chime::{
    config::Config,
    session::Session,
    state::Clock,
    utils::{shutdown_signal, spawn_stdin_reader, Shutdown, ShutdownReason},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // Logs go to stderr so chimes on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(format!("clock_chime={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let settings = config.clock_settings();
    info!("Starting clock-chime v1.0.0");
    info!(
        "Configuration: tick={:?}, tock={:?}, bong={:?}, limit={}s",
        settings.tick, settings.tock, settings.bong, settings.limit_seconds
    );

    let clock = Arc::new(Clock::new(settings));
    let clock_handle = clock.start()?;
    let shutdown = Shutdown::new();

    // OS signals
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(signal) => {
                signal_shutdown.trigger(ShutdownReason::Signal(signal));
            }
            Err(e) => error!("Signal handling unavailable: {}", e),
        }
    });

    // Console commands
    let session = Session::new(Arc::clone(&clock), shutdown.clone());
    tokio::spawn(async move {
        if let Err(e) = session.run(spawn_stdin_reader()).await {
            error!("Command session ended: {}", e);
        }
    });

    tokio::select! {
        reason = shutdown.triggered() => {
            info!("Stopping clock: {}", reason);
        }
        _ = clock.finished() => {
            shutdown.trigger(ShutdownReason::Completed);
            info!("Finished ticking for the configured time");
        }
    }

    // Release the clock's interval before exiting
    clock.request_stop();
    match clock_handle.await {
        Ok(status) => info!("Clock ended with status {:?} after {}s", status, clock.elapsed_seconds()),
        Err(e) => error!("Clock task failed: {}", e),
    }

    info!("Shutting down gracefully");
    Ok(())
}

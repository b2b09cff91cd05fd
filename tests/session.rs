use std::{io, sync::Arc, time::Duration};

use clock_chime::{
    session::Session, Chime, ChimeKind, ChimeSink, Clock, ClockSettings, ClockStatus, Shutdown,
    ShutdownReason,
};
use tokio::{
    sync::mpsc,
    time::{sleep, timeout},
};

fn clock(limit_seconds: u64) -> (Arc<Clock>, mpsc::UnboundedReceiver<Chime>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let settings = ClockSettings {
        limit_seconds,
        ..ClockSettings::default()
    };
    (Arc::new(Clock::with_sink(settings, ChimeSink::Channel(tx))), rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<Chime>) -> Vec<Chime> {
    let mut chimes = Vec::new();
    while let Ok(chime) = rx.try_recv() {
        chimes.push(chime);
    }
    chimes
}

#[tokio::test(start_paused = true)]
async fn commands_change_later_chimes() {
    let (clock, mut chimes) = clock(600);
    let shutdown = Shutdown::new();
    let handle = clock.start().unwrap();

    let (lines_tx, lines_rx) = mpsc::unbounded_channel::<io::Result<String>>();
    let session = tokio::spawn(Session::new(Arc::clone(&clock), shutdown.clone()).run(lines_rx));

    sleep(Duration::from_millis(1500)).await;
    lines_tx.send(Ok("tick hello world".into())).unwrap();
    lines_tx.send(Ok("bong".into())).unwrap();
    sleep(Duration::from_secs(2)).await;

    lines_tx.send(Ok("quit".into())).unwrap();
    assert_eq!(shutdown.triggered().await, ShutdownReason::Quit);
    session.await.unwrap().unwrap();

    clock.request_stop();
    assert_eq!(handle.await.unwrap(), ClockStatus::Stopped);

    let chimes = drain(&mut chimes);
    assert_eq!(chimes.len(), 3);
    assert_eq!(chimes[0].message, "tick");
    assert_eq!(chimes[1].message, "hello world");
    assert_eq!(chimes[2].to_string(), "hello world [ 3 seconds have elapsed ]");
    assert_eq!(clock.bong(), "bong");
}

#[tokio::test(start_paused = true)]
async fn completion_drives_shutdown() {
    let (clock, mut chimes) = clock(130);
    let shutdown = Shutdown::new();
    let handle = clock.start().unwrap();

    tokio::select! {
        _ = shutdown.triggered() => panic!("nothing else should stop the clock"),
        _ = clock.finished() => {
            assert!(shutdown.trigger(ShutdownReason::Completed));
        }
    }

    clock.request_stop();
    assert_eq!(handle.await.unwrap(), ClockStatus::Completed);

    let chimes = drain(&mut chimes);
    let tocks: Vec<u64> = chimes
        .iter()
        .filter(|c| c.kind == ChimeKind::Tock)
        .map(|c| c.elapsed_seconds)
        .collect();
    assert_eq!(chimes.len(), 130);
    assert_eq!(tocks, vec![60, 120]);
    assert_eq!(chimes.last().map(|c| c.kind), Some(ChimeKind::Tick));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn quit_and_signal_race_cancels_once() {
    for _ in 0..20 {
        let (clock, _chimes) = clock(600);
        let shutdown = Shutdown::new();
        let session = Session::new(Arc::clone(&clock), shutdown.clone());

        let quit = tokio::spawn(async move { session.handle_line("quit") });
        let signal = {
            let shutdown = shutdown.clone();
            tokio::spawn(async move { shutdown.trigger(ShutdownReason::Signal(2)) })
        };

        quit.await.unwrap().unwrap();
        let signal_won = signal.await.unwrap();

        let reason = timeout(Duration::from_secs(1), shutdown.triggered())
            .await
            .unwrap();
        if signal_won {
            assert_eq!(reason, ShutdownReason::Signal(2));
        } else {
            assert_eq!(reason, ShutdownReason::Quit);
        }
    }
}

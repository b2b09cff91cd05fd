//! Command session: applies console commands to a running clock

use std::{io, sync::Arc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::Command;
use crate::{
    error::CommandError,
    state::Clock,
    utils::{print_line, Shutdown, ShutdownReason},
};

/// Help text shown when the session starts and after a rejected line
pub const USAGE: &str = "\
Commands (press enter after each):
  tick <text>  change the message printed every second
  tock <text>  change the message printed every minute
  bong <text>  change the message printed every hour
  t            toggle printing on or off
  quit         stop the clock";

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Translates console input into clock operations
#[derive(Debug, Clone)]
pub struct Session {
    clock: Arc<Clock>,
    shutdown: Shutdown,
}

impl Session {
    pub fn new(clock: Arc<Clock>, shutdown: Shutdown) -> Self {
        Self { clock, shutdown }
    }

    /// Apply a parsed command
    pub fn apply(&self, command: Command) -> Flow {
        debug!("Applying command: {:?}", command);
        match command {
            Command::SetMessage(kind, value) => {
                self.clock.set_message(kind, value);
                Flow::Continue
            }
            Command::TogglePrint => {
                self.clock.toggle_print();
                Flow::Continue
            }
            Command::Quit => {
                self.shutdown.trigger(ShutdownReason::Quit);
                Flow::Quit
            }
        }
    }

    /// Parse and apply one input line. Rejected lines leave the clock untouched.
    pub fn handle_line(&self, line: &str) -> Result<Flow, CommandError> {
        let command = line.parse::<Command>()?;
        Ok(self.apply(command))
    }

    /// Consume input lines until `quit`, end of input or shutdown
    ///
    /// Bad lines and undecodable input are reported and skipped. Any other
    /// read error ends the session and is returned; the clock keeps running
    /// and is shut down through the usual triggers.
    pub async fn run(
        self,
        mut lines: mpsc::UnboundedReceiver<io::Result<String>>,
    ) -> io::Result<()> {
        print_line(USAGE);

        loop {
            let line = tokio::select! {
                line = lines.recv() => line,
                reason = self.shutdown.triggered() => {
                    debug!("Session closing, shutdown by {}", reason);
                    return Ok(());
                }
            };

            let line = match line {
                Some(Ok(line)) => line,
                Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("Error reading input: {}", e);
                    print_line(format_args!("Error reading input: {}", e));
                    continue;
                }
                Some(Err(e)) => {
                    warn!("Input stream failed: {}", e);
                    return Err(e);
                }
                None => {
                    info!("End of input, command session finished");
                    return Ok(());
                }
            };

            match self.handle_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line, e);
                    print_line(&e);
                    print_line(USAGE);
                }
            }
        }
    }
}

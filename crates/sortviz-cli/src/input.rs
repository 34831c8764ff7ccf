//! Stdin command reader.
//!
//! Replaces keyboard polling with line input: each line typed on stdin
//! is parsed as a [`DriverCommand`] and sent to the driver's channel. The
//! reader never touches the engine.

use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use sortviz_engine::DriverCommand;
use tracing::{debug, warn};

/// Forward every parseable line from `input` to `tx`.
///
/// Returns when `input` reaches end of file, fails, or the driver drops
/// its receiver. Blank lines are ignored; unknown text is logged.
pub fn forward_commands<R: BufRead>(input: R, tx: &Sender<DriverCommand>) -> usize {
    let mut sent = 0;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "stdin read failed; command input disabled");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<DriverCommand>() {
            Ok(command) => {
                if tx.send(command).is_err() {
                    debug!("driver gone; stopping command input");
                    break;
                }
                sent += 1;
            }
            Err(e) => warn!("{e}"),
        }
    }
    sent
}

/// Spawn a detached thread reading commands from stdin.
pub fn spawn_stdin_reader(tx: Sender<DriverCommand>) -> std::io::Result<JoinHandle<usize>> {
    thread::Builder::new()
        .name("sortviz-stdin".into())
        .spawn(move || forward_commands(std::io::stdin().lock(), &tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn forwards_known_commands_in_order() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let sent = forward_commands(Cursor::new("s\n\nbogus\nq\n"), &tx);
        assert_eq!(sent, 2);
        assert_eq!(rx.try_recv(), Ok(DriverCommand::Reshuffle));
        assert_eq!(rx.try_recv(), Ok(DriverCommand::Quit));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stops_when_receiver_dropped() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        assert_eq!(forward_commands(Cursor::new("s\ns\n"), &tx), 0);
    }
}

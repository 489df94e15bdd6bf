use std::{
    fmt, io,
    io::BufRead,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use log::{debug, warn};
use speedread_core::input::{InputEvent, InputProvider};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Input(InputEvent),
    Quit,
}

/// Returned by [`StdinInput`] once the reader asked to quit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuitRequested;

impl fmt::Display for QuitRequested {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("quit requested")
    }
}

impl std::error::Error for QuitRequested {}

/// Line-based controls read from stdin on a background thread.
pub struct StdinInput {
    commands: Receiver<Command>,
    closed: bool,
}

impl StdinInput {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let Some(command) = parse_command(&line) else {
                    warn!("unknown command {:?}", line.trim());
                    continue;
                };
                if tx.send(command).is_err() {
                    break;
                }
            }
            debug!("stdin closed");
        });

        Self {
            commands: rx,
            closed: false,
        }
    }

    /// Whether stdin hit end of file and no more commands can arrive.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl InputProvider for StdinInput {
    type Error = QuitRequested;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.commands.try_recv() {
            Ok(Command::Input(event)) => Ok(Some(event)),
            Ok(Command::Quit) => Err(QuitRequested),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.closed = true;
                Ok(None)
            }
        }
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let command = match line.trim() {
        "" | "p" | "space" => Command::Input(InputEvent::TogglePause),
        "r" => Command::Input(InputEvent::Restart),
        "b" | "<" => Command::Input(InputEvent::SeekBackward),
        "f" | ">" => Command::Input(InputEvent::SeekForward),
        "+" => Command::Input(InputEvent::SpeedUp),
        "-" => Command::Input(InputEvent::SlowDown),
        "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

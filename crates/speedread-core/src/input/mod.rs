//! Input abstraction layer.

mod scripted;

pub use scripted::ScriptedInput;

/// Logical reading-window actions consumed by the sequencer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    TogglePause,
    Restart,
    SeekBackward,
    SeekForward,
    SpeedUp,
    SlowDown,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

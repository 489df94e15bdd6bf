//! Scheduling primitive consumed by the sequencer.

mod deadline;

pub use deadline::{DeadlineScheduler, TimerHandle};

/// "Call back after N milliseconds" with a cancelable handle.
///
/// The callback is always the sequencer's advancement: when a handle comes
/// due, the embedder passes it to [`crate::app::Sequencer::on_timer`].
pub trait Scheduler {
    type Handle: Copy + Eq + core::fmt::Debug;

    fn schedule(&mut self, delay_ms: u32) -> Self::Handle;

    /// Cancel `handle`. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: Self::Handle);
}

//! Presentation sequencer: the timed, pausable walk over display items.
//!
//! The sequencer never reads a clock. Every step is triggered by the embedder
//! delivering a due [`Scheduler`] handle to [`Sequencer::on_timer`], and at
//! most one handle is outstanding at any time. Pause, restart and seek cancel
//! it before deciding whether to schedule a new one.

use core::fmt;

use alloc::vec::Vec;

use crate::{
    content::{DisplayItem, ItemIndex, Token},
    schedule::Scheduler,
};

mod input;
mod navigation;
mod runtime;
mod view;

#[cfg(test)]
mod tests;

/// Reading speed change applied by one speed-up or slow-down input.
pub const WPM_STEP: u32 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequencerState {
    Idle,
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequencerError {
    /// The text produced no display items.
    EmptyInput,
}

impl fmt::Display for SequencerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("nothing to read"),
        }
    }
}

impl core::error::Error for SequencerError {}

/// State of one reading session over one text.
#[derive(Debug)]
struct Session {
    tokens: Vec<Token>,
    items: Vec<DisplayItem>,
    index: ItemIndex,
    cursor: usize,
    paused: bool,
    finished: bool,
    on_screen: Option<usize>,
}

impl Session {
    fn new(tokens: Vec<Token>, items: Vec<DisplayItem>, index: ItemIndex) -> Self {
        Self {
            tokens,
            items,
            index,
            cursor: 0,
            paused: false,
            finished: false,
            on_screen: None,
        }
    }

    fn rewind(&mut self) {
        self.cursor = 0;
        self.paused = false;
        self.finished = false;
        self.on_screen = None;
    }
}

pub struct Sequencer<S>
where
    S: Scheduler,
{
    scheduler: S,
    session: Option<Session>,
    pending: Option<S::Handle>,
}

impl<S> Sequencer<S>
where
    S: Scheduler,
{
    pub const fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            session: None,
            pending: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Drop the current session and any outstanding timer.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.session = None;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn schedule_advance(&mut self, delay_ms: u32) {
        self.cancel_pending();
        self.pending = Some(self.scheduler.schedule(delay_ms));
    }
}

#![cfg_attr(not(test), no_std)]

//! Text segmentation and timed presentation engine for RSVP reading.
//!
//! The embedding layer hands in a decoded string plus a [`settings::ReaderConfig`]
//! snapshot and drives [`app::Sequencer`] through a [`schedule::Scheduler`].
//! Nothing in here performs I/O.

extern crate alloc;

pub mod app;
pub mod content;
pub mod fixation;
pub mod input;
pub mod pacing;
pub mod render;
pub mod schedule;
pub mod settings;
pub mod text_policy;

pub use app::{SeekDirection, Sequencer, SequencerError, SequencerState};
pub use content::{DisplayItem, ItemIndex, PARAGRAPH_MARKER, Token, build_items, tokenize};
pub use fixation::locate;
pub use pacing::delay_ms;
pub use render::{Frame, RenderEvent};
pub use settings::ReaderConfig;

//! Render events and the per-item view model consumed by the UI layer.

use crate::{fixation, settings::ContextLayout};

/// Emitted by sequencer operations that change what is on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RenderEvent {
    /// Show the display item at `index`.
    Show { index: usize },
    /// Presentation ran past the last item.
    End,
}

/// Everything a renderer needs to draw one display item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    /// Item text; empty for paragraph breaks.
    pub text: &'a str,
    pub is_paragraph: bool,
    pub index: usize,
    pub total: usize,
    /// Character index to highlight, when fixation applies to this item.
    pub fixation: Option<usize>,
    pub delay_ms: u32,
    /// Neighbouring item texts, present only when context display is on.
    pub previous: Option<&'a str>,
    pub next: Option<&'a str>,
    pub layout: ContextLayout,
    pub paused: bool,
}

impl<'a> Frame<'a> {
    /// Text split around the fixation character as `(before, pivot, after)`.
    pub fn fixation_parts(&self) -> Option<(&'a str, &'a str, &'a str)> {
        fixation::split_at_char(self.text, self.fixation?)
    }

    pub fn has_context(&self) -> bool {
        self.previous.is_some() || self.next.is_some()
    }
}

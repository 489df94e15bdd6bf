use alloc::string::String;

use heapless::String as LabelString;

use super::{Sequencer, SequencerState};
use crate::{
    content::DisplayItem,
    fixation,
    pacing::delay_ms,
    render::Frame,
    schedule::Scheduler,
    settings::ReaderConfig,
    text_policy::{self, LABEL_BYTES},
};

impl<S> Sequencer<S>
where
    S: Scheduler,
{
    pub fn state(&self) -> SequencerState {
        match &self.session {
            None => SequencerState::Idle,
            Some(session) if session.paused => SequencerState::Paused,
            Some(_) => SequencerState::Running,
        }
    }

    /// Ordinal of the next item to show; `0` without a session.
    pub fn cursor(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.cursor)
    }

    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.paused)
    }

    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.finished)
    }

    pub fn item_count(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.items.len())
    }

    /// Whether a timer is outstanding for this session.
    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Index of the item most recently put on screen.
    pub fn on_screen(&self) -> Option<usize> {
        self.session.as_ref()?.on_screen
    }

    /// Progress bar value and maximum.
    pub fn progress(&self) -> (usize, usize) {
        let Some(session) = self.session.as_ref() else {
            return (0, 0);
        };
        let total = session.items.len();
        let value = if session.finished {
            total
        } else {
            session.cursor.min(total)
        };
        (value, total)
    }

    /// View model for the item at `index`.
    pub fn frame(&self, index: usize, config: &ReaderConfig) -> Option<Frame<'_>> {
        let session = self.session.as_ref()?;
        let item = session.items.get(index)?;
        let text = match item {
            DisplayItem::Paragraph => "",
            DisplayItem::Words { text, .. } => text.as_str(),
        };

        let fixation = if config.fixation_enabled() && !item.is_paragraph() {
            fixation::locate(text, config.orp_position)
        } else {
            None
        };

        let neighbour = |idx: usize| match session.items.get(idx)? {
            DisplayItem::Paragraph => None,
            DisplayItem::Words { text, .. } => Some(text.as_str()),
        };
        let (previous, next) = if config.show_context {
            (
                index.checked_sub(1).and_then(neighbour),
                neighbour(index + 1),
            )
        } else {
            (None, None)
        };

        Some(Frame {
            text,
            is_paragraph: item.is_paragraph(),
            index,
            total: session.items.len(),
            fixation,
            delay_ms: delay_ms(item, config),
            previous,
            next,
            layout: config.context_layout,
            paused: session.paused,
        })
    }

    /// Context snippet around the item on screen.
    pub fn context_snippet(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        let range = session.index.range(session.on_screen?)?;
        Some(text_policy::context_snippet(&session.tokens, range))
    }

    pub fn position_label(&self) -> LabelString<LABEL_BYTES> {
        text_policy::position_label(self.cursor(), self.item_count(), self.is_finished())
    }

    pub fn status_label(&self, config: &ReaderConfig) -> LabelString<LABEL_BYTES> {
        text_policy::status_label(config.wpm, self.is_paused())
    }
}

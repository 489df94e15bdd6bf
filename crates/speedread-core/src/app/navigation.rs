use log::debug;

use super::{SeekDirection, Sequencer, Session};
use crate::{content::Token, render::RenderEvent, schedule::Scheduler};

impl<S> Sequencer<S>
where
    S: Scheduler,
{
    /// Jump to a sentence start and pause there.
    ///
    /// Backward lands on the start of the sentence around the current item, or
    /// on the previous sentence when already paused at that start. Forward
    /// lands on the start of the sentence after the current item's sentence,
    /// or past the end when none is left.
    /// Nothing is scheduled; reading continues on [`resume`](Self::resume).
    pub fn seek_to_sentence_boundary(&mut self, direction: SeekDirection) -> Option<RenderEvent> {
        let session = self.session.as_ref()?;
        let target = match direction {
            SeekDirection::Backward => session.backward_target(),
            SeekDirection::Forward => session.forward_target()?,
        };

        self.cancel_pending();
        let session = self.session.as_mut()?;
        debug!(
            "sequencer: seek {:?} cursor={} target={}",
            direction, session.cursor, target
        );
        session.paused = true;
        session.cursor = target;
        session.finished = target >= session.items.len();
        if session.finished {
            return Some(RenderEvent::End);
        }

        session.on_screen = Some(target);
        Some(RenderEvent::Show { index: target })
    }
}

impl Session {
    /// Item the reader is looking at: the one on screen, or the cursor
    /// before anything has been shown.
    fn current_item(&self) -> usize {
        self.on_screen
            .unwrap_or(self.cursor)
            .min(self.items.len().saturating_sub(1))
    }

    fn backward_target(&self) -> usize {
        let current = self.current_item();
        let item_start = self.index.range(current).map_or(0, |range| range.start);
        let sentence_start = sentence_start_before(&self.tokens, item_start);
        let target = self.index.item_for_token(sentence_start);

        if self.paused && self.cursor == target && sentence_start > 0 {
            // Skip the terminator that closes the previous sentence.
            let previous = sentence_start_before(&self.tokens, sentence_start - 1);
            return self.index.item_for_token(previous);
        }
        target
    }

    fn forward_target(&self) -> Option<usize> {
        let count = self.items.len();
        if self.cursor >= count {
            return None;
        }

        let current = self.current_item();
        let search_from = self.index.range(current)?.start;
        let next_start = self.tokens[search_from..]
            .iter()
            .position(Token::ends_sentence)
            .map(|offset| search_from + offset + 1);

        let target = match next_start {
            Some(token) if token < self.tokens.len() => self.index.item_for_token(token),
            _ => count,
        };
        Some(target.max(current + 1))
    }
}

/// Index of the token starting the sentence that contains `tokens[end]`,
/// searching `tokens[..end]` backwards for a terminator.
fn sentence_start_before(tokens: &[Token], end: usize) -> usize {
    tokens[..end.min(tokens.len())]
        .iter()
        .rposition(Token::ends_sentence)
        .map_or(0, |idx| idx + 1)
}

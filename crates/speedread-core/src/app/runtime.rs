use alloc::vec::Vec;

use log::debug;

use super::{Sequencer, SequencerError, Session};
use crate::{
    content::{Token, build_items, tokenize},
    pacing::delay_ms,
    render::RenderEvent,
    schedule::Scheduler,
    settings::ReaderConfig,
};

impl<S> Sequencer<S>
where
    S: Scheduler,
{
    /// Begin a session over `tokens`; the first item shows after the initial delay.
    ///
    /// On [`SequencerError::EmptyInput`] the previous state is left untouched.
    pub fn start(
        &mut self,
        tokens: Vec<Token>,
        config: &ReaderConfig,
    ) -> Result<(), SequencerError> {
        let (items, index) = build_items(&tokens, config.chunk_size);
        if items.is_empty() {
            return Err(SequencerError::EmptyInput);
        }

        debug!(
            "sequencer: start tokens={} items={} chunk_size={} initial_delay_ms={}",
            tokens.len(),
            items.len(),
            config.chunk_size,
            config.initial_delay_ms
        );
        self.cancel_pending();
        self.session = Some(Session::new(tokens, items, index));
        self.schedule_advance(config.initial_delay_ms);
        Ok(())
    }

    /// Tokenize `text` and [`start`](Self::start) a session over it.
    pub fn start_text(&mut self, text: &str, config: &ReaderConfig) -> Result<(), SequencerError> {
        self.start(tokenize(text), config)
    }

    /// Deliver a due timer. Handles other than the outstanding one are ignored.
    pub fn on_timer(&mut self, handle: S::Handle, config: &ReaderConfig) -> Option<RenderEvent> {
        if self.pending != Some(handle) {
            debug!("sequencer: ignoring stale timer {:?}", handle);
            return None;
        }
        self.pending = None;
        self.advance(config)
    }

    /// Show the item at the cursor and schedule the next step after its delay.
    pub fn advance(&mut self, config: &ReaderConfig) -> Option<RenderEvent> {
        self.cancel_pending();
        let session = self.session.as_mut()?;
        if session.paused {
            return None;
        }

        if session.cursor >= session.items.len() {
            if !session.finished {
                debug!("sequencer: finished after {} items", session.items.len());
            }
            session.finished = true;
            return Some(RenderEvent::End);
        }

        let index = session.cursor;
        let delay = delay_ms(&session.items[index], config);
        session.cursor += 1;
        session.on_screen = Some(index);
        self.schedule_advance(delay);
        Some(RenderEvent::Show { index })
    }

    pub fn pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.paused {
            return;
        }

        session.paused = true;
        debug!("sequencer: paused at cursor={}", session.cursor);
        self.cancel_pending();
    }

    /// Continue from the cursor immediately, without waiting for a timer.
    pub fn resume(&mut self, config: &ReaderConfig) -> Option<RenderEvent> {
        let session = self.session.as_mut()?;
        if !session.paused {
            return None;
        }

        session.paused = false;
        session.finished = false;
        debug!("sequencer: resumed at cursor={}", session.cursor);
        self.advance(config)
    }

    pub fn toggle_pause(&mut self, config: &ReaderConfig) -> Option<RenderEvent> {
        if self.is_paused() {
            self.resume(config)
        } else {
            self.pause();
            None
        }
    }

    /// Rewind to the first item and schedule it after the initial delay.
    pub fn restart(&mut self, config: &ReaderConfig) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.rewind();
        debug!("sequencer: restart items={}", session.items.len());
        self.schedule_advance(config.initial_delay_ms);
    }

    /// Change reading speed by `delta_wpm`; the pending delay is not recomputed.
    pub fn change_speed(&self, config: &mut ReaderConfig, delta_wpm: i32) -> u32 {
        let wpm = config.adjust_wpm(delta_wpm);
        debug!("sequencer: speed delta={} wpm={}", delta_wpm, wpm);
        wpm
    }
}

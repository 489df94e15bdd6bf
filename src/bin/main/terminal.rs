use std::io::{self, Write};

use log::debug;
use speedread_core::{
    Frame, ReaderConfig, RenderEvent, Sequencer, schedule::DeadlineScheduler,
    settings::ContextLayout, text_policy,
};

const PIVOT_ON: &str = "\x1b[1;31m";
const DIM_ON: &str = "\x1b[2m";
const STYLE_OFF: &str = "\x1b[0m";

/// Prints one line per shown item.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "controls: <enter>/p pause, b/< back, f/> forward, +/- speed, r restart, q quit"
        )?;
        self.out.flush()
    }

    pub fn render(
        &mut self,
        sequencer: &Sequencer<DeadlineScheduler>,
        event: RenderEvent,
        config: &ReaderConfig,
    ) -> io::Result<()> {
        match event {
            RenderEvent::Show { index } => {
                if let Some(frame) = sequencer.frame(index, config) {
                    self.draw_frame(&frame)?;
                }
            }
            RenderEvent::End => {
                writeln!(self.out, "[end] {}", sequencer.position_label())?;
            }
        }
        self.out.flush()
    }

    /// Status line, plus the surrounding text while paused.
    pub fn render_status(
        &mut self,
        sequencer: &Sequencer<DeadlineScheduler>,
        config: &ReaderConfig,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "{DIM_ON}{}  {}{STYLE_OFF}",
            sequencer.status_label(config),
            sequencer.position_label()
        )?;
        if sequencer.is_paused() && config.show_continuous_context {
            if let Some(snippet) = sequencer.context_snippet() {
                writeln!(self.out, "{DIM_ON}{snippet}{STYLE_OFF}")?;
            }
        }
        self.out.flush()
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        debug!("item {} / {} for {} ms", frame.index + 1, frame.total, frame.delay_ms);
        if frame.is_paragraph {
            writeln!(self.out)?;
        } else {
            self.draw_words(frame)?;
        }

        // Paused frames come from seeks; label where the jump landed.
        if frame.paused {
            writeln!(
                self.out,
                "{DIM_ON}{}{STYLE_OFF}",
                text_policy::position_label(frame.index, frame.total, false)
            )?;
        }
        Ok(())
    }

    fn draw_words(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let focus = highlighted(frame);
        match (frame.layout, frame.has_context()) {
            (_, false) => writeln!(self.out, "{focus}"),
            (ContextLayout::Horizontal, true) => writeln!(
                self.out,
                "{DIM_ON}{}{STYLE_OFF}  {focus}  {DIM_ON}{}{STYLE_OFF}",
                frame.previous.unwrap_or(""),
                frame.next.unwrap_or("")
            ),
            (ContextLayout::Vertical, true) => {
                if let Some(previous) = frame.previous {
                    writeln!(self.out, "{DIM_ON}{previous}{STYLE_OFF}")?;
                }
                writeln!(self.out, "{focus}")?;
                if let Some(next) = frame.next {
                    writeln!(self.out, "{DIM_ON}{next}{STYLE_OFF}")?;
                }
                Ok(())
            }
        }
    }
}

fn highlighted(frame: &Frame<'_>) -> String {
    match frame.fixation_parts() {
        Some((before, pivot, after)) => format!("{before}{PIVOT_ON}{pivot}{STYLE_OFF}{after}"),
        None => frame.text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use speedread_core::SeekDirection;

    use super::*;

    #[test]
    fn seek_frame_highlights_pivot_and_labels_position() {
        let config = ReaderConfig::default();
        let mut sequencer = Sequencer::new(DeadlineScheduler::new());
        sequencer.start_text("One. Two. Three.", &config).unwrap();
        let handle = sequencer.scheduler_mut().poll(500).unwrap();
        sequencer.on_timer(handle, &config);
        sequencer.pause();
        let event = sequencer
            .seek_to_sentence_boundary(SeekDirection::Forward)
            .unwrap();

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&sequencer, event, &config).unwrap();
        let out = String::from_utf8(renderer.out).unwrap();
        assert!(out.contains(&format!("T{PIVOT_ON}w{STYLE_OFF}o.")));
        assert!(out.contains("Block 2 / 3"));
    }
}

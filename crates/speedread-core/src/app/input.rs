use super::{SeekDirection, Sequencer, WPM_STEP};
use crate::{
    input::{InputEvent, InputProvider},
    render::RenderEvent,
    schedule::Scheduler,
    settings::ReaderConfig,
};

impl<S> Sequencer<S>
where
    S: Scheduler,
{
    /// Drain `input`, applying each event and handing emitted render events to `on_event`.
    pub fn process_inputs<IN>(
        &mut self,
        input: &mut IN,
        config: &mut ReaderConfig,
        mut on_event: impl FnMut(RenderEvent),
    ) -> Result<(), IN::Error>
    where
        IN: InputProvider,
    {
        while let Some(event) = input.poll_event()? {
            if let Some(render) = self.apply_input(event, config) {
                on_event(render);
            }
        }
        Ok(())
    }

    pub fn apply_input(
        &mut self,
        event: InputEvent,
        config: &mut ReaderConfig,
    ) -> Option<RenderEvent> {
        let step = WPM_STEP as i32;
        match event {
            InputEvent::TogglePause => self.toggle_pause(config),
            InputEvent::Restart => {
                self.restart(config);
                None
            }
            InputEvent::SeekBackward => self.seek_to_sentence_boundary(SeekDirection::Backward),
            InputEvent::SeekForward => self.seek_to_sentence_boundary(SeekDirection::Forward),
            InputEvent::SpeedUp => {
                self.change_speed(config, step);
                None
            }
            InputEvent::SlowDown => {
                self.change_speed(config, -step);
                None
            }
        }
    }
}

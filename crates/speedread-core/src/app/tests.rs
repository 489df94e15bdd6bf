use alloc::vec::Vec;

use super::*;
use crate::{
    input::{InputEvent, ScriptedInput},
    render::RenderEvent,
    settings::ReaderConfig,
};

#[derive(Debug, Default)]
struct RecordingScheduler {
    next: u32,
    scheduled: Vec<(u32, u32)>,
    cancelled: Vec<u32>,
    live: Option<u32>,
}

impl RecordingScheduler {
    fn last_delay(&self) -> Option<u32> {
        self.scheduled.last().map(|(_, delay)| *delay)
    }
}

impl Scheduler for RecordingScheduler {
    type Handle = u32;

    fn schedule(&mut self, delay_ms: u32) -> u32 {
        self.next += 1;
        self.scheduled.push((self.next, delay_ms));
        self.live = Some(self.next);
        self.next
    }

    fn cancel(&mut self, handle: u32) {
        self.cancelled.push(handle);
        if self.live == Some(handle) {
            self.live = None;
        }
    }
}

fn config() -> ReaderConfig {
    ReaderConfig {
        wpm: 300,
        chunk_size: 1,
        pause_punctuation: 0.5,
        pause_comma: 0.2,
        pause_paragraph: 0.8,
        initial_delay_ms: 500,
        word_length_threshold: 8,
        extra_ms_per_char: 10,
        ..ReaderConfig::default()
    }
}

fn started(text: &str, config: &ReaderConfig) -> Sequencer<RecordingScheduler> {
    let mut seq = Sequencer::new(RecordingScheduler::default());
    seq.start_text(text, config).unwrap();
    seq
}

/// Deliver the live timer, as the embedder would when it comes due.
fn fire(seq: &mut Sequencer<RecordingScheduler>, config: &ReaderConfig) -> Option<RenderEvent> {
    let handle = seq.scheduler_mut().live.take()?;
    seq.on_timer(handle, config)
}

#[test]
fn empty_text_is_rejected_without_state_change() {
    let config = config();
    let mut seq = Sequencer::new(RecordingScheduler::default());
    assert_eq!(seq.start_text(" \n\n ", &config), Err(SequencerError::EmptyInput));
    assert_eq!(seq.state(), SequencerState::Idle);
    assert!(seq.scheduler().scheduled.is_empty());

    seq.start_text("kept session", &config).unwrap();
    assert_eq!(seq.start_text("", &config), Err(SequencerError::EmptyInput));
    assert_eq!(seq.item_count(), 2);
    assert!(seq.has_pending_timer());
}

#[test]
fn start_waits_for_initial_delay() {
    let config = config();
    let seq = started("Hello world.", &config);
    assert_eq!(seq.state(), SequencerState::Running);
    assert_eq!(seq.cursor(), 0);
    assert_eq!(seq.on_screen(), None);
    assert_eq!(seq.scheduler().scheduled, [(1, 500)]);
}

#[test]
fn advance_walks_items_with_computed_delays() {
    let config = config();
    let mut seq = started("Hello world. This is great!", &config);

    let mut delays = Vec::new();
    for index in 0..5 {
        assert_eq!(fire(&mut seq, &config), Some(RenderEvent::Show { index }));
        delays.push(seq.scheduler().last_delay().unwrap());
    }
    assert_eq!(delays, [200, 700, 200, 200, 700]);

    assert_eq!(fire(&mut seq, &config), Some(RenderEvent::End));
    assert!(seq.is_finished());
    assert!(!seq.has_pending_timer());
    assert_eq!(seq.scheduler().live, None);
    assert_eq!(fire(&mut seq, &config), None);
    assert_eq!(seq.progress(), (5, 5));
}

#[test]
fn stale_timer_is_ignored() {
    let config = config();
    let mut seq = started("one two three", &config);
    let first = seq.scheduler().live.unwrap();

    seq.restart(&config);
    assert!(seq.scheduler().cancelled.contains(&first));
    assert_eq!(seq.on_timer(first, &config), None);
    assert_eq!(seq.cursor(), 0);

    assert_eq!(fire(&mut seq, &config), Some(RenderEvent::Show { index: 0 }));
}

#[test]
fn pause_then_resume_continues_at_cursor() {
    let config = config();
    let text = "Hello world. This is great!";

    let mut control = started(text, &config);
    for _ in 0..3 {
        fire(&mut control, &config);
    }
    let expected = control.on_screen();

    let mut seq = started(text, &config);
    fire(&mut seq, &config);
    fire(&mut seq, &config);
    seq.pause();
    assert_eq!(seq.state(), SequencerState::Paused);
    assert_eq!(seq.cursor(), 2);
    assert!(!seq.has_pending_timer());
    assert_eq!(seq.scheduler().live, None);
    assert_eq!(fire(&mut seq, &config), None);

    assert_eq!(seq.cursor(), 2);
    assert_eq!(seq.resume(&config), Some(RenderEvent::Show { index: 2 }));
    assert_eq!(seq.on_screen(), expected);
    assert!(seq.has_pending_timer());
}

#[test]
fn resume_without_pause_does_nothing() {
    let config = config();
    let mut seq = started("a b", &config);
    assert_eq!(seq.resume(&config), None);
    assert_eq!(seq.scheduler().scheduled.len(), 1);
}

#[test]
fn resume_after_end_reports_end_again() {
    let config = config();
    let mut seq = started("only", &config);
    fire(&mut seq, &config);
    assert_eq!(fire(&mut seq, &config), Some(RenderEvent::End));

    seq.pause();
    assert_eq!(seq.resume(&config), Some(RenderEvent::End));
    assert!(seq.is_finished());
    assert!(!seq.has_pending_timer());
}

#[test]
fn restart_rewinds_and_reschedules() {
    let config = config();
    let mut seq = started("a b c", &config);
    fire(&mut seq, &config);
    fire(&mut seq, &config);
    seq.pause();

    seq.restart(&config);
    assert_eq!(seq.cursor(), 0);
    assert_eq!(seq.state(), SequencerState::Running);
    assert!(!seq.is_finished());
    assert_eq!(seq.scheduler().last_delay(), Some(500));
    assert_eq!(fire(&mut seq, &config), Some(RenderEvent::Show { index: 0 }));
}

#[test]
fn backward_seek_lands_on_current_sentence_start() {
    let config = config();
    let mut seq = started("One. Two. Three.", &config);
    for _ in 0..3 {
        fire(&mut seq, &config);
    }
    assert_eq!(seq.cursor(), 3);

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Backward),
        Some(RenderEvent::Show { index: 2 })
    );
    assert_eq!(seq.cursor(), 2);
    assert!(seq.is_paused());
    assert!(!seq.has_pending_timer());
    assert_eq!(seq.scheduler().live, None);
}

#[test]
fn repeated_backward_seek_steps_to_earlier_sentences() {
    let config = config();
    let mut seq = started("One. Two. Three.", &config);
    for _ in 0..3 {
        fire(&mut seq, &config);
    }

    let mut landed = Vec::new();
    for _ in 0..4 {
        seq.seek_to_sentence_boundary(SeekDirection::Backward);
        landed.push(seq.cursor());
    }
    assert_eq!(landed, [2, 1, 0, 0]);
}

#[test]
fn backward_seek_uses_token_ranges_of_chunks() {
    let config = ReaderConfig {
        chunk_size: 2,
        ..config()
    };
    // Items: "Alpha beta." "Gamma delta" "epsilon. Zeta"
    let mut seq = started("Alpha beta. Gamma delta epsilon. Zeta", &config);
    for _ in 0..3 {
        fire(&mut seq, &config);
    }

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Backward),
        Some(RenderEvent::Show { index: 1 })
    );
}

#[test]
fn forward_seek_steps_through_sentences_then_finishes() {
    let config = config();
    let mut seq = started("One. Two. Three.", &config);
    fire(&mut seq, &config);

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::Show { index: 1 })
    );
    assert!(seq.is_paused());
    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::Show { index: 2 })
    );
    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::End)
    );
    assert_eq!(seq.cursor(), 3);
    assert!(seq.is_finished());
    assert_eq!(seq.seek_to_sentence_boundary(SeekDirection::Forward), None);
}

#[test]
fn forward_seek_after_pause_starts_from_item_on_screen() {
    let config = config();
    let mut seq = started("One. Two. Three.", &config);
    assert_eq!(fire(&mut seq, &config), Some(RenderEvent::Show { index: 0 }));
    seq.pause();
    assert_eq!(seq.cursor(), 1);

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::Show { index: 1 })
    );
    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::Show { index: 2 })
    );
}

#[test]
fn backward_seek_after_pause_stays_in_sentence_on_screen() {
    let config = config();
    let mut seq = started("Hello big world. This is great!", &config);
    for _ in 0..5 {
        fire(&mut seq, &config);
    }
    // "is" is on screen; the cursor already points at "great!".
    seq.pause();
    assert_eq!(seq.cursor(), 5);

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Backward),
        Some(RenderEvent::Show { index: 3 })
    );
    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Backward),
        Some(RenderEvent::Show { index: 0 })
    );
}

#[test]
fn forward_seek_skips_rest_of_multiword_sentence() {
    let config = config();
    let mut seq = started("Hello big world. This is great! Bye", &config);
    fire(&mut seq, &config);

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::Show { index: 3 })
    );
    assert_eq!(seq.resume(&config), Some(RenderEvent::Show { index: 3 }));
}

#[test]
fn seek_without_session_is_noop() {
    let mut seq = Sequencer::new(RecordingScheduler::default());
    assert_eq!(seq.seek_to_sentence_boundary(SeekDirection::Backward), None);
    assert_eq!(seq.seek_to_sentence_boundary(SeekDirection::Forward), None);
    seq.pause();
    assert_eq!(seq.state(), SequencerState::Idle);
}

#[test]
fn speed_change_applies_to_next_delay_only() {
    let mut config = config();
    let mut seq = started("Hello world.", &config);
    fire(&mut seq, &config);
    assert_eq!(seq.scheduler().last_delay(), Some(200));

    assert_eq!(seq.change_speed(&mut config, -150), 150);
    assert_eq!(seq.scheduler().scheduled.len(), 2);

    fire(&mut seq, &config);
    assert_eq!(seq.scheduler().last_delay(), Some(900));
    assert_eq!(seq.change_speed(&mut config, -1_000), crate::settings::MIN_WPM);
}

#[test]
fn scripted_input_drives_operations() {
    let mut config = config();
    let mut seq = started("One. Two. Three.", &config);
    fire(&mut seq, &config);

    let events = [
        InputEvent::SpeedUp,
        InputEvent::SpeedUp,
        InputEvent::TogglePause,
        InputEvent::SeekBackward,
        InputEvent::TogglePause,
    ];
    let mut input = ScriptedInput::new(&events);
    let mut rendered = Vec::new();
    seq.process_inputs(&mut input, &mut config, |event| rendered.push(event))
        .unwrap();

    assert_eq!(config.wpm, 320);
    assert_eq!(
        rendered,
        [RenderEvent::Show { index: 0 }, RenderEvent::Show { index: 0 }]
    );
    assert_eq!(seq.state(), SequencerState::Running);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn frame_gates_fixation_and_context() {
    let config = ReaderConfig {
        show_context: true,
        ..config()
    };
    let mut seq = started("Hello\n\nworld", &config);
    fire(&mut seq, &config);

    let frame = seq.frame(0, &config).unwrap();
    assert_eq!(frame.text, "Hello");
    assert_eq!(frame.fixation, Some(1));
    assert_eq!(frame.fixation_parts(), Some(("H", "e", "llo")));
    assert_eq!(frame.previous, None);
    assert_eq!(frame.next, None);
    assert_eq!(frame.delay_ms, 200);

    let paragraph = seq.frame(1, &config).unwrap();
    assert!(paragraph.is_paragraph);
    assert_eq!(paragraph.text, "");
    assert_eq!(paragraph.fixation, None);
    assert_eq!(paragraph.previous, Some("Hello"));
    assert_eq!(paragraph.next, Some("world"));

    let chunked = ReaderConfig {
        chunk_size: 2,
        ..config
    };
    assert_eq!(seq.frame(0, &chunked).unwrap().fixation, None);
    assert!(seq.frame(3, &config).is_none());
}

#[test]
fn snippet_follows_item_on_screen() {
    let config = config();
    let mut seq = started("One two three. Four five.", &config);
    assert_eq!(seq.context_snippet(), None);

    fire(&mut seq, &config);
    fire(&mut seq, &config);
    seq.pause();
    assert_eq!(
        seq.context_snippet().as_deref(),
        Some("One \u{25b6}two\u{25c0} three. Four five.")
    );
    assert_eq!(seq.position_label().as_str(), "Block 3 / 5");
    assert_eq!(seq.status_label(&config).as_str(), "300 WPM (paused)");
}

#[test]
fn stop_discards_session_and_timer() {
    let config = config();
    let mut seq = started("a b", &config);
    let handle = seq.scheduler().live.unwrap();
    seq.stop();
    assert_eq!(seq.state(), SequencerState::Idle);
    assert_eq!(seq.on_timer(handle, &config), None);
    assert_eq!(seq.scheduler().live, None);
}

use speedread_core::{
    ReaderConfig, RenderEvent, SeekDirection, Sequencer, build_items, delay_ms,
    pacing::MIN_DELAY_MS,
    schedule::{DeadlineScheduler, Scheduler},
    tokenize,
};

const CORPUS: [&str; 5] = [
    "Hello world. This is great!",
    "A\n\nB",
    "One. Two. Three.",
    "Es gibt Obst, z.B. Äpfel, Birnen usw. Und dann\u{2014}nichts mehr!\n\nZweiter Absatz: kurz.",
    "\n\nleading break then a very long Donaudampfschifffahrtsgesellschaftskapitän\n\n\n\n",
];

/// Run a session to completion, returning `(shown indices, elapsed ms)`.
fn run_to_end(text: &str, config: &ReaderConfig) -> (Vec<usize>, u64) {
    let mut seq = Sequencer::new(DeadlineScheduler::new());
    seq.start_text(text, config).unwrap();

    let mut shown = Vec::new();
    loop {
        let deadline = seq
            .scheduler()
            .next_deadline_ms()
            .expect("a running session always has a timer outstanding");
        let handle = seq.scheduler_mut().poll(deadline).unwrap();
        match seq.on_timer(handle, config) {
            Some(RenderEvent::Show { index }) => shown.push(index),
            Some(RenderEvent::End) => break,
            None => panic!("due timer produced no event"),
        }
    }

    assert!(seq.is_finished());
    assert!(!seq.scheduler().is_pending());
    (shown, seq.scheduler().now_ms())
}

#[test]
fn every_item_is_shown_once_in_order() {
    for text in CORPUS {
        for chunk_size in 1..=5 {
            let config = ReaderConfig {
                chunk_size,
                ..ReaderConfig::default()
            };
            let tokens = tokenize(text);
            let (items, _) = build_items(&tokens, chunk_size);

            let (shown, elapsed) = run_to_end(text, &config);
            assert_eq!(shown, (0..items.len()).collect::<Vec<_>>());

            let expected: u64 = u64::from(config.initial_delay_ms)
                + items
                    .iter()
                    .map(|item| u64::from(delay_ms(item, &config)))
                    .sum::<u64>();
            assert_eq!(elapsed, expected, "{text:?} chunk_size={chunk_size}");
        }
    }
}

#[test]
fn delays_respect_floor_under_extreme_speed() {
    let config = ReaderConfig {
        wpm: u32::MAX,
        pause_punctuation: 0.0,
        pause_comma: 0.0,
        pause_paragraph: 0.0,
        extra_ms_per_char: 0,
        ..ReaderConfig::default()
    };
    for text in CORPUS {
        let (items, _) = build_items(&tokenize(text), 1);
        for item in &items {
            assert!(delay_ms(item, &config) >= MIN_DELAY_MS);
        }
    }
}

#[test]
fn paused_session_ignores_cancelled_deadline() {
    let config = ReaderConfig::default();
    let mut seq = Sequencer::new(DeadlineScheduler::new());
    seq.start_text("Hello world. This is great!", &config).unwrap();

    let first = seq.scheduler_mut().poll(500).unwrap();
    assert_eq!(
        seq.on_timer(first, &config),
        Some(RenderEvent::Show { index: 0 })
    );
    let stale = {
        // Grab the outstanding handle before pausing cancels it.
        let mut probe = seq.scheduler().clone();
        probe.poll(u64::MAX).unwrap()
    };

    seq.pause();
    assert!(!seq.scheduler().is_pending());
    assert_eq!(seq.on_timer(stale, &config), None);
    assert_eq!(seq.cursor(), 1);

    assert_eq!(
        seq.seek_to_sentence_boundary(SeekDirection::Forward),
        Some(RenderEvent::Show { index: 2 })
    );
    assert!(!seq.scheduler().is_pending());
    assert_eq!(seq.resume(&config), Some(RenderEvent::Show { index: 2 }));
    assert!(seq.scheduler().is_pending());

    seq.scheduler_mut().cancel(stale);
    assert!(seq.scheduler().is_pending());
}

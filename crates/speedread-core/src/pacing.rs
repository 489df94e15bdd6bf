//! Per-item display durations.

use crate::{
    content::{DisplayItem, text_utils},
    settings::{PauseKind, ReaderConfig},
};

/// Floor applied to every computed delay so presentation always advances.
pub const MIN_DELAY_MS: u32 = 10;

/// Seconds one word stays on screen at `wpm`.
pub fn seconds_per_word(wpm: u32) -> f64 {
    60.0 / f64::from(wpm)
}

/// Pause category selected by the last visible character of `text`.
pub fn trailing_pause(text: &str) -> Option<PauseKind> {
    match text_utils::last_visible_char(text)? {
        '.' | '!' | '?' | ':' | ';' => Some(PauseKind::Punctuation),
        ',' => Some(PauseKind::Comma),
        _ => None,
    }
}

/// On-screen duration of `item` in whole milliseconds, never below [`MIN_DELAY_MS`].
pub fn delay_ms(item: &DisplayItem, config: &ReaderConfig) -> u32 {
    let (seconds, visible_chars) = match item {
        DisplayItem::Paragraph => (config.pause_paragraph, 0),
        DisplayItem::Words { text, word_count } => {
            let pause = trailing_pause(text).map_or(0.0, |kind| config.pause_seconds(kind));
            let reading = *word_count as f64 * seconds_per_word(config.wpm);
            (reading + pause, text_utils::visible_char_count(text))
        }
    };

    // Float to int casts saturate, so absurd configurations stay finite.
    let timed_ms = (seconds * 1000.0) as u32;
    let excess_chars = visible_chars.saturating_sub(config.word_length_threshold);
    let long_word_ms = u32::try_from(excess_chars)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.extra_ms_per_char);

    timed_ms.saturating_add(long_word_ms).max(MIN_DELAY_MS)
}

//! Shared text shaping for status lines and the pause-time context snippet.

use core::{fmt::Write, ops::Range};

use alloc::string::String;
use heapless::String as LabelString;

use crate::content::Token;

/// Tokens shown on either side of the focus in the context snippet.
pub const SNIPPET_CONTEXT_WORDS: usize = 7;
/// Character budget of the context snippet.
pub const SNIPPET_MAX_CHARS: usize = 130;
pub const LABEL_BYTES: usize = 32;

const PARAGRAPH_GLYPH: &str = "\u{b6}";
const FOCUS_OPEN: char = '\u{25b6}';
const FOCUS_CLOSE: char = '\u{25c0}';

/// Surrounding text for the tokens in `focus`, with the focus marked.
pub fn context_snippet(tokens: &[Token], focus: Range<usize>) -> String {
    if tokens.is_empty() {
        return String::new();
    }

    let focus_len = focus.end.saturating_sub(focus.start);
    let start = focus.start.saturating_sub(SNIPPET_CONTEXT_WORDS).min(tokens.len());
    let end = (focus.start + SNIPPET_CONTEXT_WORDS + focus_len).min(tokens.len());

    let mut out = String::new();
    for (idx, token) in tokens[start..end].iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }

        let word = match token {
            Token::Paragraph => PARAGRAPH_GLYPH,
            Token::Word(word) => word.as_str(),
        };
        if focus.contains(&(start + idx)) {
            out.push(FOCUS_OPEN);
            out.push_str(word);
            out.push(FOCUS_CLOSE);
        } else {
            out.push_str(word);
        }
    }

    truncate_snippet(out)
}

/// Cut `text` to [`SNIPPET_MAX_CHARS`], preferring a word boundary.
pub fn truncate_snippet(mut text: String) -> String {
    if text.chars().count() <= SNIPPET_MAX_CHARS {
        return text;
    }

    let keep = SNIPPET_MAX_CHARS - 3;
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(idx, _)| idx);
    match text[..cut].rfind(' ') {
        Some(space) => {
            text.truncate(space);
            text.push_str(" ...");
        }
        None => {
            text.truncate(cut);
            text.push_str("...");
        }
    }
    text
}

/// `"Block i / n"` for the 1-based position of `cursor`.
pub fn position_label(cursor: usize, total: usize, finished: bool) -> LabelString<LABEL_BYTES> {
    let mut out = LabelString::new();
    if total == 0 {
        return out;
    }

    let position = if finished {
        total
    } else {
        cursor.min(total - 1) + 1
    };
    let _ = write!(out, "Block {position} / {total}");
    out
}

/// `"300 WPM"`, suffixed with `" (paused)"` while paused.
pub fn status_label(wpm: u32, paused: bool) -> LabelString<LABEL_BYTES> {
    let mut out = LabelString::new();
    let _ = write!(out, "{wpm} WPM");
    if paused {
        let _ = out.push_str(" (paused)");
    }
    out
}

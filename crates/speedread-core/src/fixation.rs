//! Fixation point (ORP) lookup.

/// Character index to highlight in `word` at relative `position`.
///
/// `position` is clamped to `0.0..=1.0`; returns `None` for an empty word.
pub fn locate(word: &str, position: f64) -> Option<usize> {
    let len = word.chars().count();
    if len == 0 {
        return None;
    }

    let index = (len as f64 * position.clamp(0.0, 1.0)) as usize;
    Some(index.min(len - 1))
}

/// Split `word` around the character at `index` into `(before, pivot, after)`.
pub fn split_at_char(word: &str, index: usize) -> Option<(&str, &str, &str)> {
    let (start, pivot) = word.char_indices().nth(index)?;
    let end = start + pivot.len_utf8();
    Some((&word[..start], &word[start..end], &word[end..]))
}

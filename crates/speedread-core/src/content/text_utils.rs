/// Characters that close a sentence when they end a word.
const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', ':'];

/// Regex-style word character (`\w`).
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub(crate) fn ends_sentence(word: &str) -> bool {
    word.ends_with(SENTENCE_TERMINATORS)
}

/// Number of characters that are not ASCII spaces.
pub(crate) fn visible_char_count(text: &str) -> usize {
    text.chars().filter(|ch| *ch != ' ').count()
}

/// Last character after trimming trailing whitespace.
pub(crate) fn last_visible_char(text: &str) -> Option<char> {
    text.trim_end().chars().next_back()
}

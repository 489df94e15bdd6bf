//! Text segmentation for RSVP presentation.
//!
//! Raw text becomes a flat [`Token`] sequence, which is then grouped into
//! [`DisplayItem`]s. The [`ItemIndex`] remembers which tokens each item was
//! built from so the sequencer can seek by sentence.

mod chunk;
pub(crate) mod text_utils;
mod tokenize;


use alloc::string::String;

pub use chunk::{ItemIndex, build_items};
pub use tokenize::tokenize;

/// Placeholder that stands for a paragraph break in token and item text.
pub const PARAGRAPH_MARKER: &str = "__PARAGRAPH__";

/// One atomic unit of normalized text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// Non-empty run of non-whitespace characters.
    Word(String),
    /// Blank line in the source text.
    Paragraph,
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(word) => word,
            Self::Paragraph => PARAGRAPH_MARKER,
        }
    }

    pub const fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph)
    }

    /// Whether this token closes a sentence for seeking purposes.
    pub fn ends_sentence(&self) -> bool {
        match self {
            Self::Word(word) => text_utils::ends_sentence(word),
            Self::Paragraph => false,
        }
    }
}

/// Text shown at once during one timed step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisplayItem {
    /// One or more word tokens joined by single spaces.
    Words { text: String, word_count: usize },
    /// A paragraph break, never combined with words.
    Paragraph,
}

impl DisplayItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Words { text, .. } => text,
            Self::Paragraph => PARAGRAPH_MARKER,
        }
    }

    pub const fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph)
    }

    pub const fn word_count(&self) -> usize {
        match self {
            Self::Words { word_count, .. } => *word_count,
            Self::Paragraph => 0,
        }
    }
}

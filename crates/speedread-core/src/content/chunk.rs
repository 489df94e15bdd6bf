use core::ops::Range;

use alloc::{string::String, vec::Vec};
use log::debug;

use super::{DisplayItem, Token};

/// Maps each display item ordinal to the half-open token range it covers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ItemIndex {
    ranges: Vec<Range<usize>>,
}

impl ItemIndex {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Token range of the item at `ordinal`.
    pub fn range(&self, ordinal: usize) -> Option<Range<usize>> {
        self.ranges.get(ordinal).cloned()
    }

    /// Number of tokens covered by all items.
    pub fn token_count(&self) -> usize {
        self.ranges.last().map_or(0, |range| range.end)
    }

    /// Ordinal of the first item whose range contains or follows `token_index`.
    ///
    /// Returns [`Self::len`] when the token lies past the last item.
    pub fn item_for_token(&self, token_index: usize) -> usize {
        self.ranges.partition_point(|range| range.end <= token_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.ranges.iter().cloned()
    }
}

struct PendingGroup {
    text: String,
    words: usize,
    start: usize,
}

impl PendingGroup {
    const fn new() -> Self {
        Self {
            text: String::new(),
            words: 0,
            start: 0,
        }
    }

    fn push(&mut self, token_index: usize, word: &str) {
        if self.words == 0 {
            self.start = token_index;
        } else {
            self.text.push(' ');
        }
        self.text.push_str(word);
        self.words += 1;
    }

    fn flush(&mut self, end: usize, items: &mut Vec<DisplayItem>, ranges: &mut Vec<Range<usize>>) {
        if self.words == 0 {
            return;
        }

        items.push(DisplayItem::Words {
            text: core::mem::take(&mut self.text),
            word_count: self.words,
        });
        ranges.push(self.start..end);
        self.words = 0;
    }
}

/// Group tokens into display items of up to `chunk_size` words.
///
/// Paragraph tokens always flush the pending group and become a solitary item.
pub fn build_items(tokens: &[Token], chunk_size: usize) -> (Vec<DisplayItem>, ItemIndex) {
    let chunk_size = chunk_size.max(1);
    let mut items = Vec::new();
    let mut ranges = Vec::new();
    let mut group = PendingGroup::new();

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Paragraph => {
                group.flush(idx, &mut items, &mut ranges);
                items.push(DisplayItem::Paragraph);
                ranges.push(idx..idx + 1);
            }
            Token::Word(word) => {
                group.push(idx, word);
                if group.words >= chunk_size {
                    group.flush(idx + 1, &mut items, &mut ranges);
                }
            }
        }
    }
    group.flush(tokens.len(), &mut items, &mut ranges);

    debug!(
        "chunker: tokens={} chunk_size={} items={}",
        tokens.len(),
        chunk_size,
        items.len()
    );

    (items, ItemIndex { ranges })
}

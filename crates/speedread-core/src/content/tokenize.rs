use alloc::{format, string::String, vec::Vec};

use super::{PARAGRAPH_MARKER, Token, text_utils::is_word_char};

/// Abbreviations whose periods would otherwise read as sentence ends.
///
/// Patterns are lowercase and matched case-insensitively as whole words.
const ABBREVIATIONS: [(&str, &str); 7] = [
    ("z.b.", "z_B"),
    ("usw.", "usw"),
    ("u.a.", "u_a"),
    ("d.h.", "d_h"),
    ("o.ä.", "o_Ä"),
    ("etc.", "etc"),
    ("bzw.", "bzw"),
];

/// Normalize raw text and split it into word and paragraph tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let rewritten = rewrite_abbreviations(text);
    let normalized = normalize_breaks(&rewritten);

    normalized
        .split_whitespace()
        .map(|word| {
            if word == PARAGRAPH_MARKER {
                Token::Paragraph
            } else {
                Token::Word(word.into())
            }
        })
        .collect()
}

fn rewrite_abbreviations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    let mut rest = text;

    'scan: while let Some(ch) = rest.chars().next() {
        if !previous.is_some_and(is_word_char) {
            for (pattern, replacement) in ABBREVIATIONS {
                let Some(len) = match_ignore_case(rest, pattern) else {
                    continue;
                };
                if rest[len..].chars().next().is_some_and(is_word_char) {
                    continue;
                }

                out.push_str(replacement);
                previous = Some('.');
                rest = &rest[len..];
                continue 'scan;
            }
        }

        out.push(ch);
        previous = Some(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Byte length of the prefix of `text` matching `pattern` ignoring case.
fn match_ignore_case(text: &str, pattern: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in pattern.chars() {
        let (_, ch) = chars.next()?;
        if !ch.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }

    Some(chars.next().map_or(text.len(), |(idx, _)| idx))
}

fn normalize_breaks(text: &str) -> String {
    let paragraph = format!(" {PARAGRAPH_MARKER} ");

    text.replace("\r\n", "\n")
        .replace("\n\n", &paragraph)
        .replace('\n', " ")
        .replace('\u{2014}', " -- ")
        .replace('\u{2013}', " - ")
}

//! Whole-word filtering of regex hits.
//!
//! A hit counts only when the character right before it and the character right after
//! it are absent or are not word characters (Unicode alphanumeric or `_`).
//!
//! Rejected hits do not consume input: the search resumes one character after the
//! rejected start, so a valid hit overlapping a rejected one is still found.

use regex::{Match, Regex};

/// Word characters for boundary purposes.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true if `text[start..end]` is not glued to neighbouring word characters.
pub fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

/// Iterator over the whole-word hits of `regex` in `text`, left to right, non-overlapping.
pub struct WholeWordMatches<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    pos: usize,
}

impl<'r, 't> Iterator for WholeWordMatches<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let m = self.regex.find_at(self.text, self.pos)?;
            if m.is_empty() {
                return None;
            }
            if is_whole_word(self.text, m.start(), m.end()) {
                self.pos = m.end();
                return Some(m);
            }
            let first_len = self.text[m.start()..].chars().next().map_or(1, char::len_utf8);
            self.pos = m.start() + first_len;
        }
        None
    }
}

/// Finds whole-word hits of `regex` in `text`.
pub fn find_whole_words<'r, 't>(regex: &'r Regex, text: &'t str) -> WholeWordMatches<'r, 't> {
    WholeWordMatches { regex, text, pos: 0 }
}

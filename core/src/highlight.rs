//! Literal, case-insensitive match highlighting.
//!
//! The needle is never interpreted as a pattern: `c++`, `(a|b)` or `.*` only
//! match those exact characters.

use core::fmt;

use maud::{Markup, Render, html};

/// A run of text inside a [`Highlighted`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any match.
    Plain(&'a str),
    /// One occurrence of the needle, in the field's original casing.
    Marked(&'a str),
}

impl<'a> Segment<'a> {
    /// The text covered by this segment.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Marked(text) => text,
        }
    }
}

/// A field split into plain and marked segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Highlighted<'a> {
    /// Wraps `text` with no marks.
    #[must_use]
    pub fn plain(text: &'a str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Plain(text)]
        };
        Self { segments }
    }

    /// The segments in reading order.
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Number of marked occurrences.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Marked(_)))
            .count()
    }

    /// Whether at least one occurrence was marked.
    #[must_use]
    pub fn is_marked(&self) -> bool {
        self.marked_count() > 0
    }
}

impl fmt::Display for Highlighted<'_> {
    /// Writes the original text without markers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments
            .iter()
            .try_for_each(|segment| f.write_str(segment.text()))
    }
}

impl Render for Highlighted<'_> {
    fn render(&self) -> Markup {
        html! {
            @for segment in &self.segments {
                @match segment {
                    Segment::Plain(text) => { (text) }
                    Segment::Marked(text) => { mark { (text) } }
                }
            }
        }
    }
}

/// Marks every case-insensitive occurrence of `needle` in `text`.
///
/// Occurrences are found left to right and never overlap. An empty needle
/// leaves the text unmarked.
#[must_use]
pub fn highlight<'a>(text: &'a str, needle: &str) -> Highlighted<'a> {
    let needle = fold_case(needle);
    if needle.is_empty() {
        return Highlighted::plain(text);
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        if let Some(len) = match_len(&text[cursor..], &needle) {
            if cursor > plain_start {
                segments.push(Segment::Plain(&text[plain_start..cursor]));
            }
            segments.push(Segment::Marked(&text[cursor..cursor + len]));
            cursor += len;
            plain_start = cursor;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::Plain(&text[plain_start..]));
    }

    Highlighted { segments }
}

/// Lower-cases `text` one character at a time.
///
/// Queries, filtering and highlighting all fold through here so that an item
/// counted as a match always has an occurrence to mark.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `text` contains `needle` case-insensitively; `needle` must already be folded.
pub(crate) fn contains_folded(text: &str, needle: &str) -> bool {
    text.char_indices()
        .any(|(offset, _)| match_len(&text[offset..], needle).is_some())
}

/// Byte length of the prefix of `haystack` whose lowercase form equals `needle`.
///
/// Compares char by char so casing that changes byte widths still yields
/// boundaries inside `haystack`. A match never ends inside a character's
/// lowercase expansion.
fn match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut expected = needle.chars().peekable();
    for (offset, ch) in haystack.char_indices() {
        if expected.peek().is_none() {
            return Some(offset);
        }
        for lower in ch.to_lowercase() {
            match expected.next() {
                Some(want) if want == lower => {}
                _ => return None,
            }
        }
    }
    expected.peek().is_none().then_some(haystack.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked<'a>(h: &Highlighted<'a>) -> Vec<&'a str> {
        h.segments()
            .iter()
            .filter_map(|s| match s {
                Segment::Marked(t) => Some(*t),
                Segment::Plain(_) => None,
            })
            .collect()
    }

    #[test]
    fn marks_every_occurrence_preserving_case() {
        let h = highlight("Fission and fission", "FISSION");
        assert_eq!(marked(&h), vec!["Fission", "fission"]);
        assert_eq!(h.to_string(), "Fission and fission");
    }

    #[test]
    fn no_occurrence_is_unchanged() {
        let h = highlight("DNA repair mechanisms", "fission");
        assert!(!h.is_marked());
        assert_eq!(h.to_string(), "DNA repair mechanisms");
    }

    #[test]
    fn pattern_characters_are_literal() {
        let h = highlight("Notes on c++ and (a|b) groups", "(a|b)");
        assert_eq!(marked(&h), vec!["(a|b)"]);
        assert!(!highlight("anything", ".*").is_marked());
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let h = highlight("aaaa", "aa");
        assert_eq!(marked(&h), vec!["aa", "aa"]);
    }

    #[test]
    fn empty_needle_leaves_text_alone() {
        assert!(!highlight("text", "").is_marked());
        assert!(highlight("", "x").segments().is_empty());
    }

    #[test]
    fn multibyte_text_keeps_boundaries() {
        let h = highlight("Kernhülle der Zelle", "HÜLLE");
        assert_eq!(marked(&h), vec!["hülle"]);
    }

    #[test]
    fn final_sigma_folds_like_any_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert!(contains_folded("ΟΔΟΣ", &fold_case("ΟΔΟΣ")));
        assert_eq!(marked(&highlight("ΟΔΟΣ", "ΟΔΟΣ")), vec!["ΟΔΟΣ"]);
    }

    #[test]
    fn expanding_lowercase_is_contained() {
        assert!(contains_folded("İstanbul", &fold_case("İST")));
        assert!(!contains_folded("istanbul", &fold_case("İST")));
    }

    #[test]
    fn renders_mark_and_escapes() {
        let html = highlight("<b>Lamin</b> A", "lamin").render().into_string();
        assert_eq!(html, "&lt;b&gt;<mark>Lamin</mark>&lt;/b&gt; A");
    }
}

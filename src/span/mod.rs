// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Longest-match scanning of text against a [`UnicodeSet`](crate::UnicodeSet).
//!
//! A span starts at a byte offset of a `&str` and returns the byte offset where the run
//! described by a [`SpanCondition`] ends; a backward span returns where the run begins.
//!
//! Sets whose strings cannot extend a run beyond what their code points already cover are
//! scanned one `char` at a time. Otherwise the scan considers every string member that
//! matches at each reachable position.
//!
//! # Examples
//!
//! ```
//! use icu_unicodeset::{SpanCondition, UnicodeSet};
//!
//! let set: UnicodeSet = ["ab", "ba"].into_iter().collect();
//!
//! // "ab" is a member, the trailing "a" is not
//! assert_eq!(set.span("aba", 0, SpanCondition::Contained), 2);
//! // backwards, "ba" is matched and the leading "a" is left over
//! assert_eq!(set.span_back("aba", 3, SpanCondition::Contained), 1);
//! ```

mod codepoints;
mod strings;

pub(crate) use strings::StringSpan;

/// What kind of run a span covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanCondition {
    /// Code points that are not members, stopping before any member code point and
    /// before any position where a member string starts (or, backwards, ends).
    NotContained,
    /// The longest prefix (or suffix) that splits into any sequence of member code points
    /// and member strings.
    Contained,
    /// Like [`SpanCondition::Contained`], but taking the single longest member at each
    /// step without reconsidering earlier choices. Never longer than a `Contained` span.
    Simple,
}

impl SpanCondition {
    /// Whether the run consists of members rather than non-members
    pub(crate) fn spans_members(self) -> bool {
        !matches!(self, SpanCondition::NotContained)
    }
}

/// Scans forward from `start`, which must be a char boundary below `text.len()`.
///
/// Returns the end of the run and the number of set elements it consists of.
pub(crate) fn span(
    text: &str,
    start: usize,
    condition: SpanCondition,
    matcher: Option<&StringSpan>,
    with_count: bool,
    contains: impl Fn(char) -> bool,
) -> (usize, usize) {
    match matcher {
        Some(matcher) if with_count || matcher.needs_string_span() => {
            matcher.span(text, start, condition, &contains)
        }
        _ => codepoints::span(text, start, condition.spans_members(), &contains),
    }
}

/// Scans backward from `limit`, which must be a char boundary above zero.
///
/// Returns the start of the run and the number of set elements it consists of.
pub(crate) fn span_back(
    text: &str,
    limit: usize,
    condition: SpanCondition,
    matcher: Option<&StringSpan>,
    with_count: bool,
    contains: impl Fn(char) -> bool,
) -> (usize, usize) {
    match matcher {
        Some(matcher) if with_count || matcher.needs_string_span() => {
            matcher.span_back(text, limit, condition, &contains)
        }
        _ => codepoints::span_back(text, limit, condition.spans_members(), &contains),
    }
}

/// Clamps `index` to the text and moves it forward onto a char boundary
pub(crate) fn snap_forward(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Clamps `index` to the text and moves it backward onto a char boundary
pub(crate) fn snap_back(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::SpanCondition::{Contained, NotContained, Simple};
    use super::{snap_back, snap_forward, span, span_back, StringSpan};
    use crate::strings::StringMembers;

    fn is_lower(c: char) -> bool {
        c.is_ascii_lowercase()
    }

    #[test]
    fn test_snap() {
        let text = "a\u{00E9}b";
        assert_eq!(snap_forward(text, 2), 3);
        assert_eq!(snap_back(text, 2), 1);
        assert_eq!(snap_forward(text, 10), 4);
        assert_eq!(snap_back(text, 10), 4);
        assert_eq!(snap_back(text, 0), 0);
    }

    #[test]
    fn test_span_without_strings() {
        let text = "xyz12ab";
        assert_eq!(span(text, 0, Contained, None, false, is_lower), (3, 3));
        assert_eq!(span(text, 3, NotContained, None, false, is_lower), (5, 2));
        assert_eq!(span(text, 0, Simple, None, false, is_lower), (3, 3));
        assert_eq!(
            span_back(text, 7, Contained, None, false, is_lower),
            (5, 2)
        );
        assert_eq!(
            span_back(text, 5, NotContained, None, false, is_lower),
            (3, 2)
        );
    }

    #[test]
    fn test_span_irrelevant_strings_use_code_points() {
        let members = StringMembers::singleton("ab");
        let matcher = StringSpan::try_new(&members, is_lower).unwrap();
        assert!(!matcher.needs_string_span());
        // without a count the code point scan is enough
        assert_eq!(
            span("abab", 0, Contained, Some(&matcher), false, is_lower),
            (4, 4)
        );
        // counting prefers the two string elements
        assert_eq!(
            span("abab", 0, Contained, Some(&matcher), true, is_lower),
            (4, 2)
        );
    }
}

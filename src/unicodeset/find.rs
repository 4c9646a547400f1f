// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use alloc::string::String;

use super::UnicodeSet;
use crate::span;

impl UnicodeSet {
    /// Returns the end of the longest element that matches `text` at byte offset `offset`,
    /// or `None` if no element does.
    ///
    /// `offset` must lie on a char boundary. The empty string never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let set: UnicodeSet = ["a", "ab", "abc", "x"].into_iter().collect();
    ///
    /// assert_eq!(set.matches_at("abcd", 0), Some(3));
    /// assert_eq!(set.matches_at("abx", 0), Some(2));
    /// assert_eq!(set.matches_at("abx", 2), Some(3));
    /// assert_eq!(set.matches_at("abx", 1), None);
    /// ```
    pub fn matches_at(&self, text: &str, offset: usize) -> Option<usize> {
        let rest = text.get(offset..)?;
        let by_char = rest
            .chars()
            .next()
            .filter(|&c| self.contains_char(c))
            .map_or(0, char::len_utf8);
        let longest = self
            .strings
            .iter()
            .filter(|s| !s.is_empty() && rest.starts_with(s))
            .map(str::len)
            .fold(by_char, usize::max);
        (longest > 0).then_some(offset + longest)
    }

    /// Returns the byte offset of the first code point at or after `from_index` that is a
    /// member, or with `find_not` the first that is not; `text.len()` if there is none.
    ///
    /// Only code points are considered. `from_index` is moved forward onto a char boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let digits = UnicodeSet::from_range(0x30, 0x39).unwrap();
    ///
    /// assert_eq!(digits.find_in("ab12cd", 0, false), 2);
    /// assert_eq!(digits.find_in("ab12cd", 2, true), 4);
    /// assert_eq!(digits.find_in("abcd", 0, false), 4);
    /// ```
    pub fn find_in(&self, text: &str, from_index: usize, find_not: bool) -> usize {
        let from = span::snap_forward(text, from_index);
        let Some(rest) = text.get(from..) else {
            return text.len();
        };
        rest.char_indices()
            .find(|&(_, c)| self.contains_char(c) != find_not)
            .map_or(text.len(), |(i, _)| from + i)
    }

    /// Returns the byte offset of the last code point before `from_index` that is a member,
    /// or with `find_not` the last that is not; `None` if there is none.
    ///
    /// Only code points are considered. `from_index` is moved back onto a char boundary.
    pub fn find_last_in(&self, text: &str, from_index: usize, find_not: bool) -> Option<usize> {
        let limit = span::snap_back(text, from_index);
        text.get(..limit)?
            .char_indices()
            .rev()
            .find(|&(_, c)| self.contains_char(c) != find_not)
            .map(|(i, _)| i)
    }

    /// Returns `source` without its member code points, or with `matches == false` without
    /// its non-member code points.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let vowels = UnicodeSet::from_chars_of("aeiou");
    ///
    /// assert_eq!(vowels.strip_from("unicode", true), "ncd");
    /// assert_eq!(vowels.strip_from("unicode", false), "uioe");
    /// ```
    pub fn strip_from(&self, source: &str, matches: bool) -> String {
        source
            .chars()
            .filter(|&c| self.contains_char(c) != matches)
            .collect()
    }
}

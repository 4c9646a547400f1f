// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! The string members of a [`UnicodeSet`](crate::UnicodeSet).

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

/// Returns the only code point of `s`, if it has exactly one.
///
/// Such strings are members through the code point list, never through [`StringMembers`].
pub(crate) fn single_code_point(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Ordered set of the empty string and strings of two or more code points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct StringMembers {
    strings: BTreeSet<String>,
}

impl StringMembers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store holding just `s`
    pub(crate) fn singleton(s: &str) -> Self {
        let mut members = Self::new();
        members.insert(s);
        members
    }

    pub(crate) fn contains(&self, s: &str) -> bool {
        self.strings.contains(s)
    }

    pub(crate) fn insert(&mut self, s: &str) -> bool {
        debug_assert!(single_code_point(s).is_none());
        if self.strings.contains(s) {
            return false;
        }
        self.strings.insert(s.to_string())
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Whether some member other than the empty string exists
    pub(crate) fn has_nonempty(&self) -> bool {
        self.strings.iter().any(|s| !s.is_empty())
    }

    pub(crate) fn clear(&mut self) {
        self.strings.clear();
    }

    /// Members in ascending order
    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.strings.iter().map(String::as_str)
    }

    pub(crate) fn add_all(&mut self, other: &StringMembers) {
        self.strings.extend(other.strings.iter().cloned());
    }

    pub(crate) fn retain_all(&mut self, other: &StringMembers) {
        self.strings.retain(|s| other.strings.contains(s));
    }

    pub(crate) fn remove_all(&mut self, other: &StringMembers) {
        self.strings.retain(|s| !other.strings.contains(s));
    }

    pub(crate) fn complement_all(&mut self, other: &StringMembers) {
        for s in &other.strings {
            if !self.strings.remove(s) {
                self.strings.insert(s.clone());
            }
        }
    }

    pub(crate) fn contains_all(&self, other: &StringMembers) -> bool {
        self.strings.is_superset(&other.strings)
    }

    pub(crate) fn contains_none(&self, other: &StringMembers) -> bool {
        self.strings.is_disjoint(&other.strings)
    }

    /// Checks whether `text` splits into a sequence of elements, each a code point for which
    /// `contains_char` holds or a non-empty member string.
    ///
    /// Every split point reachable from the start is visited once, so ambiguous members
    /// cannot cause exponential backtracking.
    pub(crate) fn can_partition(&self, text: &str, contains_char: impl Fn(char) -> bool) -> bool {
        let mut visited = vec![false; text.len() + 1];
        let mut pending: Vec<usize> = vec![0];
        while let Some(pos) = pending.pop() {
            if pos == text.len() {
                return true;
            }
            match visited.get_mut(pos) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }
            let Some(rest) = text.get(pos..) else {
                continue;
            };
            for s in self.iter().filter(|s| !s.is_empty()) {
                if rest.starts_with(s) {
                    pending.push(pos + s.len());
                }
            }
            // pushed last so it is explored first
            if let Some(c) = rest.chars().next() {
                if contains_char(c) {
                    pending.push(pos + c.len_utf8());
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{single_code_point, StringMembers};

    fn members(strings: &[&str]) -> StringMembers {
        let mut members = StringMembers::new();
        for s in strings {
            members.insert(s);
        }
        members
    }

    #[test]
    fn test_single_code_point() {
        assert_eq!(single_code_point("a"), Some('a'));
        assert_eq!(single_code_point("\u{1F600}"), Some('\u{1F600}'));
        assert_eq!(single_code_point(""), None);
        assert_eq!(single_code_point("ab"), None);
    }

    #[test]
    fn test_string_members_ordered() {
        let set = members(&["zz", "", "ab", "abc", "ab"]);
        assert_eq!(set.len(), 4);
        let ordered: Vec<&str> = set.iter().collect();
        assert_eq!(ordered, ["", "ab", "abc", "zz"]);
        assert!(set.contains(""));
        assert!(set.has_nonempty());
        assert!(!members(&[""]).has_nonempty());
    }

    #[test]
    fn test_string_members_algebra() {
        let a = members(&["ab", "cd", "ef"]);
        let b = members(&["cd", "gh"]);

        let mut union = a.clone();
        union.add_all(&b);
        assert_eq!(union, members(&["ab", "cd", "ef", "gh"]));

        let mut intersection = a.clone();
        intersection.retain_all(&b);
        assert_eq!(intersection, members(&["cd"]));

        let mut difference = a.clone();
        difference.remove_all(&b);
        assert_eq!(difference, members(&["ab", "ef"]));

        let mut symmetric = a.clone();
        symmetric.complement_all(&b);
        assert_eq!(symmetric, members(&["ab", "ef", "gh"]));

        assert!(union.contains_all(&a));
        assert!(difference.contains_none(&b));
    }

    #[test]
    fn test_can_partition_needs_backtracking() {
        // greedy "bcd" leaves "e" behind, "bc" + "de" covers everything
        let set = members(&["bc", "bcd", "de"]);
        assert!(set.can_partition("bcde", |_| false));
        assert!(!set.can_partition("bcdx", |_| false));
    }

    #[test]
    fn test_can_partition_mixes_code_points() {
        let set = members(&["ch"]);
        let is_vowel = |c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');
        assert!(set.can_partition("chachu", is_vowel));
        assert!(!set.can_partition("chaco", is_vowel));
        assert!(set.can_partition("", is_vowel));
    }

    #[test]
    fn test_can_partition_ambiguous_is_linear() {
        let set = members(&["aa", "aaa"]);
        let text = "a".repeat(2001) + "b";
        assert!(!set.can_partition(&text, |_| false));
        assert!(set.can_partition(&text[..2001], |_| false));
    }
}

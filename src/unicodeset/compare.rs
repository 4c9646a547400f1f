// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use core::cmp::Ordering;
use core::iter;

use super::{SetElement, UnicodeSet};

/// How [`UnicodeSet::compare_with()`] orders two sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ComparisonStyle {
    /// Sets with fewer elements first, then [`ComparisonStyle::Lexicographic`]
    #[default]
    ShorterFirst,
    /// By the first element that differs, in iteration order
    Lexicographic,
    /// Sets with more elements first, then [`ComparisonStyle::Lexicographic`]
    LongerFirst,
}

impl UnicodeSet {
    /// Compares two sets in the given style.
    ///
    /// The lexicographic part walks both sets in [`UnicodeSet::iter()`] order and decides at
    /// the first position where the elements differ. A code point compares against a string
    /// as the one-code-point string it stands for. A set that runs out of elements first
    /// sorts after the other one, so a longer run of code points comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use icu_unicodeset::{ComparisonStyle, UnicodeSet};
    ///
    /// let abc = UnicodeSet::from_chars_of("abc");
    /// let bc = UnicodeSet::from_chars_of("bc");
    /// let ab = UnicodeSet::from_chars_of("ab");
    ///
    /// assert_eq!(bc.compare_with(&abc, ComparisonStyle::ShorterFirst), Ordering::Less);
    /// assert_eq!(bc.compare_with(&abc, ComparisonStyle::Lexicographic), Ordering::Greater);
    /// assert_eq!(abc.compare_with(&ab, ComparisonStyle::Lexicographic), Ordering::Less);
    /// assert_eq!(abc.compare_with(&ab, ComparisonStyle::LongerFirst), Ordering::Less);
    /// ```
    pub fn compare_with(&self, other: &UnicodeSet, style: ComparisonStyle) -> Ordering {
        let by_size = match style {
            ComparisonStyle::ShorterFirst => self.size().cmp(&other.size()),
            ComparisonStyle::LongerFirst => other.size().cmp(&self.size()),
            ComparisonStyle::Lexicographic => Ordering::Equal,
        };
        by_size.then_with(|| self.compare_elements(other))
    }

    fn compare_elements(&self, other: &UnicodeSet) -> Ordering {
        // skip the ranges both sets share, then resume inside the first range that differs
        let shared = self
            .code_points
            .iter_ranges()
            .zip(other.code_points.iter_ranges())
            .take_while(|(ours, theirs)| ours == theirs)
            .count();
        let from = match (self.range_start(shared), other.range_start(shared)) {
            (Some(ours), Some(theirs)) if ours == theirs => {
                let ours = self.range_end(shared).unwrap_or(ours);
                let theirs = other.range_end(shared).unwrap_or(theirs);
                ours.min(theirs) + 1
            }
            _ => 0,
        };
        let mut ours = self.elements_from(shared, from);
        let mut theirs = other.elements_from(shared, from);
        loop {
            match (ours.next(), theirs.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Greater,
                (Some(_), None) => return Ordering::Less,
                (Some(a), Some(b)) => match compare_element(a, b) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
            }
        }
    }

    /// Elements from the range at `range` on, skipping its code points below `from`
    fn elements_from(&self, range: usize, from: u32) -> impl Iterator<Item = SetElement<'_>> {
        self.code_points
            .iter_ranges()
            .skip(range)
            .flat_map(move |r| (*r.start()).max(from)..=*r.end())
            .map(SetElement::CodePoint)
            .chain(self.strings.iter().map(SetElement::String))
    }
}

fn compare_element(a: SetElement<'_>, b: SetElement<'_>) -> Ordering {
    match (a, b) {
        (SetElement::CodePoint(a), SetElement::CodePoint(b)) => a.cmp(&b),
        (SetElement::String(a), SetElement::String(b)) => a.cmp(b),
        (SetElement::CodePoint(a), SetElement::String(b)) => {
            iter::once(a).cmp(b.chars().map(u32::from))
        }
        (SetElement::String(a), SetElement::CodePoint(b)) => {
            a.chars().map(u32::from).cmp(iter::once(b))
        }
    }
}

impl Ord for UnicodeSet {
    /// [`ComparisonStyle::ShorterFirst`]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_with(other, ComparisonStyle::ShorterFirst)
    }
}

impl PartialOrd for UnicodeSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::ComparisonStyle::{Lexicographic, LongerFirst, ShorterFirst};
    use crate::UnicodeSet;
    use core::cmp::Ordering;

    fn set(elements: &[&str]) -> UnicodeSet {
        elements.iter().copied().collect()
    }

    #[test]
    fn test_compare_equal_sets() {
        let a = set(&["a", "b", "ch"]);
        let mut b = set(&["ch", "b", "a"]);
        b.freeze();
        for style in [ShorterFirst, Lexicographic, LongerFirst] {
            assert_eq!(a.compare_with(&b, style), Ordering::Equal);
        }
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_compare_by_size() {
        let small = set(&["x"]);
        let large = set(&["a", "b"]);
        assert_eq!(small.compare_with(&large, ShorterFirst), Ordering::Less);
        assert_eq!(small.compare_with(&large, LongerFirst), Ordering::Greater);
        assert_eq!(small.compare_with(&large, Lexicographic), Ordering::Greater);
        assert!(small < large);
    }

    #[test]
    fn test_compare_inside_a_long_range() {
        let a = UnicodeSet::from_range(0x0, 0xFFFFF).unwrap();
        let mut b = a.clone();
        b.remove(0xFFFF0).unwrap();
        // a continues with U+FFFF0 where b jumps to U+FFFF1
        assert_eq!(a.compare_with(&b, Lexicographic), Ordering::Less);
        assert_eq!(b.compare_with(&a, Lexicographic), Ordering::Greater);

        let mut c = a.clone();
        c.add(0x10FFFF).unwrap();
        // a has run out where c goes on
        assert_eq!(a.compare_with(&c, Lexicographic), Ordering::Greater);
    }

    #[test]
    fn test_compare_code_points_against_strings() {
        // after "a", one set continues with "b", the other with "ab"
        let with_char = set(&["a", "b"]);
        let with_string = set(&["a", "ab"]);
        assert_eq!(
            with_char.compare_with(&with_string, Lexicographic),
            Ordering::Greater
        );
        assert_eq!(
            with_string.compare_with(&with_char, Lexicographic),
            Ordering::Less
        );

        let empty_string = set(&["a", ""]);
        assert_eq!(
            empty_string.compare_with(&with_char, Lexicographic),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_strings_only() {
        let a = set(&["ab", "cd"]);
        let b = set(&["ab", "ce"]);
        assert_eq!(a.compare_with(&b, Lexicographic), Ordering::Less);
        assert_eq!(b.compare_with(&a, ShorterFirst), Ordering::Greater);
    }

    #[test]
    fn test_sort_sets() {
        let mut sets = [set(&["b"]), set(&["a", "b"]), set(&["a"]), set(&[])];
        sets.sort();
        assert_eq!(sets, [set(&[]), set(&["a"]), set(&["b"]), set(&["a", "b"])]);
    }
}

// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use core::ops::RangeInclusive;

use super::UnicodeSet;

/// One element of a [`UnicodeSet`], as yielded by [`UnicodeSet::iter()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SetElement<'a> {
    /// A code point member, possibly a surrogate
    CodePoint(u32),
    /// A string member: the empty string or two and more code points
    String(&'a str),
}

impl UnicodeSet {
    /// Yields the code point ranges in ascending order
    pub fn iter_ranges(&self) -> impl ExactSizeIterator<Item = RangeInclusive<u32>> + '_ {
        self.code_points.iter_ranges()
    }

    /// Yields the code point members as [`char`]s in ascending order, skipping surrogates
    pub fn iter_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.code_points.iter_chars()
    }

    /// Yields the string members in ascending order
    pub fn strings(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.strings.iter()
    }

    /// Yields every element: first each code point in ascending order, then each string
    /// in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::{SetElement, UnicodeSet};
    ///
    /// let set: UnicodeSet = ["b", "ch", "a", ""].into_iter().collect();
    /// let elements: Vec<SetElement> = set.iter().collect();
    /// assert_eq!(
    ///     elements,
    ///     [
    ///         SetElement::CodePoint(0x61),
    ///         SetElement::CodePoint(0x62),
    ///         SetElement::String(""),
    ///         SetElement::String("ch"),
    ///     ]
    /// );
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = SetElement<'_>> + '_ {
        self.code_points
            .iter_code_points()
            .map(SetElement::CodePoint)
            .chain(self.strings.iter().map(SetElement::String))
    }
}

impl<'a> FromIterator<&'a str> for UnicodeSet {
    /// Each item becomes one element, a code point if it has exactly one
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = UnicodeSet::new();
        for s in iter {
            set.insert_str(s);
        }
        set
    }
}

// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use alloc::vec::Vec;

use super::UnicodeSet;
use crate::UnicodeSetError;

impl UnicodeSet {
    /// Fills each gap between two ranges of the set that lies entirely in `dont_care`.
    ///
    /// Gaps before the first range and after the last one are left alone, as are strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let mut set = UnicodeSet::from_chars_of("ace");
    /// let dont_care = UnicodeSet::from_chars_of("b");
    /// set.add_bridges(&dont_care).unwrap();
    ///
    /// assert_eq!(set.iter_ranges().collect::<Vec<_>>(), [0x61..=0x63, 0x65..=0x65]);
    /// ```
    pub fn add_bridges(&mut self, dont_care: &UnicodeSet) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        let ranges: Vec<_> = self.code_points.iter_ranges().collect();
        let gaps = ranges
            .windows(2)
            .filter_map(|pair| Some((*pair.first()?.end() + 1, *pair.get(1)?.start() - 1)));
        for (start, end) in gaps {
            if dont_care.code_points.contains_range(start, end) {
                self.code_points.add_range(start, end);
            }
        }
        Ok(self)
    }

    /// Adds each item as one element
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let mut set = UnicodeSet::new();
    /// set.add_strs(["a", "ch", ""]).unwrap();
    ///
    /// assert!(set.contains_char('a'));
    /// assert_eq!(set.strings().collect::<Vec<_>>(), ["", "ch"]);
    /// ```
    pub fn add_strs<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a str>,
    ) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        for s in items {
            self.insert_str(s);
        }
        Ok(self)
    }

    /// Removes each item
    pub fn remove_strs<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a str>,
    ) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.remove_all(&items.into_iter().collect())
    }

    /// Keeps only the elements that are among the items
    pub fn retain_strs<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a str>,
    ) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.retain_all(&items.into_iter().collect())
    }

    /// Checks whether every item is an element of the set; true for no items
    pub fn contains_all_strs<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> bool {
        items.into_iter().all(|s| self.contains_str(s))
    }

    /// Checks whether no item is an element of the set
    pub fn contains_none_strs<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> bool {
        !self.contains_some_strs(items)
    }

    /// Checks whether some item is an element of the set
    pub fn contains_some_strs<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> bool {
        items.into_iter().any(|s| self.contains_str(s))
    }
}

#[cfg(test)]
mod tests {
    use crate::{UnicodeSet, UnicodeSetError};

    const NONE: [&str; 0] = [];

    fn ranges(set: &UnicodeSet) -> Vec<(u32, u32)> {
        set.iter_ranges().map(|r| (*r.start(), *r.end())).collect()
    }

    #[test]
    fn test_add_bridges() {
        let mut set = UnicodeSet::from_range(0x10, 0x1F).unwrap();
        set.add_range(0x30, 0x3F).unwrap();
        set.add_range(0x50, 0x5F).unwrap();
        set.add_str("ch").unwrap();
        // fills the first gap but only part of the second
        let mut dont_care = UnicodeSet::from_range(0x0, 0x2F).unwrap();
        dont_care.add_range(0x40, 0x47).unwrap();
        dont_care.add_range(0x60, 0x10FFFF).unwrap();

        set.add_bridges(&dont_care).unwrap();
        assert_eq!(ranges(&set), [(0x10, 0x3F), (0x50, 0x5F)]);
        assert_eq!(set.strings().collect::<Vec<_>>(), ["ch"]);
    }

    #[test]
    fn test_add_bridges_leaves_outer_gaps() {
        let mut set = UnicodeSet::from_range(0x61, 0x7A).unwrap();
        set.add_bridges(&UnicodeSet::all_code_points()).unwrap();
        assert_eq!(ranges(&set), [(0x61, 0x7A)]);

        let mut set = UnicodeSet::from_chars_of("az");
        set.add(0x10FFFF).unwrap();
        set.add_bridges(&UnicodeSet::all_code_points()).unwrap();
        assert_eq!(ranges(&set), [(0x61, 0x10FFFF)]);

        let mut empty = UnicodeSet::new();
        empty.add_bridges(&UnicodeSet::all_code_points()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_add_remove_retain_strs() {
        let mut set = UnicodeSet::new();
        set.add_strs(["a", "b", "ch", "ll"]).unwrap();
        assert_eq!(set.size(), 4);

        set.remove_strs(["b", "ll", "zz"]).unwrap();
        assert_eq!(ranges(&set), [(0x61, 0x61)]);
        assert_eq!(set.strings().collect::<Vec<_>>(), ["ch"]);

        set.add_strs(vec!["x", "rr"]).unwrap();
        set.retain_strs(["ch", "x", "q"]).unwrap();
        assert_eq!(ranges(&set), [(0x78, 0x78)]);
        assert_eq!(set.strings().collect::<Vec<_>>(), ["ch"]);

        set.retain_strs(NONE).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains_strs() {
        let set: UnicodeSet = ["a", "b", "ch"].into_iter().collect();
        assert!(set.contains_all_strs(["a", "ch"]));
        assert!(!set.contains_all_strs(["a", "c"]));
        assert!(set.contains_all_strs(NONE));

        assert!(set.contains_none_strs(["c", "h", "abc"]));
        assert!(!set.contains_none_strs(["c", "b"]));
        assert!(set.contains_none_strs(NONE));

        assert!(set.contains_some_strs(["zz", "ch"]));
        assert!(!set.contains_some_strs(["zz"]));
        assert!(!set.contains_some_strs(NONE));
    }

    #[test]
    fn test_strs_on_frozen_set() {
        let mut set = UnicodeSet::from_chars_of("ab").into_frozen();
        assert_eq!(
            set.add_strs(["c"]).unwrap_err(),
            UnicodeSetError::ImmutableSet
        );
        assert_eq!(
            set.retain_strs(["a"]).unwrap_err(),
            UnicodeSetError::ImmutableSet
        );
        assert_eq!(
            set.add_bridges(&UnicodeSet::new()).unwrap_err(),
            UnicodeSetError::ImmutableSet
        );
        assert!(set.contains_all_strs(["a", "b"]));
        assert_eq!(set.size(), 2);
    }
}

// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use alloc::vec;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use super::merge::{merge, MergeRule, Polarity};
use super::utils::is_valid_inversion_list;
use super::{HIGH, INITIAL_CAPACITY, MAX_VALUE, MIN_VALUE};
use crate::UnicodeSetError;

/// The code point members of a [`UnicodeSet`](crate::UnicodeSet), as an inversion list.
///
/// Read-only from outside the crate; obtain one through
/// [`UnicodeSet::code_points()`](crate::UnicodeSet::code_points).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeList {
    // Strictly ascending, with values <= HIGH, always terminated by HIGH
    list: Vec<u32>,
}

impl Default for RangeList {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeList {
    /// Returns an empty [`RangeList`]
    pub fn new() -> Self {
        let mut list = Vec::with_capacity(INITIAL_CAPACITY);
        list.push(HIGH);
        Self { list }
    }

    /// Returns a [`RangeList`] containing every code point
    pub fn all() -> Self {
        Self {
            list: vec![MIN_VALUE, HIGH],
        }
    }

    /// Returns a [`RangeList`] from an inversion list without the trailing sentinel,
    /// in the form used by `CodePointInversionList`: an even-length ascending list
    /// of alternating range starts and exclusive range ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::rangelist::RangeList;
    ///
    /// let list = RangeList::try_from_inversion_list(&[0x41, 0x44, 0x45, 0x46]).unwrap();
    /// assert_eq!(list.boundaries(), &[0x41, 0x44, 0x45, 0x46, 0x110000]);
    /// assert!(RangeList::try_from_inversion_list(&[0x41]).is_err());
    /// ```
    pub fn try_from_inversion_list(inv_list: &[u32]) -> Result<Self, UnicodeSetError> {
        if !is_valid_inversion_list(inv_list) {
            return Err(UnicodeSetError::InvalidInversionList);
        }
        let mut list = Vec::with_capacity(inv_list.len() + 1);
        list.extend_from_slice(inv_list);
        // a last range running to the end already ends in the sentinel
        if list.last() != Some(&HIGH) {
            list.push(HIGH);
        }
        Ok(Self { list })
    }

    /// Returns the stored boundaries, including the trailing `0x110000` sentinel
    pub fn boundaries(&self) -> &[u32] {
        &self.list
    }

    /// Returns the inversion list without the sentinel, as an even-length list
    ///
    /// This is the inverse of [`RangeList::try_from_inversion_list()`].
    pub fn to_inversion_list_vec(&self) -> Vec<u32> {
        let mut inv_list = self.list.clone();
        if inv_list.len() % 2 == 1 {
            inv_list.pop();
        }
        inv_list
    }

    /// Returns the smallest index `i` such that `c < boundaries()[i]`.
    ///
    /// `c` is a member exactly when the result is odd. Values above `0x10FFFF` resolve
    /// to the index of the sentinel.
    pub fn find_boundary(&self, c: u32) -> usize {
        let len = self.list.len();
        if self.list.first().is_none_or(|&first| c < first) {
            return 0;
        }
        // appending in ascending order always lands here
        if len >= 2 && self.list.get(len - 2).is_some_and(|&b| c >= b) {
            return len - 1;
        }
        self.list.partition_point(|&b| b <= c).min(len - 1)
    }

    /// Checks whether the code point is in the list; values above `0x10FFFF` never are
    pub fn contains(&self, c: u32) -> bool {
        c <= MAX_VALUE && self.find_boundary(c) & 1 == 1
    }

    /// Checks whether the character is in the list
    pub fn contains_char(&self, c: char) -> bool {
        self.find_boundary(c as u32) & 1 == 1
    }

    /// Checks whether every code point of `start..=end` is in the list, which holds
    /// exactly when a single stored range covers it.
    pub fn contains_range(&self, start: u32, end: u32) -> bool {
        let i = self.find_boundary(start);
        i & 1 == 1 && self.list.get(i).is_some_and(|&limit| end < limit)
    }

    /// Checks whether no code point of `start..=end` is in the list
    pub fn contains_none_range(&self, start: u32, end: u32) -> bool {
        let i = self.find_boundary(start);
        i & 1 == 0 && self.list.get(i).is_some_and(|&limit| end < limit)
    }

    /// Checks whether every code point of `other` is in this list
    pub fn contains_all(&self, other: &RangeList) -> bool {
        let mut ours = self.pairs();
        let mut current = ours.next();
        for (start, limit) in other.pairs() {
            loop {
                match current {
                    None => return false,
                    Some((_, our_limit)) if start >= our_limit => current = ours.next(),
                    // stored ranges never touch, so a covered range lies within one of ours
                    Some((our_start, our_limit)) => {
                        if start < our_start || limit > our_limit {
                            return false;
                        }
                        break;
                    }
                }
            }
        }
        true
    }

    /// Checks whether this list and `other` share no code point
    pub fn contains_none(&self, other: &RangeList) -> bool {
        let mut ours = self.pairs();
        let mut theirs = other.pairs();
        let (mut a, mut b) = (ours.next(), theirs.next());
        while let (Some((a_start, a_limit)), Some((b_start, b_limit))) = (a, b) {
            if a_limit <= b_start {
                a = ours.next();
            } else if b_limit <= a_start {
                b = theirs.next();
            } else {
                return false;
            }
        }
        true
    }

    /// Returns the number of ranges
    pub fn range_count(&self) -> usize {
        self.list.len() / 2
    }

    /// Returns the first code point of the range at `index`
    pub fn range_start(&self, index: usize) -> Option<u32> {
        if index >= self.range_count() {
            return None;
        }
        self.list.get(2 * index).copied()
    }

    /// Returns the last code point of the range at `index`
    pub fn range_end(&self, index: usize) -> Option<u32> {
        if index >= self.range_count() {
            return None;
        }
        self.list.get(2 * index + 1).map(|&limit| limit - 1)
    }

    /// Yields the ranges of the list as [`RangeInclusive`], in ascending order
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::rangelist::RangeList;
    ///
    /// let list = RangeList::try_from_inversion_list(&[0x41, 0x44, 0x45, 0x46]).unwrap();
    /// let mut ranges = list.iter_ranges();
    /// assert_eq!(ranges.len(), 2);
    /// assert_eq!(Some(0x41..=0x43), ranges.next());
    /// assert_eq!(Some(0x45..=0x45), ranges.next());
    /// assert_eq!(None, ranges.next());
    /// ```
    pub fn iter_ranges(&self) -> impl ExactSizeIterator<Item = RangeInclusive<u32>> + '_ {
        self.pairs().map(|(start, limit)| start..=(limit - 1))
    }

    /// Yields every member as a [`char`], skipping surrogate code points
    pub fn iter_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.pairs()
            .flat_map(|(start, limit)| start..limit)
            .filter_map(char::from_u32)
    }

    /// Yields every member as a code point value, surrogates included
    pub fn iter_code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.pairs().flat_map(|(start, limit)| start..limit)
    }

    /// Returns the number of code points in the list
    pub fn size(&self) -> usize {
        self.pairs()
            .map(|(start, limit)| (limit - start) as usize)
            .sum()
    }

    /// Returns whether the list holds no code point
    pub fn is_empty(&self) -> bool {
        self.list.len() == 1
    }

    /// Returns the rank of `c` among the members, or `None` if it is not a member
    pub fn index_of(&self, c: u32) -> Option<usize> {
        let mut rank = 0;
        for (start, limit) in self.pairs() {
            if c < limit {
                return (c >= start).then(|| rank + (c - start) as usize);
            }
            rank += (limit - start) as usize;
        }
        None
    }

    /// Returns the member of rank `index`, the inverse of [`RangeList::index_of()`]
    pub fn code_point_at(&self, index: usize) -> Option<u32> {
        let mut remaining = index;
        for (start, limit) in self.pairs() {
            let len = (limit - start) as usize;
            if remaining < len {
                // remaining < 0x110000
                return Some(start + remaining as u32);
            }
            remaining -= len;
        }
        None
    }

    /// (start, exclusive limit) of every range
    #[allow(clippy::indexing_slicing)] // chunks_exact
    fn pairs(&self) -> impl ExactSizeIterator<Item = (u32, u32)> + '_ {
        self.list.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    // Mutators. Arguments are validated by the caller.

    /// Adds one code point, extending or joining neighboring ranges in place when it
    /// touches them.
    #[allow(clippy::indexing_slicing)] // i < len by find_boundary; i - 1 guarded
    pub(crate) fn add_code_point(&mut self, c: u32) {
        let i = self.find_boundary(c);
        if i & 1 == 1 {
            return;
        }
        if c + 1 == self.list[i] {
            // c sits right below the start of range i / 2, or below the sentinel
            self.list[i] = c;
            if c == MAX_VALUE {
                self.list.push(HIGH);
            }
            if i > 0 && c == self.list[i - 1] {
                // the previous range now touches this one
                self.list.drain(i - 1..=i);
            }
        } else if i > 0 && c == self.list[i - 1] {
            // c sits right after the end of the previous range
            self.list[i - 1] = c + 1;
        } else {
            self.list.splice(i..i, [c, c + 1]);
        }
    }

    /// Adds `start..=end`; an empty range adds nothing.
    #[allow(clippy::indexing_slicing)] // len is odd, so len >= 1
    pub(crate) fn add_range(&mut self, start: u32, end: u32) {
        if start > end {
            return;
        }
        if start == end {
            self.add_code_point(start);
            return;
        }
        let limit = end + 1;
        let len = self.list.len();
        // appending after the last range of a list whose last range is closed
        if len % 2 == 1 {
            let last_limit = len.checked_sub(2).map(|i| self.list[i]);
            if last_limit.is_none_or(|last| last <= start) {
                if last_limit == Some(start) {
                    self.list[len - 2] = limit;
                    if limit == HIGH {
                        self.list.pop();
                    }
                } else {
                    self.list[len - 1] = start;
                    if limit < HIGH {
                        self.list.push(limit);
                    }
                    self.list.push(HIGH);
                }
                return;
            }
        }
        self.union_boundaries(&range_operand(start, end));
    }

    /// Removes `start..=end`; an empty range removes nothing.
    pub(crate) fn remove_range(&mut self, start: u32, end: u32) {
        if start <= end {
            self.remove_boundaries(&range_operand(start, end));
        }
    }

    /// Keeps only `start..=end`; an empty range clears the list.
    pub(crate) fn retain_range(&mut self, start: u32, end: u32) {
        if start <= end {
            self.retain_boundaries(&range_operand(start, end));
        } else {
            self.clear();
        }
    }

    /// Flips membership of every code point in `start..=end`.
    pub(crate) fn complement_range(&mut self, start: u32, end: u32) {
        if start <= end {
            self.xor_boundaries(&range_operand(start, end));
        }
    }

    pub(crate) fn add_all(&mut self, other: &RangeList) {
        self.union_boundaries(&other.list);
    }

    pub(crate) fn retain_all(&mut self, other: &RangeList) {
        self.retain_boundaries(&other.list);
    }

    pub(crate) fn remove_all(&mut self, other: &RangeList) {
        self.remove_boundaries(&other.list);
    }

    pub(crate) fn complement_all(&mut self, other: &RangeList) {
        self.xor_boundaries(&other.list);
    }

    /// Complements the list across the whole code point space
    pub(crate) fn complement(&mut self) {
        if self.list.first() == Some(&MIN_VALUE) {
            self.list.remove(0);
        } else {
            self.list.insert(0, MIN_VALUE);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.list.clear();
        self.list.push(HIGH);
    }

    /// Releases unused capacity
    pub(crate) fn compact(&mut self) {
        self.list.shrink_to_fit();
    }

    fn union_boundaries(&mut self, other: &[u32]) {
        self.list = merge(&self.list, other, Polarity::NONE, MergeRule::Union);
    }

    fn retain_boundaries(&mut self, other: &[u32]) {
        self.list = merge(&self.list, other, Polarity::NONE, MergeRule::Intersection);
    }

    fn remove_boundaries(&mut self, other: &[u32]) {
        self.list = merge(
            &self.list,
            other,
            Polarity::COMPLEMENT_OTHER,
            MergeRule::Intersection,
        );
    }

    fn xor_boundaries(&mut self, other: &[u32]) {
        self.list = merge(
            &self.list,
            other,
            Polarity::NONE,
            MergeRule::SymmetricDifference,
        );
    }
}

/// Boundaries of the one-range list `start..=end`; the merge stops at the first sentinel
/// so a range ending at `MAX_VALUE` may carry two.
fn range_operand(start: u32, end: u32) -> [u32; 3] {
    [start, end + 1, HIGH]
}

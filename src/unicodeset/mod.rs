// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

mod bulk;
mod compare;
mod find;
mod iter;

pub use compare::ComparisonStyle;
pub use iter::SetElement;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::filter::CodePointFilter;
use crate::frozen::{FrozenView, SetState};
use crate::rangelist::{check_code_point, check_range, RangeList, MAX_VALUE};
use crate::span::{self, SpanCondition, StringSpan};
use crate::strings::{single_code_point, StringMembers};
use crate::UnicodeSetError;

/// A set of Unicode code points and strings.
///
/// Code points are stored as an inversion list ([`RangeList`]); strings of zero or two and
/// more code points are kept in a separate sorted store. A string of exactly one code point
/// is always treated as that code point.
///
/// A set starts out mutable. [`UnicodeSet::freeze()`] makes it immutable for good and
/// precomputes lookup accelerators; from then on every mutator returns
/// [`UnicodeSetError::ImmutableSet`] and the set can be shared across threads for reading.
///
/// Mutators validate their arguments before changing anything, so an `Err` always leaves the
/// set as it was. They return `&mut Self` on success, so calls can be chained with `?`.
///
/// # Examples
///
/// ```
/// use icu_unicodeset::{UnicodeSet, UnicodeSetError};
///
/// let mut set = UnicodeSet::new();
/// set.add_range(0x61, 0x7A)?.add_str("ng")?.remove(0x71)?;
///
/// assert_eq!(set.size(), 26);
/// assert!(set.contains(0x61)?);
/// assert!(!set.contains(0x71)?);
/// assert!(set.contains_str("ng"));
/// assert_eq!(set.contains(0x110000), Err(UnicodeSetError::InvalidCodePoint(0x110000)));
/// # Ok::<(), UnicodeSetError>(())
/// ```
#[derive(Clone)]
pub struct UnicodeSet {
    code_points: RangeList,
    strings: StringMembers,
    state: SetState,
}

impl Default for UnicodeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicodeSet {
    /// Returns an empty, mutable [`UnicodeSet`]
    pub fn new() -> Self {
        Self::from_parts(RangeList::new(), StringMembers::new())
    }

    fn from_parts(code_points: RangeList, strings: StringMembers) -> Self {
        Self {
            code_points,
            strings,
            state: SetState::Mutable,
        }
    }

    /// Returns a set of the code points `start..=end`, empty if `start > end`
    pub fn from_range(start: u32, end: u32) -> Result<Self, UnicodeSetError> {
        check_range(start, end)?;
        let mut code_points = RangeList::new();
        code_points.add_range(start, end);
        Ok(Self::from_parts(code_points, StringMembers::new()))
    }

    /// Returns a set of every code point `0..=0x10FFFF`
    pub fn all_code_points() -> Self {
        Self::from_parts(RangeList::all(), StringMembers::new())
    }

    /// Returns a set whose only element is `s`, which is a code point if `s` has exactly one
    pub fn from_str_element(s: &str) -> Self {
        let mut set = Self::new();
        set.insert_str(s);
        set
    }

    /// Returns a set of each code point of `s`
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let set = UnicodeSet::from_chars_of("banana");
    /// assert_eq!(set.size(), 3);
    /// assert!(!set.has_strings());
    /// ```
    pub fn from_chars_of(s: &str) -> Self {
        let mut code_points = RangeList::new();
        for c in s.chars() {
            code_points.add_code_point(c as u32);
        }
        Self::from_parts(code_points, StringMembers::new())
    }

    /// Returns a set of code points from an even-length inversion list without sentinel
    ///
    /// See [`RangeList::try_from_inversion_list()`].
    pub fn try_from_inversion_list(inv_list: &[u32]) -> Result<Self, UnicodeSetError> {
        RangeList::try_from_inversion_list(inv_list)
            .map(|code_points| Self::from_parts(code_points, StringMembers::new()))
    }

    fn check_mutable(&self) -> Result<(), UnicodeSetError> {
        match self.state {
            SetState::Mutable => Ok(()),
            SetState::Frozen(_) => {
                crate::log::warn!("Attempt to modify a frozen UnicodeSet");
                Err(UnicodeSetError::ImmutableSet)
            }
        }
    }

    fn insert_str(&mut self, s: &str) {
        match single_code_point(s) {
            Some(c) => self.code_points.add_range(c as u32, c as u32),
            None => self.strings.add_all(&StringMembers::singleton(s)),
        }
    }

    // Mutators

    /// Adds the code point
    pub fn add(&mut self, c: u32) -> Result<&mut Self, UnicodeSetError> {
        self.add_range(c, c)
    }

    /// Adds the character
    pub fn add_char(&mut self, c: char) -> Result<&mut Self, UnicodeSetError> {
        self.add_range(c as u32, c as u32)
    }

    /// Adds the code points `start..=end`; nothing if `start > end`
    pub fn add_range(&mut self, start: u32, end: u32) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        check_range(start, end)?;
        self.code_points.add_range(start, end);
        Ok(self)
    }

    /// Adds `s` as one element
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let mut set = UnicodeSet::new();
    /// set.add_str("x").unwrap();
    /// set.add_str("xy").unwrap();
    /// set.add_str("").unwrap();
    ///
    /// assert!(set.contains_char('x'));
    /// assert_eq!(set.strings().collect::<Vec<_>>(), ["", "xy"]);
    /// ```
    pub fn add_str(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.insert_str(s);
        Ok(self)
    }

    /// Adds a UTF-16 operand as one element.
    ///
    /// A single code unit, or a single surrogate pair, is added as a code point, so lone
    /// surrogates can be added this way. Longer operands must be well-formed UTF-16.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::{UnicodeSet, UnicodeSetError};
    ///
    /// let mut set = UnicodeSet::new();
    /// set.add_utf16(&[0xD83D, 0xDE00]).unwrap();
    /// set.add_utf16(&[0xD800]).unwrap();
    /// set.add_utf16(&[0x61, 0x62]).unwrap();
    ///
    /// assert!(set.contains_char('\u{1F600}'));
    /// assert!(set.contains(0xD800).unwrap());
    /// assert!(set.contains_str("ab"));
    /// assert_eq!(
    ///     set.add_utf16(&[0x61, 0xDC00, 0x62]).unwrap_err(),
    ///     UnicodeSetError::MalformedStringOperand(1)
    /// );
    /// ```
    pub fn add_utf16(&mut self, units: &[u16]) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        if let [unit] = units {
            let c = u32::from(*unit);
            self.code_points.add_range(c, c);
            return Ok(self);
        }
        let mut s = String::with_capacity(units.len());
        let mut index = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            let c = decoded.map_err(|_| UnicodeSetError::MalformedStringOperand(index))?;
            s.push(c);
            index += c.len_utf16();
        }
        self.insert_str(&s);
        Ok(self)
    }

    /// Adds every element of `other`
    pub fn add_all(&mut self, other: &UnicodeSet) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.add_all(&other.code_points);
        self.strings.add_all(&other.strings);
        Ok(self)
    }

    /// Adds each code point of `s`
    pub fn add_all_chars(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.add_all(&Self::from_chars_of(s))
    }

    /// Removes the code point
    pub fn remove(&mut self, c: u32) -> Result<&mut Self, UnicodeSetError> {
        self.remove_range(c, c)
    }

    /// Removes the character
    pub fn remove_char(&mut self, c: char) -> Result<&mut Self, UnicodeSetError> {
        self.remove_range(c as u32, c as u32)
    }

    /// Removes the code points `start..=end`; nothing if `start > end`
    pub fn remove_range(&mut self, start: u32, end: u32) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        check_range(start, end)?;
        self.code_points.remove_range(start, end);
        Ok(self)
    }

    /// Removes the element `s`
    pub fn remove_str(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.remove_all(&Self::from_str_element(s))
    }

    /// Removes every element of `other`
    pub fn remove_all(&mut self, other: &UnicodeSet) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.remove_all(&other.code_points);
        self.strings.remove_all(&other.strings);
        Ok(self)
    }

    /// Removes each code point of `s`
    pub fn remove_all_chars(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.remove_all(&Self::from_chars_of(s))
    }

    /// Removes every string element, keeping the code points
    pub fn remove_all_strings(&mut self) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.strings.clear();
        Ok(self)
    }

    /// Keeps only the code point, if present
    pub fn retain(&mut self, c: u32) -> Result<&mut Self, UnicodeSetError> {
        self.retain_range(c, c)
    }

    /// Keeps only the code points `start..=end`; removes everything if `start > end`.
    ///
    /// String elements are removed, as none of them lie in a code point range.
    pub fn retain_range(&mut self, start: u32, end: u32) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        check_range(start, end)?;
        self.code_points.retain_range(start, end);
        self.strings.clear();
        Ok(self)
    }

    /// Keeps only the element `s`, if present
    pub fn retain_str(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.retain_all(&Self::from_str_element(s))
    }

    /// Keeps only the elements that are also in `other`
    pub fn retain_all(&mut self, other: &UnicodeSet) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.retain_all(&other.code_points);
        self.strings.retain_all(&other.strings);
        Ok(self)
    }

    /// Keeps only the code points that occur in `s`
    pub fn retain_all_chars(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.retain_all(&Self::from_chars_of(s))
    }

    /// Complements the code points across `0..=0x10FFFF`, keeping string elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let mut set = UnicodeSet::from_range(0x0, 0x60).unwrap();
    /// set.add_str("ch").unwrap();
    /// set.complement().unwrap();
    ///
    /// assert_eq!(set.code_points().iter_ranges().next(), Some(0x61..=0x10FFFF));
    /// assert!(set.contains_str("ch"));
    /// ```
    pub fn complement(&mut self) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.complement();
        Ok(self)
    }

    /// Complements the code points across `0..=0x10FFFF` and removes every string element,
    /// the result of negating a set expression.
    pub fn complement_code_points(&mut self) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.complement();
        self.strings.clear();
        Ok(self)
    }

    /// Removes the code point if present, adds it otherwise
    pub fn complement_code_point(&mut self, c: u32) -> Result<&mut Self, UnicodeSetError> {
        self.complement_range(c, c)
    }

    /// Flips membership of every code point in `start..=end`; nothing if `start > end`
    pub fn complement_range(&mut self, start: u32, end: u32) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        check_range(start, end)?;
        self.code_points.complement_range(start, end);
        Ok(self)
    }

    /// Removes the element `s` if present, adds it otherwise
    pub fn complement_str(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.complement_all(&Self::from_str_element(s))
    }

    /// Replaces this set with the symmetric difference of it and `other`
    pub fn complement_all(&mut self, other: &UnicodeSet) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.complement_all(&other.code_points);
        self.strings.complement_all(&other.strings);
        Ok(self)
    }

    /// Flips membership of each code point of `s`
    pub fn complement_all_chars(&mut self, s: &str) -> Result<&mut Self, UnicodeSetError> {
        self.complement_all(&Self::from_chars_of(s))
    }

    /// Removes every element
    pub fn clear(&mut self) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.clear();
        self.strings.clear();
        Ok(self)
    }

    /// Releases unused storage
    pub fn compact(&mut self) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points.compact();
        Ok(self)
    }

    /// Replaces the contents of this set with those of `other`
    pub fn set_to(&mut self, other: &UnicodeSet) -> Result<&mut Self, UnicodeSetError> {
        self.check_mutable()?;
        self.code_points = other.code_points.clone();
        self.strings = other.strings.clone();
        Ok(self)
    }

    /// Rebuilds the code points of this set as exactly those for which `filter` holds, and
    /// removes every string element.
    ///
    /// `filter` is only evaluated at the code points of `inclusions`, the points where its
    /// value may change. Every code point in a gap of `inclusions` takes the value of the
    /// last code point evaluated before it; code points before the first inclusion are not
    /// members.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// // the filter changes value only at U+0041, U+005B and U+0061
    /// let inclusions: UnicodeSet = ["\u{0}", "A", "[", "a"].into_iter().collect();
    ///
    /// let mut upper = UnicodeSet::new();
    /// upper
    ///     .apply_filter(&|cp: u32| (0x41..=0x5A).contains(&cp), &inclusions)
    ///     .unwrap();
    /// assert_eq!(upper.range_count(), 1);
    /// assert_eq!(upper.range_start(0), Some(0x41));
    /// assert_eq!(upper.range_end(0), Some(0x5A));
    /// ```
    pub fn apply_filter<F>(
        &mut self,
        filter: &F,
        inclusions: &UnicodeSet,
    ) -> Result<&mut Self, UnicodeSetError>
    where
        F: CodePointFilter + ?Sized,
    {
        self.check_mutable()?;
        let mut rebuilt = RangeList::new();
        let mut run_start = None;
        for c in inclusions.code_points.iter_code_points() {
            if filter.contains(c) {
                if run_start.is_none() {
                    run_start = Some(c);
                }
            } else if let Some(start) = run_start.take() {
                rebuilt.add_range(start, c - 1);
            }
        }
        if let Some(start) = run_start {
            rebuilt.add_range(start, MAX_VALUE);
        }
        crate::log::debug!(
            "apply_filter rebuilt a UnicodeSet of {} ranges",
            rebuilt.range_count()
        );
        self.code_points = rebuilt;
        self.strings.clear();
        Ok(self)
    }

    // Queries

    fn contains_code_point(&self, c: u32) -> bool {
        match &self.state {
            SetState::Frozen(view) => view.contains(&self.code_points, c),
            SetState::Mutable => self.code_points.contains(c),
        }
    }

    /// Checks whether the code point is in the set
    pub fn contains(&self, c: u32) -> Result<bool, UnicodeSetError> {
        check_code_point(c).map(|c| self.contains_code_point(c))
    }

    /// Checks whether the character is in the set
    pub fn contains_char(&self, c: char) -> bool {
        self.contains_code_point(c as u32)
    }

    /// Checks whether every code point of `start..=end` is in the set
    pub fn contains_range(&self, start: u32, end: u32) -> Result<bool, UnicodeSetError> {
        check_range(start, end)?;
        Ok(self.code_points.contains_range(start, end))
    }

    /// Checks whether `s` is an element of the set
    pub fn contains_str(&self, s: &str) -> bool {
        match single_code_point(s) {
            Some(c) => self.contains_char(c),
            None => self.strings.contains(s),
        }
    }

    /// Checks whether `s` can be split into a sequence of elements of the set.
    ///
    /// Any split will do; the set `{"ab", "abc", "cd"}` covers `"abcd"` as `"ab" + "cd"`
    /// even though `"abc"` matches first.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::UnicodeSet;
    ///
    /// let set: UnicodeSet = ["ab", "abc", "cd", "e"].into_iter().collect();
    /// assert!(set.contains_all_str("abcd"));
    /// assert!(set.contains_all_str("abce"));
    /// assert!(!set.contains_all_str("abd"));
    /// ```
    pub fn contains_all_str(&self, s: &str) -> bool {
        if s.chars().all(|c| self.contains_char(c)) {
            return true;
        }
        if !self.strings.has_nonempty() {
            return false;
        }
        self.strings.can_partition(s, |c| self.contains_char(c))
    }

    /// Checks whether every element of `other` is in the set
    pub fn contains_set(&self, other: &UnicodeSet) -> bool {
        self.code_points.contains_all(&other.code_points)
            && self.strings.contains_all(&other.strings)
    }

    /// Checks whether no code point of `start..=end` is in the set
    pub fn contains_none_range(&self, start: u32, end: u32) -> Result<bool, UnicodeSetError> {
        check_range(start, end)?;
        Ok(self.code_points.contains_none_range(start, end))
    }

    /// Checks whether the set and `other` share no element
    pub fn contains_none_set(&self, other: &UnicodeSet) -> bool {
        self.code_points.contains_none(&other.code_points)
            && self.strings.contains_none(&other.strings)
    }

    /// Checks whether no element of the set occurs anywhere in `s`
    pub fn contains_none_str(&self, s: &str) -> bool {
        self.span(s, 0, SpanCondition::NotContained) == s.len()
    }

    /// Checks whether some code point of `start..=end` is in the set
    pub fn contains_some_range(&self, start: u32, end: u32) -> Result<bool, UnicodeSetError> {
        self.contains_none_range(start, end).map(|none| !none)
    }

    /// Checks whether the set and `other` share some element
    pub fn contains_some_set(&self, other: &UnicodeSet) -> bool {
        !self.contains_none_set(other)
    }

    /// Checks whether some element of the set occurs in `s`
    pub fn contains_some_str(&self, s: &str) -> bool {
        !self.contains_none_str(s)
    }

    /// Returns the number of elements: code points plus strings
    pub fn size(&self) -> usize {
        self.code_points.size() + self.strings.len()
    }

    /// Returns whether the set has no element
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty() && self.strings.is_empty()
    }

    /// Returns whether the set has string elements, the empty string included
    pub fn has_strings(&self) -> bool {
        !self.strings.is_empty()
    }

    /// Returns the code point members
    pub fn code_points(&self) -> &RangeList {
        &self.code_points
    }

    /// Returns the number of code point ranges
    pub fn range_count(&self) -> usize {
        self.code_points.range_count()
    }

    /// Returns the first code point of the range at `index`
    pub fn range_start(&self, index: usize) -> Option<u32> {
        self.code_points.range_start(index)
    }

    /// Returns the last code point of the range at `index`
    pub fn range_end(&self, index: usize) -> Option<u32> {
        self.code_points.range_end(index)
    }

    /// Returns the rank of the code point among the code point members
    pub fn index_of(&self, c: u32) -> Option<usize> {
        self.code_points.index_of(c)
    }

    /// Returns the code point member of rank `index`
    pub fn char_at(&self, index: usize) -> Option<u32> {
        self.code_points.code_point_at(index)
    }

    // Spans

    /// Returns the end of the run starting at byte offset `start` that satisfies `condition`.
    ///
    /// `start` is clamped to the text and moved forward onto a char boundary; a start at or
    /// past the end returns `text.len()`.
    ///
    /// A mutable set with string members builds its string matcher anew on every call, as do
    /// the other span methods. Callers scanning in a loop should [`UnicodeSet::freeze()`] the
    /// set first, which builds the matcher once.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::{SpanCondition, UnicodeSet};
    ///
    /// let mut set = UnicodeSet::from_chars_of("x");
    /// set.add_str("ya").unwrap();
    ///
    /// assert_eq!(set.span("xyax", 0, SpanCondition::Contained), 4);
    /// assert_eq!(set.span("xyax", 0, SpanCondition::NotContained), 0);
    /// assert_eq!(set.span("abxy", 0, SpanCondition::NotContained), 2);
    /// ```
    pub fn span(&self, text: &str, start: usize, condition: SpanCondition) -> usize {
        self.scan_forward(text, start, condition, false).0
    }

    /// Like [`UnicodeSet::span()`], also returning the smallest number of elements the run
    /// can be split into.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::{SpanCondition, UnicodeSet};
    ///
    /// let mut set = UnicodeSet::from_chars_of("a");
    /// set.add_str("aaaa").unwrap();
    ///
    /// assert_eq!(set.span_and_count("aaaaa", 0, SpanCondition::Contained), (5, 2));
    /// ```
    pub fn span_and_count(
        &self,
        text: &str,
        start: usize,
        condition: SpanCondition,
    ) -> (usize, usize) {
        self.scan_forward(text, start, condition, true)
    }

    /// Returns the start of the run ending at byte offset `from_index` that satisfies
    /// `condition`.
    ///
    /// `from_index` is clamped to the text and moved back onto a char boundary; an index
    /// of zero returns zero.
    pub fn span_back(&self, text: &str, from_index: usize, condition: SpanCondition) -> usize {
        self.scan_backward(text, from_index, condition, false).0
    }

    /// Like [`UnicodeSet::span_back()`], also returning the smallest number of elements the
    /// run can be split into.
    pub fn span_back_and_count(
        &self,
        text: &str,
        from_index: usize,
        condition: SpanCondition,
    ) -> (usize, usize) {
        self.scan_backward(text, from_index, condition, true)
    }

    fn scan_forward(
        &self,
        text: &str,
        start: usize,
        condition: SpanCondition,
        with_count: bool,
    ) -> (usize, usize) {
        let start = span::snap_forward(text, start);
        if start >= text.len() {
            return (text.len(), 0);
        }
        match &self.state {
            SetState::Frozen(view) => {
                let contains = |c: char| view.contains(&self.code_points, c as u32);
                span::span(
                    text,
                    start,
                    condition,
                    view.string_span(),
                    with_count,
                    contains,
                )
            }
            SetState::Mutable => {
                let contains = |c: char| self.code_points.contains_char(c);
                let matcher = StringSpan::try_new(&self.strings, contains);
                span::span(
                    text,
                    start,
                    condition,
                    matcher.as_ref(),
                    with_count,
                    contains,
                )
            }
        }
    }

    fn scan_backward(
        &self,
        text: &str,
        from_index: usize,
        condition: SpanCondition,
        with_count: bool,
    ) -> (usize, usize) {
        let limit = span::snap_back(text, from_index);
        if limit == 0 {
            return (0, 0);
        }
        match &self.state {
            SetState::Frozen(view) => {
                let contains = |c: char| view.contains(&self.code_points, c as u32);
                span::span_back(
                    text,
                    limit,
                    condition,
                    view.string_span(),
                    with_count,
                    contains,
                )
            }
            SetState::Mutable => {
                let contains = |c: char| self.code_points.contains_char(c);
                let matcher = StringSpan::try_new(&self.strings, contains);
                span::span_back(
                    text,
                    limit,
                    condition,
                    matcher.as_ref(),
                    with_count,
                    contains,
                )
            }
        }
    }

    // Lifecycle

    /// Makes the set immutable and builds its lookup accelerators. Freezing a frozen set
    /// does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use icu_unicodeset::{UnicodeSet, UnicodeSetError};
    ///
    /// let mut set = UnicodeSet::from_range(0x30, 0x39).unwrap();
    /// set.freeze();
    ///
    /// assert!(set.is_frozen());
    /// assert_eq!(set.add(0x41).unwrap_err(), UnicodeSetError::ImmutableSet);
    ///
    /// let mut thawed = set.clone_as_thawed();
    /// thawed.add(0x41).unwrap();
    /// assert!(!set.contains_char('A'));
    /// ```
    pub fn freeze(&mut self) -> &mut Self {
        if let SetState::Mutable = self.state {
            self.code_points.compact();
            let view = FrozenView::new(&self.code_points, &self.strings);
            self.state = SetState::Frozen(Box::new(view));
        }
        self
    }

    /// Consumes the set and returns it frozen
    pub fn into_frozen(mut self) -> Self {
        self.freeze();
        self
    }

    /// Returns whether the set is frozen
    pub fn is_frozen(&self) -> bool {
        matches!(self.state, SetState::Frozen(_))
    }

    /// Returns a mutable copy of the set; the set itself is left as is
    pub fn clone_as_thawed(&self) -> Self {
        Self::from_parts(self.code_points.clone(), self.strings.clone())
    }
}

impl PartialEq for UnicodeSet {
    fn eq(&self, other: &Self) -> bool {
        self.code_points == other.code_points && self.strings == other.strings
    }
}

impl Eq for UnicodeSet {}

impl Hash for UnicodeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code_points.hash(state);
        self.strings.hash(state);
    }
}

impl fmt::Debug for UnicodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeSet")
            .field("code_points", &self.code_points)
            .field("strings", &self.strings)
            .field("frozen", &self.is_frozen())
            .finish()
    }
}

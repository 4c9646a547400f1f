// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

/// A code point predicate consumed by [`UnicodeSet::apply_filter()`](crate::UnicodeSet::apply_filter),
/// typically backed by Unicode property data.
///
/// Any `Fn(u32) -> bool` is a filter.
///
/// # Examples
///
/// ```
/// use icu_unicodeset::{CodePointFilter, UnicodeSet};
///
/// struct Digits;
///
/// impl CodePointFilter for Digits {
///     fn contains(&self, code_point: u32) -> bool {
///         char::from_u32(code_point).is_some_and(|c| c.is_ascii_digit())
///     }
/// }
///
/// let mut inclusions = UnicodeSet::new();
/// inclusions.add_range(0x30, 0x3A).unwrap();
///
/// let mut set = UnicodeSet::new();
/// set.apply_filter(&Digits, &inclusions).unwrap();
/// assert_eq!(set.code_points().iter_ranges().next(), Some(0x30..=0x39));
/// ```
pub trait CodePointFilter {
    /// Whether the code point has the property
    fn contains(&self, code_point: u32) -> bool;
}

impl<F> CodePointFilter for F
where
    F: Fn(u32) -> bool,
{
    fn contains(&self, code_point: u32) -> bool {
        self(code_point)
    }
}

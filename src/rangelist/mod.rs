// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! The code point half of a [`UnicodeSet`](crate::UnicodeSet), stored as an inversion list.
//!
//! # Architecture
//!
//! A [`RangeList`] is a strictly ascending list of boundaries, always terminated by
//! the sentinel `0x110000`. Even indices open a range of members and odd indices close it,
//! so the code point `c` is a member exactly when the index of the first boundary greater
//! than `c` is odd.
//!
//! ```text
//! {}                  [0x110000]
//! {a-z}               [0x61, 0x7B, 0x110000]
//! {U+10FFFE-U+10FFFF} [0x10FFFE, 0x110000]
//! ```
//!
//! Bulk set algebra (union, intersection, difference, symmetric difference) is a single
//! linear merge of two such lists, parameterized by which operands are complemented and by
//! the rule that combines the two membership flags.
//!
//! # Examples
//!
//! ```
//! use icu_unicodeset::UnicodeSet;
//!
//! let mut set = UnicodeSet::new();
//! set.add_range(0x41, 0x5A).unwrap();
//! set.add_range(0x61, 0x7A).unwrap();
//!
//! let ranges = set.code_points();
//! assert_eq!(ranges.range_count(), 2);
//! assert_eq!(ranges.find_boundary(0x62), 3);
//! assert!(ranges.contains(0x62));
//! assert_eq!(ranges.iter_ranges().next(), Some(0x41..=0x5A));
//! ```

mod list;
pub(crate) mod merge;
mod utils;

pub use list::RangeList;
pub(crate) use utils::{check_code_point, check_range};

/// The smallest code point
pub const MIN_VALUE: u32 = 0;

/// The largest code point
pub const MAX_VALUE: u32 = 0x10FFFF;

/// One past [`MAX_VALUE`]; terminates every inversion list.
pub(crate) const HIGH: u32 = MAX_VALUE + 1;

/// Capacity reserved by a fresh list before the first mutation
pub(crate) const INITIAL_CAPACITY: usize = 25;

// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Mutable and freezable sets of Unicode code points and strings.
//!
//! ICU4X [`UnicodeSet`] is an implementation of the set model of the existing
//! [ICU4C UnicodeSet API](https://unicode-org.github.io/icu-docs/apidoc/released/icu4c/classicu_1_1UnicodeSet.html):
//! a set whose members are either single code points or strings, supporting
//! set algebra, membership queries, and span scanning over text.
//!
//! # Architecture
//!
//! The set is split into independent levels:
//!
//! * [`RangeList`](rangelist::RangeList) stores the code point members as an inversion list,
//!   and [`rangelist`] holds the merge routine behind every bulk set operation.
//! * String members of zero or two and more code points are kept in a sorted store.
//! * [`span`] scans text for the longest prefix or suffix satisfying a [`SpanCondition`].
//! * [`UnicodeSet::freeze`] makes an instance immutable and builds the lookup
//!   accelerators that make it cheap to share across threads.
//!
//! # Examples
//!
//! ```
//! use icu_unicodeset::{SpanCondition, UnicodeSet};
//!
//! let mut set = UnicodeSet::new();
//! set.add_range(0x61, 0x7A).unwrap();
//! set.add_str("ch").unwrap();
//!
//! assert!(set.contains_char('q'));
//! assert!(set.contains_str("ch"));
//! assert_eq!(set.span("abc123", 0, SpanCondition::Contained), 3);
//!
//! set.freeze();
//! assert!(set.add_char('!').is_err());
//! ```

// https://github.com/unicode-org/icu4x/blob/main/documents/process/boilerplate.md#library-annotations
#![cfg_attr(not(any(test, doc)), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic
    )
)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod filter;
mod frozen;
pub mod rangelist;
pub mod span;
mod strings;
mod unicodeset;

pub use error::UnicodeSetError;
pub use filter::CodePointFilter;
pub use span::SpanCondition;
pub use unicodeset::{ComparisonStyle, SetElement, UnicodeSet};

#[doc(hidden)] // internal
#[cfg(feature = "logging")]
pub use log;

#[doc(hidden)] // internal
#[cfg(not(feature = "logging"))]
pub mod log {
    #[macro_export]
    macro_rules! _internal_noop_log {
        ($($t:expr),*) => {};
    }
    pub use crate::_internal_noop_log as warn;
    pub use crate::_internal_noop_log as debug;
    pub use crate::_internal_noop_log as trace;
}

#[test]
fn test_logging() {
    // This should compile on all combinations of features
    crate::log::debug!("UnicodeSet logging");
}

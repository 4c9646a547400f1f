// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! One linear merge for every bulk operation over two inversion lists.

use super::HIGH;
use alloc::vec::Vec;

/// Which operands of a merge are complemented before they are combined.
///
/// Bit 0 complements the receiver, bit 1 complements the argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Polarity(u8);

impl Polarity {
    /// Both operands as given
    pub(crate) const NONE: Self = Self(0b00);
    /// The receiver complemented
    #[cfg(test)]
    pub(crate) const COMPLEMENT_SELF: Self = Self(0b01);
    /// The argument complemented
    pub(crate) const COMPLEMENT_OTHER: Self = Self(0b10);

    fn complements_self(self) -> bool {
        self.0 & 0b01 != 0
    }

    fn complements_other(self) -> bool {
        self.0 & 0b10 != 0
    }
}

/// How the membership flags of the two operands combine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MergeRule {
    Union,
    Intersection,
    SymmetricDifference,
}

impl MergeRule {
    fn combine(self, a: bool, b: bool) -> bool {
        match self {
            MergeRule::Union => a || b,
            MergeRule::Intersection => a && b,
            MergeRule::SymmetricDifference => a != b,
        }
    }
}

/// Merges two boundary lists, each terminated by [`HIGH`], into a new terminated list.
///
/// Both inputs are walked once in ascending order. A boundary present in both toggles both
/// membership flags at once, and a boundary that would close a range at the point it opened
/// is dropped, so the output is strictly ascending and never holds an empty range.
///
/// Each input is read up to its first [`HIGH`]; anything after it is ignored.
pub(crate) fn merge(a: &[u32], b: &[u32], polarity: Polarity, rule: MergeRule) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut in_a = polarity.complements_self();
    let mut in_b = polarity.complements_other();
    let mut inside = rule.combine(in_a, in_b);
    if inside {
        out.push(0);
    }

    let (mut i, mut j) = (0, 0);
    loop {
        let next_a = a.get(i).copied().unwrap_or(HIGH);
        let next_b = b.get(j).copied().unwrap_or(HIGH);
        let v = next_a.min(next_b);
        if v >= HIGH {
            break;
        }
        if next_a == v {
            in_a = !in_a;
            i += 1;
        }
        if next_b == v {
            in_b = !in_b;
            j += 1;
        }
        if rule.combine(in_a, in_b) != inside {
            if out.last() == Some(&v) {
                out.pop();
            } else {
                out.push(v);
            }
            inside = !inside;
        }
    }
    out.push(HIGH);
    out
}

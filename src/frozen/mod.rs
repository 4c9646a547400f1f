// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Lookup structures built once when a set is frozen.

mod bmp;

use alloc::boxed::Box;

use crate::rangelist::RangeList;
use crate::span::StringSpan;
use crate::strings::StringMembers;
use bmp::BmpBitmap;

/// Whether a [`UnicodeSet`](crate::UnicodeSet) may still change.
#[derive(Clone)]
pub(crate) enum SetState {
    Mutable,
    Frozen(Box<FrozenView>),
}

/// Accelerators for a frozen set, derived from its contents and never updated.
#[derive(Clone)]
pub(crate) struct FrozenView {
    bmp: BmpBitmap,
    strings: Option<StringSpan>,
}

impl FrozenView {
    /// Builds every accelerator up front, so reads never write.
    pub(crate) fn new(code_points: &RangeList, strings: &StringMembers) -> Self {
        let bmp = BmpBitmap::new(code_points);
        let strings = StringSpan::try_new(strings, |c| code_points.contains_char(c));
        match &strings {
            Some(matcher) if matcher.needs_string_span() => {
                crate::log::debug!("Frozen UnicodeSet: BMP bitmap and string matcher");
            }
            Some(_) => {
                crate::log::debug!(
                    "Frozen UnicodeSet: BMP bitmap; strings only matter for element counts"
                );
            }
            None => {
                crate::log::debug!("Frozen UnicodeSet: BMP bitmap only");
            }
        }
        crate::log::trace!(
            "Frozen UnicodeSet with {} ranges",
            code_points.range_count()
        );
        Self { bmp, strings }
    }

    /// Membership through the bitmap, falling back to `code_points` above the BMP
    pub(crate) fn contains(&self, code_points: &RangeList, c: u32) -> bool {
        match self.bmp.get(c) {
            Some(member) => member,
            None => code_points.contains(c),
        }
    }

    pub(crate) fn string_span(&self) -> Option<&StringSpan> {
        self.strings.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::FrozenView;
    use crate::rangelist::RangeList;
    use crate::strings::StringMembers;

    #[test]
    fn test_frozen_view_contains() {
        let boundaries = [0x61, 0x7B, 0x1F600, 0x1F650];
        let list = RangeList::try_from_inversion_list(&boundaries).unwrap();
        let view = FrozenView::new(&list, &StringMembers::new());
        for c in [
            0x0, 0x60, 0x61, 0x7A, 0x7B, 0xFFFF, 0x1F5FF, 0x1F600, 0x1F64F, 0x1F650,
        ] {
            assert_eq!(view.contains(&list, c), list.contains(c), "{c:#X}");
        }
        assert!(view.string_span().is_none());
    }

    #[test]
    fn test_frozen_view_string_matcher() {
        let list = RangeList::try_from_inversion_list(&[0x61, 0x7B]).unwrap();
        let view = FrozenView::new(&list, &StringMembers::singleton("ab"));
        let matcher = view.string_span().unwrap();
        assert!(!matcher.needs_string_span());
        let view = FrozenView::new(&list, &StringMembers::singleton("a1"));
        assert!(view.string_span().unwrap().needs_string_span());
        let view = FrozenView::new(&list, &StringMembers::singleton(""));
        assert!(view.string_span().is_none());
    }
}

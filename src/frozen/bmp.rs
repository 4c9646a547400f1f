// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use alloc::boxed::Box;
use alloc::vec;

use crate::rangelist::RangeList;

/// First code point past the Basic Multilingual Plane
pub(crate) const BMP_LIMIT: u32 = 0x10000;

const WORDS: usize = (BMP_LIMIT / 64) as usize;

/// One bit per BMP code point, 64 code points per word.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct BmpBitmap {
    words: Box<[u64]>,
}

impl BmpBitmap {
    pub(crate) fn new(list: &RangeList) -> Self {
        let mut bitmap = Self {
            words: vec![0; WORDS].into_boxed_slice(),
        };
        for range in list.iter_ranges() {
            let start = *range.start();
            if start >= BMP_LIMIT {
                break;
            }
            bitmap.set_range(start, (*range.end()).min(BMP_LIMIT - 1));
        }
        bitmap
    }

    fn set_range(&mut self, start: u32, end: u32) {
        let (first, last) = ((start >> 6) as usize, (end >> 6) as usize);
        let words = self.words.get_mut(first..=last).unwrap_or_default();
        for (index, word) in (first..).zip(words) {
            let low = if index == first { start & 63 } else { 0 };
            let high = if index == last { end & 63 } else { 63 };
            // bits low..=high
            *word |= (u64::MAX >> (63 - high)) & (u64::MAX << low);
        }
    }

    /// Membership of a BMP code point, or `None` for supplementary code points
    pub(crate) fn get(&self, c: u32) -> Option<bool> {
        let word = self.words.get((c >> 6) as usize)?;
        Some((word >> (c & 63)) & 1 != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{BmpBitmap, BMP_LIMIT};
    use crate::rangelist::RangeList;

    #[test]
    fn test_bmp_bitmap_matches_list() {
        let list = RangeList::try_from_inversion_list(&[
            0x0, 0x1, 0x3F, 0x41, 0x7F, 0xC1, 0xD800, 0xE000, 0xFFFF, 0x10005,
        ])
        .unwrap();
        let bitmap = BmpBitmap::new(&list);
        for c in 0..BMP_LIMIT {
            assert_eq!(bitmap.get(c), Some(list.contains(c)), "{c:#X}");
        }
        assert_eq!(bitmap.get(BMP_LIMIT), None);
        assert_eq!(bitmap.get(0x10FFFF), None);
    }

    #[test]
    fn test_bmp_bitmap_full_words() {
        let bitmap = BmpBitmap::new(&RangeList::all());
        assert!(bitmap.words.iter().all(|&word| word == u64::MAX));
        let bitmap = BmpBitmap::new(&RangeList::new());
        assert!(bitmap.words.iter().all(|&word| word == 0));
    }
}

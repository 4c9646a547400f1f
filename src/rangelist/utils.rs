// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use super::{HIGH, MAX_VALUE};
use crate::UnicodeSetError;

/// Returns the code point if it is at most [`MAX_VALUE`]
pub(crate) fn check_code_point(c: u32) -> Result<u32, UnicodeSetError> {
    if c > MAX_VALUE {
        Err(UnicodeSetError::InvalidCodePoint(c))
    } else {
        Ok(c)
    }
}

/// Validates both ends of an inclusive range, reporting the start first.
///
/// A range whose start exceeds its end is valid and empty.
pub(crate) fn check_range(start: u32, end: u32) -> Result<(), UnicodeSetError> {
    check_code_point(start)?;
    check_code_point(end)?;
    Ok(())
}

/// Returns whether the slice is sorted ascending non inclusive, of even length,
/// and within the bounds of `0x0 -> 0x10FFFF + 1` inclusive.
#[allow(clippy::indexing_slicing)] // windows
pub(crate) fn is_valid_inversion_list(inv_list: &[u32]) -> bool {
    inv_list.len() % 2 == 0
        && inv_list.windows(2).all(|pair| pair[0] < pair[1])
        && inv_list.last().is_none_or(|&last| last <= HIGH)
}

#[cfg(test)]
mod tests {
    use super::{check_code_point, check_range, is_valid_inversion_list};
    use crate::rangelist::{HIGH, MAX_VALUE};
    use crate::UnicodeSetError;

    #[test]
    fn test_check_code_point() {
        assert_eq!(check_code_point(0), Ok(0));
        assert_eq!(check_code_point(MAX_VALUE), Ok(MAX_VALUE));
        assert_eq!(
            check_code_point(HIGH),
            Err(UnicodeSetError::InvalidCodePoint(HIGH))
        );
    }

    #[test]
    fn test_check_range_reports_start_first() {
        assert_eq!(
            check_range(0x110001, 0x110002),
            Err(UnicodeSetError::InvalidCodePoint(0x110001))
        );
        assert_eq!(
            check_range(0x41, 0x110002),
            Err(UnicodeSetError::InvalidCodePoint(0x110002))
        );
        assert_eq!(check_range(0x5A, 0x41), Ok(()));
    }

    #[test]
    fn test_is_valid_inversion_list() {
        assert!(is_valid_inversion_list(&[0x2, 0x3, 0x4, 0x5]));
        assert!(is_valid_inversion_list(&[]));
        assert!(is_valid_inversion_list(&[0x0, HIGH]));
    }

    #[test]
    fn test_is_valid_inversion_list_rejects() {
        // overlapping
        assert!(!is_valid_inversion_list(&[0x2, 0x5, 0x4, 0x6]));
        // duplicate
        assert!(!is_valid_inversion_list(&[0x1, 0x2, 0x3, 0x3]));
        // odd
        assert!(!is_valid_inversion_list(&[0x1, 0x2, 0x3]));
        // out of range
        assert!(!is_valid_inversion_list(&[0x1, HIGH + 1]));
    }
}

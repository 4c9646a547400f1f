// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use displaydoc::Display;

/// Error returned by the fallible operations of [`UnicodeSet`](crate::UnicodeSet).
///
/// No operation mutates the set before returning one of these errors.
#[derive(Copy, Clone, Display, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnicodeSetError {
    /// A code point argument was greater than U+10FFFF
    #[displaydoc("Invalid code point: {0:#X}")]
    InvalidCodePoint(u32),
    /// A mutating operation was called on a frozen set
    #[displaydoc("Attempt to modify a frozen UnicodeSet")]
    ImmutableSet,
    /// A UTF-16 string operand held an unpaired surrogate at the given code unit index
    #[displaydoc("Malformed string operand: unpaired surrogate at index {0}")]
    MalformedStringOperand(usize),
    /// An inversion list was not sorted ascending, of even length, and bounded by U+10FFFF + 1
    #[displaydoc("Invalid inversion list")]
    InvalidInversionList,
}

impl core::error::Error for UnicodeSetError {}

#[cfg(test)]
mod tests {
    use super::UnicodeSetError;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UnicodeSetError::InvalidCodePoint(0x110000).to_string(),
            "Invalid code point: 0x110000"
        );
        assert_eq!(
            UnicodeSetError::ImmutableSet.to_string(),
            "Attempt to modify a frozen UnicodeSet"
        );
        assert_eq!(
            UnicodeSetError::MalformedStringOperand(3).to_string(),
            "Malformed string operand: unpaired surrogate at index 3"
        );
    }
}

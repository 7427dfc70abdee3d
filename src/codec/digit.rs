//! Single-character hex primitives.
//!
//! Classification and decoding use 8-bit wraparound arithmetic instead of
//! range matches, so neither contains a data-dependent branch.

use crate::foundation::config::*;

/// Check whether `h` is an ASCII hex digit (`0-9`, `a-f`, `A-F`).
///
/// Total over all byte values; anything else, including non-ASCII, is false.
pub fn is_hex_digit(h: u8) -> bool {
    let n09 = h.wrapping_sub(b'0');
    let naf = (h | CASE_FOLD_BIT).wrapping_sub(b'a');
    (n09 <= DECIMAL_SPAN) | (naf <= LETTER_SPAN)
}

/// Encode the low nibble of `nibble` as a lowercase hex digit.
/// The four most significant bits are ignored.
pub fn nibble_to_hex_char(nibble: u8) -> u8 {
    HEX_ALPHABET[usize::from(nibble & NIBBLE_MASK)]
}

/// Decode a case-insensitive hex digit to its value (0-15).
///
/// `h` must satisfy [`is_hex_digit`]. Other inputs give a meaningless value
/// (at most 42) but never panic.
pub fn hex_char_to_nibble(h: u8) -> u8 {
    (h & NIBBLE_MASK) + (h >> LETTER_SHIFT) * LETTER_CORRECTION
}

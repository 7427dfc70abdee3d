//! Constants for the hex codec.
//!
//! ## Character Layout
//!
//! | Range     | ASCII       | Low nibble | Bits 6-7 |
//! |-----------|-------------|------------|----------|
//! | `0`..`9`  | 0x30..0x39  | 0..9       | 0        |
//! | `A`..`F`  | 0x41..0x46  | 1..6       | 1        |
//! | `a`..`f`  | 0x61..0x66  | 1..6       | 1        |

/// Output alphabet, indexed by nibble value. Lowercase only.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Mask selecting the low nibble of a byte.
pub const NIBBLE_MASK: u8 = 0x0f;

/// Width of a nibble in bits.
pub const NIBBLE_BITS: u32 = 4;

/// Number of hex characters produced per encoded byte.
pub const CHARS_PER_BYTE: usize = 2;

// ═══════════════════════════════════════════════════════════════════════
// CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════

/// Setting this bit folds `A`..`Z` onto `a`..`z`.
pub const CASE_FOLD_BIT: u8 = 0x20;

/// Largest offset from `'0'` that is still a decimal digit.
pub const DECIMAL_SPAN: u8 = 9;

/// Largest offset from `'a'` that is still a hex letter.
pub const LETTER_SPAN: u8 = 0xf - 0xa;

// ═══════════════════════════════════════════════════════════════════════
// DECODING
// ═══════════════════════════════════════════════════════════════════════

/// Shift that isolates the bits distinguishing letters from digits.
pub const LETTER_SHIFT: u32 = 6;

/// Added to a letter's low nibble (1..6) to reach its value (10..15).
pub const LETTER_CORRECTION: u8 = 9;

//! Hex encoding and decoding over caller-provided buffers.
//!
//! All operations work on borrowed slices without heap allocation. The
//! destination slice length is the capacity; running out of room truncates
//! and the returned count says how much was written.

use crate::codec::digit::{hex_char_to_nibble, is_hex_digit, nibble_to_hex_char};
use crate::foundation::config::{CHARS_PER_BYTE, NIBBLE_BITS};

/// Encode raw bytes as lowercase hex into `hex`.
///
/// Writes two characters per byte, high nibble first, for as many bytes as
/// fit in whole pairs. Returns the number of ASCII bytes written, always
/// even. No terminator is appended.
pub fn encode(hex: &mut [u8], bin: &[u8]) -> usize {
    let mut written = 0;
    for (pair, &byte) in hex.chunks_exact_mut(CHARS_PER_BYTE).zip(bin) {
        pair[0] = nibble_to_hex_char(byte >> NIBBLE_BITS);
        pair[1] = nibble_to_hex_char(byte);
        written += CHARS_PER_BYTE;
    }
    written
}

/// Decode hex characters into `bin`.
///
/// `hex` is assumed to hold only hex digits (see [`is_hex`]); each complete
/// pair becomes one byte until either side runs out. A trailing unpaired
/// character is ignored. Returns the number of bytes written.
pub fn decode(bin: &mut [u8], hex: &[u8]) -> usize {
    let mut written = 0;
    for (slot, pair) in bin.iter_mut().zip(hex.chunks_exact(CHARS_PER_BYTE)) {
        let hi = hex_char_to_nibble(pair[0]);
        let lo = hex_char_to_nibble(pair[1]);
        *slot = (hi << NIBBLE_BITS) | lo;
        written += 1;
    }
    written
}

/// Check that `hex` is safe to hand to [`decode`]: even length and every
/// character a hex digit. Empty input is valid.
pub fn is_hex(hex: &[u8]) -> bool {
    hex.len() % CHARS_PER_BYTE == 0 && hex.iter().all(|&h| is_hex_digit(h))
}

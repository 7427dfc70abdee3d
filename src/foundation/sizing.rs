//! Buffer sizing for full encode and decode.
//!
//! Compare these against the count returned by `encode`/`decode` to detect
//! truncation.

use crate::foundation::config::CHARS_PER_BYTE;

/// Number of hex characters needed to encode `blen` bytes without truncation.
/// Saturates at the largest even `usize`.
pub fn encoded_len(blen: usize) -> usize {
    match blen.checked_mul(CHARS_PER_BYTE) {
        Some(n) => n,
        None => usize::MAX - (usize::MAX % CHARS_PER_BYTE),
    }
}

/// Number of bytes produced by decoding `hlen` hex characters.
/// A trailing unpaired character does not count.
pub fn decoded_len(hlen: usize) -> usize {
    hlen / CHARS_PER_BYTE
}

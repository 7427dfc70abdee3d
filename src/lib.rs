//! tinyhex — allocation-free lowercase hex codec for embedded targets
//!
//! # Architecture
//!
//! | Operation             | Rust                                   | C symbol             |
//! |-----------------------|----------------------------------------|----------------------|
//! | Digit classification  | codec::digit::is_hex_digit             | `tinyhex_is_digit`   |
//! | Nibble encode         | codec::digit::nibble_to_hex_char       | `tinyhex_to_digit`   |
//! | Nibble decode         | codec::digit::hex_char_to_nibble       | `tinyhex_from_digit` |
//! | Buffer encode         | codec::buffer::encode                  | `tinyhex_encode`     |
//! | Buffer decode         | codec::buffer::decode                  | `tinyhex_decode`     |
//! | Buffer classification | codec::buffer::is_hex                  | —                    |
//! | Output sizing         | foundation::sizing                     | —                    |
//!
//! # Buffers
//!
//! Every buffer is owned by the caller. The codec never allocates, never
//! writes a terminator, and never retains a reference past the call. When
//! the destination is too small the output is truncated to whole units and
//! the returned count is the only signal.
//!
//! # C Exports
//!
//! The `tinyhex_*` entry points take raw pointers and `u32` lengths so the
//! codec can be linked into C firmware. A null pointer is treated as an
//! empty buffer.

#![cfg_attr(not(test), no_std)]

pub mod codec;
pub mod foundation;


pub use codec::{decode, encode, hex_char_to_nibble, is_hex, is_hex_digit, nibble_to_hex_char};
pub use foundation::sizing::{decoded_len, encoded_len};

use core::slice;

// ═══════════════════════════════════════════════════════════════════════
// C Entry Points — Digit Primitives
// ═══════════════════════════════════════════════════════════════════════

/// Check whether the low 8 bits of `h` are an ASCII hex digit.
#[no_mangle]
pub extern "C" fn tinyhex_is_digit(h: u32) -> bool {
    is_hex_digit(h as u8)
}

/// Encode the low 4 bits of `nibble` as a lowercase hex digit.
#[no_mangle]
pub extern "C" fn tinyhex_to_digit(nibble: u32) -> u8 {
    nibble_to_hex_char(nibble as u8)
}

/// Decode the hex digit in the low 8 bits of `h`.
/// The input is assumed to be a valid hex digit.
#[no_mangle]
pub extern "C" fn tinyhex_from_digit(h: u32) -> u8 {
    hex_char_to_nibble(h as u8)
}

// ═══════════════════════════════════════════════════════════════════════
// C Entry Points — Buffers
// ═══════════════════════════════════════════════════════════════════════

/// Encode `blen` bytes from `bin` into at most `hlen` characters at `hex`.
/// Returns the number of characters written.
///
/// # Safety
///
/// `hex` must be valid for writes of `hlen` bytes and `bin` valid for reads
/// of `blen` bytes, and the two regions must not overlap. Either pointer may
/// be null, in which case nothing is written.
#[no_mangle]
pub unsafe extern "C" fn tinyhex_encode(hex: *mut u8, hlen: u32, bin: *const u8, blen: u32) -> u32 {
    if hex.is_null() || bin.is_null() {
        return 0;
    }
    let hex = slice::from_raw_parts_mut(hex, hlen as usize);
    let bin = slice::from_raw_parts(bin, blen as usize);
    // Bounded by hlen, so it fits back into u32.
    encode(hex, bin) as u32
}

/// Decode `hlen` hex characters from `hex` into at most `blen` bytes at
/// `bin`. Returns the number of bytes written.
///
/// # Safety
///
/// `bin` must be valid for writes of `blen` bytes and `hex` valid for reads
/// of `hlen` bytes, and the two regions must not overlap. Either pointer may
/// be null, in which case nothing is written. The characters are assumed to
/// be valid hex digits.
#[no_mangle]
pub unsafe extern "C" fn tinyhex_decode(bin: *mut u8, blen: u32, hex: *const u8, hlen: u32) -> u32 {
    if bin.is_null() || hex.is_null() {
        return 0;
    }
    let bin = slice::from_raw_parts_mut(bin, blen as usize);
    let hex = slice::from_raw_parts(hex, hlen as usize);
    decode(bin, hex) as u32
}

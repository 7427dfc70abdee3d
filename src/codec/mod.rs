//! The hex codec: single-digit primitives and buffer operations.

pub mod buffer;
pub mod digit;

pub use buffer::{decode, encode, is_hex};
pub use digit::{hex_char_to_nibble, is_hex_digit, nibble_to_hex_char};

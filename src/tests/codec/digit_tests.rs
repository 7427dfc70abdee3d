use crate::codec::digit::*;
use crate::tests::reference_is_hex_digit;

#[test]
fn test_is_hex_digit_accepts_all_digit_ranges() {
    for c in b"0123456789abcdefABCDEF" {
        assert!(is_hex_digit(*c), "{} should be a hex digit", *c as char);
    }
}

#[test]
fn test_is_hex_digit_rejects_neighbours() {
    // Characters just outside each range.
    for c in [b'/', b':', b'@', b'G', b'`', b'g', b' ', 0x00, 0x7f] {
        assert!(!is_hex_digit(c), "{:#04x} should not be a hex digit", c);
    }
}

#[test]
fn test_is_hex_digit_all_byte_values() {
    for c in 0..=u8::MAX {
        assert_eq!(is_hex_digit(c), reference_is_hex_digit(c), "byte {:#04x}", c);
    }
}

#[test]
fn test_is_hex_digit_non_ascii_case_fold() {
    // 0xC1 | 0x20 = 0xE1; the fold must not turn high bytes into letters.
    assert!(!is_hex_digit(0xC1));
    assert!(!is_hex_digit(0xE1));
    assert!(!is_hex_digit(0xB0));
}

#[test]
fn test_nibble_to_hex_char() {
    assert_eq!(nibble_to_hex_char(0), b'0');
    assert_eq!(nibble_to_hex_char(9), b'9');
    assert_eq!(nibble_to_hex_char(10), b'a');
    assert_eq!(nibble_to_hex_char(15), b'f');
}

#[test]
fn test_nibble_to_hex_char_ignores_high_bits() {
    assert_eq!(nibble_to_hex_char(0xF0), b'0');
    assert_eq!(nibble_to_hex_char(0x3A), b'a');
    assert_eq!(nibble_to_hex_char(0xFF), b'f');
}

#[test]
fn test_nibble_to_hex_char_is_lowercase() {
    for v in 0..16u8 {
        let c = nibble_to_hex_char(v);
        assert!(c.is_ascii_digit() || (b'a'..=b'f').contains(&c));
    }
}

#[test]
fn test_hex_char_to_nibble() {
    assert_eq!(hex_char_to_nibble(b'0'), 0);
    assert_eq!(hex_char_to_nibble(b'7'), 7);
    assert_eq!(hex_char_to_nibble(b'9'), 9);
    assert_eq!(hex_char_to_nibble(b'a'), 10);
    assert_eq!(hex_char_to_nibble(b'f'), 15);
    assert_eq!(hex_char_to_nibble(b'A'), 10);
    assert_eq!(hex_char_to_nibble(b'F'), 15);
}

#[test]
fn test_hex_char_to_nibble_case_insensitive() {
    for v in 0..16u8 {
        let lower = nibble_to_hex_char(v);
        let upper = lower.to_ascii_uppercase();
        assert_eq!(hex_char_to_nibble(lower), v);
        assert_eq!(hex_char_to_nibble(upper), v);
    }
}

#[test]
fn test_hex_char_to_nibble_total_on_invalid_input() {
    // Meaningless but bounded for every byte.
    for c in 0..=u8::MAX {
        assert!(hex_char_to_nibble(c) <= 42);
    }
}

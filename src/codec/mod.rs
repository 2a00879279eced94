//! # Codec
//!
//! Crockford's Base32 symbol mapping for human-readable identifiers.
//! Uses alphabet: 0-9, A-Z excluding I, L, O, U (32 characters).
//!
//! Decoding is case-insensitive and corrects common look-alikes:
//! `I` and `L` read as `1`, `O` reads as `0`. `U` is rejected since it is
//! easily confused with `V`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;

pub use self::base32::{decode, encode_compact, encode_fixed, group, normalize};

use crate::constants::{CROCKFORD_ALPHABET, SYMBOL_MASK};

/// Marker for bytes with no symbol value.
const INVALID: u8 = 0xFF;

/// Byte-indexed decode table, built at compile time.
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];

    let mut i = 0;
    while i < CROCKFORD_ALPHABET.len() {
        let symbol = CROCKFORD_ALPHABET[i];
        table[symbol as usize] = i as u8;
        table[symbol.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }

    // Look-alike corrections
    table[b'I' as usize] = 1;
    table[b'i' as usize] = 1;
    table[b'L' as usize] = 1;
    table[b'l' as usize] = 1;
    table[b'O' as usize] = 0;
    table[b'o' as usize] = 0;

    table
}

/// Returns the value (0-31) of a character, or `None` if it has no mapping.
pub fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns the canonical symbol for the low 5 bits of `value`.
pub fn value_symbol(value: u8) -> char {
    CROCKFORD_ALPHABET[(value & SYMBOL_MASK) as usize] as char
}

/// Returns true if `c` is accepted by the decoder (alphabet in either case,
/// plus the `I`, `L`, `O` corrections).
pub fn is_valid_char(c: char) -> bool {
    symbol_value(c).is_some()
}

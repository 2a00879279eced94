//! # Checksum
//!
//! Two-symbol CRC-10 suffix that catches transcription errors in encoded
//! identifiers: mistyped, swapped, or doubled characters.
//!
//! ## Algorithm
//! 1. Start with a zero register
//! 2. For each character, XOR its symbol value in at bit 5
//! 3. Run five shift steps, XORing in polynomial `0x233` whenever bit 9 is set
//! 4. Keep the low 10 bits and render them as two symbols (high 5, low 5)
//!
//! The output is part of issued identifiers and must stay bit-for-bit stable.
//!
//! Lengths here count characters, not bytes, so arbitrary strings never
//! split inside a multi-byte character.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    codec::{normalize, symbol_value, value_symbol},
    constants::{BITS_PER_SYMBOL, CHECKSUM_LEN, CRC10_MASK, CRC10_POLY, CRC10_TOP_BIT},
    error::ChecksumError,
};

/// Computes the raw 10-bit CRC over `data`.
fn crc10(data: &str) -> Result<u16, ChecksumError> {
    let mut crc: u16 = 0;

    for (position, c) in data.chars().enumerate() {
        let value = symbol_value(c).ok_or(ChecksumError::InvalidCharacter { char: c, position })?;
        crc ^= u16::from(value) << BITS_PER_SYMBOL;

        for _ in 0..BITS_PER_SYMBOL {
            crc = if crc & CRC10_TOP_BIT == 0 {
                crc << 1
            } else {
                (crc << 1) ^ CRC10_POLY
            };
        }
    }

    Ok(crc & CRC10_MASK)
}

/// Calculates the two-character checksum for `data`.
///
/// Characters go through the same mapping as decoding, so `i`, `L` and `1`
/// contribute identically. Invalid characters are rejected, never skipped.
///
/// # Example
/// ```
/// use crockid::checksum::calculate;
/// assert_eq!(calculate("ABC123").unwrap(), "TF");
/// ```
pub fn calculate(data: &str) -> Result<String, ChecksumError> {
    let crc = crc10(data)?;
    let high = (crc >> BITS_PER_SYMBOL) as u8;
    let low = crc as u8;

    Ok([value_symbol(high), value_symbol(low)].iter().collect())
}

/// Returns `data` followed by its checksum.
pub fn append(data: &str) -> Result<String, ChecksumError> {
    let checksum = calculate(data)?;
    let mut result = String::with_capacity(data.len() + CHECKSUM_LEN);
    result.push_str(data);
    result.push_str(&checksum);
    Ok(result)
}

/// Returns true if the last two characters of `input` are the checksum of
/// the rest.
///
/// Never fails: short input or invalid characters yield `false`. The
/// checksum comparison is case-insensitive and applies look-alike
/// corrections.
pub fn validate(input: &str) -> bool {
    if input.chars().count() <= CHECKSUM_LEN {
        return false;
    }

    let provided = extract(input);
    let data = strip(input);

    calculate(&data).is_ok_and(|expected| normalize(&expected) == normalize(&provided))
}

/// Returns `input` without its trailing checksum.
///
/// Inputs of two characters or fewer yield the empty string.
pub fn strip(input: &str) -> String {
    let count = input.chars().count();
    if count <= CHECKSUM_LEN {
        return String::new();
    }
    input.chars().take(count - CHECKSUM_LEN).collect()
}

/// Returns the trailing two-character checksum of `input`.
///
/// Inputs shorter than two characters yield the empty string; a
/// two-character input is returned whole.
pub fn extract(input: &str) -> String {
    let count = input.chars().count();
    if count < CHECKSUM_LEN {
        return String::new();
    }
    input.chars().skip(count - CHECKSUM_LEN).collect()
}

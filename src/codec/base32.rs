//! # Base32 Encoding
//!
//! Conversion between `u64` values and Crockford Base32 strings,
//! plus input normalization and display grouping.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{symbol_value, value_symbol};
use crate::{
    constants::{FORMATTING_CHARS, GROUP_SEPARATOR, MAX_COMPACT_LEN},
    error::{DecodeError, EncodeError},
};

const BASE: u64 = 32;

/// Encodes a u64 value into a fixed-width Crockford Base32 string.
///
/// # Arguments
/// * `value` - The number to encode
/// * `length` - The desired output width (left-padded with '0')
///
/// # Returns
/// A `String` of exactly `length` characters, or an error if `length` is
/// zero or the value needs more than `length` symbols.
///
/// # Example
/// ```
/// use crockid::codec::encode_fixed;
/// assert_eq!(encode_fixed(12345, 6).unwrap(), "000C1S");
/// ```
pub fn encode_fixed(value: u64, length: usize) -> Result<String, EncodeError> {
    if length == 0 {
        return Err(EncodeError::InvalidLength);
    }

    let mut remaining = value;
    let mut result = Vec::with_capacity(length);

    for _ in 0..length {
        result.push(value_symbol((remaining % BASE) as u8));
        remaining /= BASE;
    }

    if remaining != 0 {
        return Err(EncodeError::ValueTooLarge { value, length });
    }

    result.reverse();
    Ok(result.into_iter().collect())
}

/// Encodes a u64 value using the fewest symbols possible.
///
/// Zero encodes to `"0"`, never the empty string.
///
/// # Example
/// ```
/// use crockid::codec::encode_compact;
/// assert_eq!(encode_compact(99999), "31MZ");
/// assert_eq!(encode_compact(0), "0");
/// ```
pub fn encode_compact(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut result = Vec::with_capacity(MAX_COMPACT_LEN);
    while value > 0 {
        result.push(value_symbol((value % BASE) as u8));
        value /= BASE;
    }

    result.reverse();
    result.into_iter().collect()
}

/// Decodes a Crockford Base32 string into a u64 value.
///
/// Case-insensitive; `I`/`L` read as `1` and `O` as `0`. Positions in
/// errors are 0-based character offsets.
///
/// # Example
/// ```
/// use crockid::codec::decode;
/// assert_eq!(decode("c1s").unwrap(), 12345);
/// ```
pub fn decode(input: &str) -> Result<u64, DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let mut result: u64 = 0;

    for (position, c) in input.chars().enumerate() {
        let value = symbol_value(c).ok_or(DecodeError::InvalidCharacter { char: c, position })?;

        if result > u64::MAX / BASE {
            return Err(DecodeError::Overflow { position });
        }
        result = (result * BASE)
            .checked_add(u64::from(value))
            .ok_or(DecodeError::Overflow { position })?;
    }

    Ok(result)
}

/// Normalizes user input in a single pass.
///
/// ## Rules
/// 1. Uppercase every letter
/// 2. Drop spaces and hyphens (formatting, not data)
/// 3. Replace `I` and `L` with `1`, `O` with `0`
///
/// The output is not validated; `U` and punctuation survive and are
/// rejected later by [`decode`].
///
/// # Example
/// ```
/// use crockid::codec::normalize;
/// assert_eq!(normalize("abc-lo1 x"), "ABC101X");
/// ```
pub fn normalize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        if FORMATTING_CHARS.contains(&c) {
            continue;
        }
        for upper in c.to_uppercase() {
            result.push(match upper {
                'I' | 'L' => '1',
                'O' => '0',
                other => other,
            });
        }
    }

    result
}

/// Inserts a hyphen between every `size` characters for display.
///
/// `size == 0` returns the input unchanged. [`normalize`] removes the
/// hyphens again.
///
/// # Example
/// ```
/// use crockid::codec::group;
/// assert_eq!(group("ABCDEFGH", 4), "ABCD-EFGH");
/// ```
pub fn group(input: &str, size: usize) -> String {
    if size == 0 {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len() + input.len() / size);
    for (i, c) in input.chars().enumerate() {
        if i > 0 && i % size == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }

    result
}

//! # Errors
//!
//! Typed errors returned by the codec and checksum functions.
//! Every fallible operation reports the exact failing position so that
//! malformed identifiers can be pinpointed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors from fixed-width encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Requested width was zero.
    #[error("invalid length: width must be at least 1")]
    InvalidLength,

    /// Value needs more symbols than the requested width.
    #[error("value {value} does not fit in {length} symbols")]
    ValueTooLarge { value: u64, length: usize },
}

/// Errors from decoding a Base32 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty input")]
    EmptyInput,

    /// Character has no mapping (e.g. `U` or punctuation).
    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    /// Accumulated value would exceed `u64::MAX`.
    #[error("value overflows 64 bits at position {position}")]
    Overflow { position: usize },
}

/// Errors from checksum computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },
}

//! # Constants
//!
//! Centralized constants for magic values used throughout crockid.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Alphabet
// =============================================================================

/// Crockford's Base32 alphabet (excludes I, L, O, U for readability).
///
/// Position is value. Previously issued codes depend on this ordering.
pub const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of bits carried by one symbol.
pub const BITS_PER_SYMBOL: u32 = 5;

/// Mask selecting the low 5 bits of a symbol value.
pub const SYMBOL_MASK: u8 = 0x1F;

/// Longest compact encoding of a `u64` (`ceil(64 / 5)`).
pub const MAX_COMPACT_LEN: usize = 13;

/// Formatting characters removed by normalization.
pub const FORMATTING_CHARS: &[char] = &[' ', '-'];

/// Separator inserted when grouping codes for display.
pub const GROUP_SEPARATOR: char = '-';

// =============================================================================
// Checksum
// =============================================================================

/// CRC-10 polynomial (`x^10 + x^5 + x^4 + x^1 + 1`).
pub const CRC10_POLY: u16 = 0x233;

/// Mask selecting the 10 meaningful checksum bits.
pub const CRC10_MASK: u16 = 0x3FF;

/// Bit tested before each shift step.
pub const CRC10_TOP_BIT: u16 = 1 << 9;

/// Number of trailing checksum symbols.
pub const CHECKSUM_LEN: usize = 2;

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "crockid";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

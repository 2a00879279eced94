//! # crockid
//!
//! Human-readable identifiers for order codes, license keys, and short URLs.
//!
//! Values are encoded with Crockford's Base32 and can carry a two-character
//! CRC-10 checksum that catches mistyped, swapped, or doubled characters.
//!
//! ## Features
//!
//! - **Forgiving decoding**: Case-insensitive, reads `I`/`L` as `1` and `O` as `0`
//! - **Fixed or compact width**: Zero-padded codes or the shortest form
//! - **Checksums**: Append, validate, strip, and extract a 2-symbol suffix
//! - **Pattern IDs**: Date, time, and random tokens for generated identifiers
//!
//! ## Example
//!
//! ```
//! use crockid::{checksum, codec};
//!
//! let code = checksum::append(&codec::encode_fixed(12345, 6)?)?;
//! assert_eq!(code, "000C1S69");
//! assert!(checksum::validate("000c1s69"));
//! assert_eq!(codec::decode(&checksum::strip(&code))?, 12345);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;

pub use config::{set_home_override, Config};
pub use error::{ChecksumError, DecodeError, EncodeError};

//! # Validate Command
//!
//! Checks a code's trailing checksum.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{checksum, codec};

/// Returns true if the normalized input carries a correct checksum.
pub fn run(input: &str) -> bool {
    checksum::validate(&codec::normalize(input))
}

/// Executes the validate command, printing `valid` or `invalid`.
pub fn execute(input: &str) -> bool {
    let valid = run(input);
    println!("{}", if valid { "valid" } else { "invalid" });
    valid
}

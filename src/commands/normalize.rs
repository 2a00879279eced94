//! # Normalize Command
//!
//! Prints the canonical form of user input.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::codec;

/// Executes the normalize command.
pub fn execute(input: &str) -> Result<()> {
    println!("{}", codec::normalize(input));
    Ok(())
}

//! # Checksum Command
//!
//! Computes the checksum for a code.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{checksum, codec};

/// Arguments for the checksum command
#[derive(Debug, Clone, Default)]
pub struct ChecksumArgs {
    pub data: String,
    /// Print only the two checksum characters
    pub only: bool,
}

/// Returns the checksummed code, or the checksum alone with `only`.
///
/// Formatting characters are removed first.
pub fn run(args: &ChecksumArgs) -> Result<String> {
    let data = codec::normalize(&args.data);
    let result = if args.only {
        checksum::calculate(&data)
    } else {
        checksum::append(&data)
    };
    result.with_context(|| format!("Cannot checksum '{}'", args.data))
}

/// Executes the checksum command.
pub fn execute(args: &ChecksumArgs) -> Result<()> {
    println!("{}", run(args)?);
    Ok(())
}

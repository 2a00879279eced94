//! # Decode Command
//!
//! Decodes a Base32 code back to its decimal value.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{checksum, codec};

/// Arguments for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    pub code: String,
    /// Input carries a trailing checksum to verify and strip
    pub checksum: bool,
}

/// Normalizes the input, checks and strips the checksum if requested,
/// and decodes the rest.
pub fn run(args: &DecodeArgs) -> Result<u64> {
    let code = codec::normalize(&args.code);

    let data = if args.checksum {
        if !checksum::validate(&code) {
            anyhow::bail!("Checksum mismatch for '{}'", args.code);
        }
        checksum::strip(&code)
    } else {
        code
    };

    codec::decode(&data).with_context(|| format!("Failed to decode '{}'", args.code))
}

/// Executes the decode command.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    println!("{}", run(args)?);
    Ok(())
}

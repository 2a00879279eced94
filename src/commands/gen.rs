//! # Gen Command
//!
//! Generates identifiers from a pattern.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{codec, config::Config, id};

/// Arguments for the gen command
#[derive(Debug, Clone)]
pub struct GenArgs {
    /// Pattern (overrides config)
    pub pattern: Option<String>,
    /// Number of IDs to generate
    pub count: usize,
    /// Skip the checksum even if the config enables it
    pub no_checksum: bool,
}

impl Default for GenArgs {
    fn default() -> Self {
        Self {
            pattern: None,
            count: 1,
            no_checksum: false,
        }
    }
}

/// Generates `args.count` IDs.
pub fn run(args: &GenArgs, config: &Config) -> Result<Vec<String>> {
    let pattern = args.pattern.as_deref().unwrap_or(&config.id_pattern);
    let with_checksum = config.gen_checksum && !args.no_checksum;

    (0..args.count)
        .map(|_| -> Result<String> {
            let id = if with_checksum {
                id::generate_checked(pattern)
                    .with_context(|| format!("Pattern '{pattern}' produces non-Base32 characters"))?
            } else {
                id::generate(pattern)
            };
            Ok(match config.group {
                Some(size) => codec::group(&codec::normalize(&id), size),
                None => id,
            })
        })
        .collect()
}

/// Executes the gen command, printing one ID per line.
pub fn execute(args: &GenArgs) -> Result<()> {
    let config = Config::load()?;
    for id in run(args, &config)? {
        println!("{id}");
    }
    Ok(())
}

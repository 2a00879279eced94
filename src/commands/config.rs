//! # Config Command
//!
//! Shows the effective configuration or writes a default config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::Config;

/// Executes the config command.
pub fn execute(init: bool) -> Result<()> {
    if init {
        match Config::create_default_if_missing()? {
            Some(path) => eprintln!("{} {}", "Created".green(), path.display()),
            None => eprintln!(
                "{} config already exists, leaving it unchanged",
                "warning:".yellow().bold()
            ),
        }
        return Ok(());
    }

    let config = Config::load()?;
    match Config::path() {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not found, using defaults)", path.display()),
        None => println!("# (no home directory, using defaults)"),
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

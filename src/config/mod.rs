//! # Configuration
//!
//! Optional user configuration stored at `~/.config/crockid/config`.
//! A missing file means defaults; command-line flags override file values.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME},
    id::DEFAULT_PATTERN,
};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fixed width for `encode` (compact encoding when unset)
    #[serde(default)]
    pub width: Option<usize>,

    /// Whether `encode` appends a checksum
    #[serde(default)]
    pub checksum: bool,

    /// Hyphen grouping size for displayed codes
    #[serde(default)]
    pub group: Option<usize>,

    /// Pattern for `gen`
    #[serde(default = "default_id_pattern")]
    pub id_pattern: String,

    /// Whether `gen` appends a checksum
    #[serde(default = "default_true")]
    pub gen_checksum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            checksum: false,
            group: None,
            id_pattern: DEFAULT_PATTERN.to_string(),
            gen_checksum: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_id_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Config {
    /// Returns the path to the config file (~/.config/crockid/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads and parses a config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Writes the default config with comments.
    /// Returns the path if created, `None` if a config already exists.
    pub fn create_default_if_missing() -> Result<Option<PathBuf>> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok(None);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, Self::default().to_commented_toml())
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(Some(path))
    }

    /// Renders the config as TOML with comments for every option.
    ///
    /// Unset optional fields are written as commented examples.
    pub fn to_commented_toml(&self) -> String {
        let optional = |value: Option<usize>, key: &str, example: usize| {
            value.map_or_else(
                || format!("# {key} = {example}"),
                |v| format!("{key} = {v}"),
            )
        };

        let width_line = optional(self.width, "width", 8);
        let group_line = optional(self.group, "group", 4);

        format!(
            r#"# crockid Configuration
# Location: ~/.config/crockid/config
# Command-line flags override these values.

# Fixed width for `cid encode` (left-padded with '0').
# If not set, values are encoded with the fewest symbols possible.
{width_line}

# Whether `cid encode` appends the two-character checksum.
# Default: false
checksum = {checksum}

# Insert a hyphen every N characters in encoded and generated output.
# Hyphens are ignored when decoding.
{group_line}

# Pattern for `cid gen`.
# Default: "%y%m%d-%T%RRR" (e.g., "260109-0A2BK4M")
#
# Available tokens:
#   %y  - Year (2 digits, e.g., "26" for 2026)
#   %m  - Month (2 digits, 01-12)
#   %d  - Day of month (2 digits, 01-31)
#   %j  - Day of year (3 digits, 001-366)
#   %T  - Time as Base32 (4 chars) - seconds since midnight UTC
#   %R  - Random Base32 character (repeat for more: %RRR = 3 chars)
#   %%  - Literal percent sign
id_pattern = {id_pattern}

# Whether `cid gen` appends the two-character checksum.
# Default: true
gen_checksum = {gen_checksum}
"#,
            checksum = self.checksum,
            id_pattern = toml::Value::String(self.id_pattern.clone()),
            gen_checksum = self.gen_checksum,
        )
    }
}

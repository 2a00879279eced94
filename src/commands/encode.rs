//! # Encode Command
//!
//! Encodes a decimal value as a Base32 code.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{checksum, codec, config::Config};

/// Arguments for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeArgs {
    pub value: u64,
    /// Fixed width (overrides config)
    pub width: Option<usize>,
    /// Append checksum even if the config disables it
    pub checksum: bool,
    /// Skip the checksum even if the config enables it
    pub no_checksum: bool,
    /// Hyphen grouping size (overrides config)
    pub group: Option<usize>,
}

/// Builds the encoded output for the given arguments and config.
pub fn render(args: &EncodeArgs, config: &Config) -> Result<String> {
    let code = match args.width.or(config.width) {
        Some(width) => codec::encode_fixed(args.value, width)?,
        None => codec::encode_compact(args.value),
    };

    let with_checksum = if args.no_checksum {
        false
    } else {
        args.checksum || config.checksum
    };

    let code = if with_checksum {
        checksum::append(&code)?
    } else {
        code
    };

    Ok(match args.group.or(config.group) {
        Some(size) => codec::group(&code, size),
        None => code,
    })
}

/// Executes the encode command.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let config = Config::load()?;
    println!("{}", render(args, &config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: u64) -> EncodeArgs {
        EncodeArgs {
            value,
            ..EncodeArgs::default()
        }
    }

    #[test]
    fn test_compact_by_default() {
        assert_eq!(render(&args(12345), &Config::default()).unwrap(), "C1S");
    }

    #[test]
    fn test_width_and_checksum() {
        let args = EncodeArgs {
            width: Some(6),
            checksum: true,
            ..args(12345)
        };
        assert_eq!(render(&args, &Config::default()).unwrap(), "000C1S69");
    }

    #[test]
    fn test_config_supplies_defaults() {
        let config = Config {
            width: Some(6),
            group: Some(3),
            ..Config::default()
        };
        assert_eq!(render(&args(12345), &config).unwrap(), "000-C1S");
    }

    #[test]
    fn test_flag_overrides_config_width() {
        let config = Config {
            width: Some(2),
            ..Config::default()
        };
        let args = EncodeArgs {
            width: Some(3),
            ..args(1024)
        };
        assert_eq!(render(&args, &config).unwrap(), "100");
    }

    #[test]
    fn test_flag_disables_config_checksum() {
        let config = Config {
            checksum: true,
            ..Config::default()
        };
        assert_eq!(render(&args(12345), &config).unwrap(), "C1S69");

        let args = EncodeArgs {
            no_checksum: true,
            ..args(12345)
        };
        assert_eq!(render(&args, &config).unwrap(), "C1S");
    }

    #[test]
    fn test_overflow_is_error() {
        let args = EncodeArgs {
            width: Some(2),
            ..args(1024)
        };
        let err = render(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("does not fit in 2 symbols"));
    }
}

//! # crockid CLI
//!
//! Command-line interface for encoding, decoding, and checking identifiers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use crockid::commands::{self, ChecksumArgs, DecodeArgs, EncodeArgs, GenArgs};

const GLOBAL_HELP: &str = "\
Alphabet:
  0123456789ABCDEFGHJKMNPQRSTVWXYZ  (Crockford Base32, no I, L, O, U)
  Input is case-insensitive; I and L read as 1, O reads as 0.
  Spaces and hyphens are ignored.

Configuration File:
  ~/.config/crockid/config   Defaults for width, checksum, grouping, ID pattern

Examples:
  cid encode 12345 --width 6 --checksum   000C1S69
  cid decode 000-c1s-69 --checksum        12345
  cid validate 000C1S69                   valid
  cid gen --count 3                       Three checksummed IDs";

#[derive(Parser)]
#[command(name = "cid")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Human-readable identifiers with Crockford Base32 and a CRC-10 checksum")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a decimal value as Base32
    #[command(after_help = "Examples:\n  \
cid encode 99999                  31MZ\n  \
cid encode 12345 --width 6        000C1S\n  \
cid encode 12345 -w 6 -c -g 4     000C-1S69")]
    Encode {
        /// Value to encode (0 to 18446744073709551615)
        value: u64,

        /// Fixed width, left-padded with '0' (default: shortest form)
        #[arg(short, long)]
        width: Option<usize>,

        /// Append the two-character checksum
        #[arg(short, long)]
        checksum: bool,

        /// Do not append a checksum, even if the config enables it
        #[arg(long, conflicts_with = "checksum")]
        no_checksum: bool,

        /// Insert a hyphen every N characters
        #[arg(short, long, value_name = "N")]
        group: Option<usize>,
    },

    /// Decode a Base32 code to its decimal value
    Decode {
        /// Code to decode (case-insensitive, hyphens ignored)
        code: String,

        /// Verify and strip a trailing checksum first
        #[arg(short, long)]
        checksum: bool,
    },

    /// Print the canonical form of a code
    Normalize {
        /// Input to normalize
        input: String,
    },

    /// Compute the checksum for a code
    Checksum {
        /// Code to checksum
        data: String,

        /// Print only the two checksum characters
        #[arg(long)]
        only: bool,
    },

    /// Check a code's trailing checksum (exit status 1 if invalid)
    Validate {
        /// Checksummed code
        input: String,
    },

    /// Generate identifiers from a pattern
    #[command(after_help = "Pattern Tokens:\n  \
%y  Year (2 digits)           %m  Month (01-12)\n  \
%d  Day of month (01-31)      %j  Day of year (001-366)\n  \
%T  Time as Base32 (4 chars)  %R  Random Base32 char (repeat: %RRR)\n  \
%%  Literal percent sign")]
    Gen {
        /// Pattern (default from config, or %y%m%d-%T%RRR)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Number of IDs to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Do not append a checksum
        #[arg(long)]
        no_checksum: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write a commented default config file (never overwrites)
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

/// Runs the CLI. Returns `Ok(false)` when a check fails without an error.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            value,
            width,
            checksum,
            no_checksum,
            group,
        } => commands::encode(&EncodeArgs {
            value,
            width,
            checksum,
            no_checksum,
            group,
        })?,

        Commands::Decode { code, checksum } => {
            commands::decode(&DecodeArgs { code, checksum })?;
        }

        Commands::Normalize { input } => commands::normalize(&input)?,

        Commands::Checksum { data, only } => commands::checksum(&ChecksumArgs { data, only })?,

        Commands::Validate { input } => return Ok(commands::validate(&input)),

        Commands::Gen {
            pattern,
            count,
            no_checksum,
        } => commands::gen(&GenArgs {
            pattern,
            count,
            no_checksum,
        })?,

        Commands::Config { init } => commands::config(init)?,

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command())?,
    }

    Ok(true)
}

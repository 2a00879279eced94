//! # Completions Command
//!
//! Prints a shell completion script for `cid`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;

/// Renders the completion script for `cmd` in the given shell.
pub fn render(shell: Shell, cmd: &mut Command) -> Result<String> {
    let bin_name = cmd.get_name().to_string();
    let mut script = Vec::new();
    clap_complete::generate(shell, cmd, bin_name, &mut script);
    String::from_utf8(script).context("Completion script is not valid UTF-8")
}

/// Executes the completions command.
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let script = render(shell, cmd)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(script.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Arg;

    use super::*;

    fn sample_command() -> Command {
        Command::new("cid").subcommand(Command::new("encode").arg(Arg::new("value")))
    }

    #[test]
    fn test_bash_script_names_binary_and_subcommands() {
        let script = render(Shell::Bash, &mut sample_command()).unwrap();
        assert!(script.contains("cid"));
        assert!(script.contains("encode"));
    }

    #[test]
    fn test_every_shell_renders() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::Elvish, Shell::PowerShell] {
            assert!(!render(shell, &mut sample_command()).unwrap().is_empty());
        }
    }
}

// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;
use schedcc_core::APP_NAME;

use crate::Cli;

/// Prints a completion script covering every subcommand, filter flag and
/// common view name of the `schedcc` binary.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a shell completion script for schedcc")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches.get_one::<Shell>("shell").copied().unwrap_or_default();
        Self { shell }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        match self.shell.builtin() {
            Some(shell) => generate(shell, &mut cmd, APP_NAME, buf),
            None => generate(clap_complete_nushell::Nushell, &mut cmd, APP_NAME, buf),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    #[default]
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`, `None` for nushell.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as Builtin;
        match self {
            Shell::Bash => Some(Builtin::Bash),
            Shell::Elvish => Some(Builtin::Elvish),
            Shell::Fish => Some(Builtin::Fish),
            Shell::PowerShell => Some(Builtin::PowerShell),
            Shell::Zsh => Some(Builtin::Zsh),
            Shell::Nushell => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut output = vec![];
        CmdGenerateCompletion { shell }.generate(&mut output);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_fish_script_completes_views_and_subcommands() {
        let script = script(Shell::Fish);
        assert!(script.contains("complete -c schedcc"));
        assert!(script.contains("search"));
        assert!(script.contains("export"));
        assert!(script.contains("dom-confirmed-january"));
        assert!(script.contains("eqs-workshops"));
    }

    #[test]
    fn test_nushell_script_uses_binary_name() {
        let script = script(Shell::Nushell);
        assert!(script.contains("schedcc search"));
        assert!(script.contains("schedcc export"));
    }

    #[test]
    fn test_parse_shell_variants() {
        for (name, expected) in [
            ("bash", Shell::Bash),
            ("elvish", Shell::Elvish),
            ("fish", Shell::Fish),
            ("nushell", Shell::Nushell),
            ("powershell", Shell::PowerShell),
            ("zsh", Shell::Zsh),
        ] {
            let matches = Cli::command()
                .try_get_matches_from(["schedcc", "generate-completion", name])
                .unwrap_or_else(|e| panic!("Failed to parse for shell '{name}': {e}"));
            let sub_matches = matches.subcommand_matches(CmdGenerateCompletion::NAME).unwrap();
            assert_eq!(CmdGenerateCompletion::from(sub_matches).shell, expected);
        }
    }
}

//! `renamo completions` - emit shell completion scripts to stdout.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

pub fn execute(args: &CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let mut stdout = std::io::stdout();

    match args.shell {
        Shell::Bash => generate(clap_complete::shells::Bash, &mut cmd, "renamo", &mut stdout),
        Shell::Zsh => generate(clap_complete::shells::Zsh, &mut cmd, "renamo", &mut stdout),
        Shell::Fish => generate(clap_complete::shells::Fish, &mut cmd, "renamo", &mut stdout),
        Shell::PowerShell => generate(
            clap_complete::shells::PowerShell,
            &mut cmd,
            "renamo",
            &mut stdout,
        ),
        Shell::Elvish => generate(
            clap_complete::shells::Elvish,
            &mut cmd,
            "renamo",
            &mut stdout,
        ),
    }

    Ok(())
}

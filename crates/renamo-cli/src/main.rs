//! Renamo CLI entry point.
//!
//! Startup order matters: parse args first (so `--help` works even with a
//! broken config), then logging, then config, then dispatch.
//!
//! # Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! | 0    | Success                              |
//! | 1    | Internal error                       |
//! | 2    | User error (bad flags, cancelled)    |
//! | 3    | Root path not found                  |
//! | 4    | Configuration error                  |
//! | 5    | Completed with skipped files         |

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use cli::{Cli, Commands};
use config::AppConfig;
use error::{CliError, CliResult};
use output::OutputManager;

fn main() {
    // Load .env if present; ignore absence.
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders its own message (including --help/--version).
            e.print().ok();
            std::process::exit(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = logging::init_logging(cli.global.verbose, cli.global.quiet) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            err.log();
            eprintln!("{}", err.format_plain(cli.global.verbose > 0));
            std::process::exit(err.exit_code() as i32);
        }
    };

    let out = OutputManager::new(
        cli.global.output_format,
        cli.global.no_color,
        cli.global.quiet,
        &config,
    );

    if let Err(err) = run(&cli, &config, &out) {
        handle_error(err, &out, cli.global.verbose > 0);
    }
}

fn run(cli: &Cli, config: &AppConfig, out: &OutputManager) -> CliResult<()> {
    match &cli.command {
        Commands::Apply(args) => commands::apply::execute(args, config, out),
        Commands::Init(args) => commands::init::execute(args, out),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, out),
    }
}

fn handle_error(err: CliError, out: &OutputManager, verbose: bool) -> ! {
    err.log();

    let rendered = if out.supports_color() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprintln!("{rendered}");

    std::process::exit(err.exit_code() as i32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_matches_manifest() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "renamo",
    bin_name = "renamo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f500} Recursive substring file renamer",
    long_about = "Renamo walks a directory tree and renames files whose names \
                  contain configured literal substrings, replacing every \
                  occurrence. Directory names are left untouched.",
    after_help = "EXAMPLES:\n\
        \x20 renamo apply ./project --match GD0 --replace BR0\n\
        \x20 renamo apply --match Godot --replace Bradot --match .gd --replace .br\n\
        \x20 renamo apply ./project --dry-run\n\
        \x20 renamo completions bash > /usr/share/bash-completion/completions/renamo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rename files under a directory tree.
    #[command(
        visible_alias = "a",
        about = "Apply rename rules to a tree",
        after_help = "EXAMPLES:\n\
            \x20 renamo apply                                  # rules from config, root '.'\n\
            \x20 renamo apply ./assets -m GD0 -r BR0\n\
            \x20 renamo apply ./assets -m GD0 -r BR0 --dry-run\n\
            \x20 renamo apply ./assets -m gdscript -r brscript -m .gd -r .br"
    )]
    Apply(ApplyArgs),

    /// Initialise a Renamo configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 renamo init           # default location\n\
            \x20 renamo init --local   # local config in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 renamo completions bash > ~/.local/share/bash-completion/completions/renamo\n\
            \x20 renamo completions zsh  > ~/.zfunc/_renamo\n\
            \x20 renamo completions fish > ~/.config/fish/completions/renamo.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Renamo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 renamo config get output.no_color\n\
            \x20 renamo config list\n\
            \x20 renamo config path"
    )]
    Config(ConfigCommands),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `renamo apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Root of the tree to rename. An explicit parameter with a default,
    /// never implicit process-wide state.
    #[arg(value_name = "ROOT", default_value = ".", help = "Root directory to traverse")]
    pub root: PathBuf,

    /// Substring to search for. Repeatable; pairs with `--replace` in order.
    #[arg(
        short = 'm',
        long = "match",
        value_name = "SUBSTRING",
        action = clap::ArgAction::Append,
        help = "Literal substring to find (repeatable, ordered)"
    )]
    pub matches: Vec<String>,

    /// Replacement for the corresponding `--match`.
    #[arg(
        short = 'r',
        long = "replace",
        value_name = "SUBSTRING",
        action = clap::ArgAction::Append,
        help = "Replacement for the corresponding --match (repeatable)"
    )]
    pub replaces: Vec<String>,

    /// Report what would be renamed without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be renamed without renaming")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and rename immediately"
    )]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `renamo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.renamo.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `renamo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `renamo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.no_color`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_apply_with_rule_pairs() {
        let cli = Cli::parse_from([
            "renamo", "apply", "./tree", "-m", "GD0", "-r", "BR0", "-m", ".gd", "-r", ".br",
        ]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected Apply command");
        };
        assert_eq!(args.root, PathBuf::from("./tree"));
        assert_eq!(args.matches, vec!["GD0", ".gd"]);
        assert_eq!(args.replaces, vec!["BR0", ".br"]);
    }

    #[test]
    fn apply_root_defaults_to_current_directory() {
        let cli = Cli::parse_from(["renamo", "apply", "-m", "a", "-r", "b"]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected Apply command");
        };
        assert_eq!(args.root, PathBuf::from("."));
        assert!(!args.dry_run);
        assert!(!args.yes);
    }

    #[test]
    fn apply_alias_works() {
        let cli = Cli::parse_from(["renamo", "a", "--dry-run"]);
        let Commands::Apply(args) = cli.command else {
            panic!("expected Apply command");
        };
        assert!(args.dry_run);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["renamo", "--quiet", "--verbose", "apply"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::parse_from(["renamo", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs { shell: Shell::Zsh })
        ));
    }

    #[test]
    fn config_get_takes_a_key() {
        let cli = Cli::parse_from(["renamo", "config", "get", "output.no_color"]);
        let Commands::Config(ConfigCommands::Get { key }) = cli.command else {
            panic!("expected config get");
        };
        assert_eq!(key, "output.no_color");
    }
}

//! `renamo apply` - rename files under a directory tree.

use std::io::Write as _;

use tracing::{debug, info};

use renamo_adapters::LocalFilesystem;
use renamo_core::application::ports::{Notifier, NullNotifier};
use renamo_core::application::RenameService;
use renamo_core::domain::{RenameReport, Rule, RuleSet};

use crate::cli::{ApplyArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::{ConsoleNotifier, OutputManager};

pub fn execute(args: &ApplyArgs, config: &AppConfig, out: &OutputManager) -> CliResult<()> {
    let rules = build_rules(args, config)?;

    // Validate the root up front so a typo fails before the prompt.
    if !args.root.is_dir() {
        return Err(CliError::InvalidRoot {
            path: args.root.clone(),
        });
    }

    debug!(root = %args.root.display(), rules = rules.len(), "starting apply");

    if !args.dry_run && !args.yes && !out.is_quiet() && out.format() != OutputFormat::Json {
        show_plan(args, &rules, out);
        if !confirm("Proceed with renaming?")? {
            return Err(CliError::Cancelled);
        }
    }

    let notifier: Box<dyn Notifier> = match out.format() {
        OutputFormat::Json => Box::new(NullNotifier),
        _ => Box::new(ConsoleNotifier::new(*out, args.dry_run)),
    };

    let service = RenameService::new(Box::new(LocalFilesystem::new()), notifier);
    let report = service.rename_tree(&args.root, &rules, args.dry_run)?;

    info!(
        visited = report.visited,
        renamed = report.renamed_count(),
        skipped = report.skipped.len(),
        "apply finished"
    );

    match out.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::InvalidInput {
                    message: format!("failed to serialize report: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{json}");
        }
        _ => print_summary(&report, args.dry_run, out),
    }

    if report.has_failures() {
        return Err(CliError::PartialFailure {
            skipped: report.skipped.len(),
        });
    }

    Ok(())
}

/// Build the rule set from `--match`/`--replace` pairs, falling back to the
/// configured defaults when no flags were given.
fn build_rules(args: &ApplyArgs, config: &AppConfig) -> CliResult<RuleSet> {
    if args.matches.len() != args.replaces.len() {
        return Err(CliError::RuleMismatch {
            matches: args.matches.len(),
            replaces: args.replaces.len(),
        });
    }

    let rules: Vec<Rule> = if args.matches.is_empty() {
        config
            .defaults
            .rules
            .iter()
            .map(|r| Rule::new(r.find.clone(), r.replace.clone()))
            .collect()
    } else {
        args.matches
            .iter()
            .zip(&args.replaces)
            .map(|(find, replace)| Rule::new(find.clone(), replace.clone()))
            .collect()
    };

    if rules.is_empty() {
        return Err(CliError::NoRules);
    }

    Ok(RuleSet::new(rules).map_err(renamo_core::error::RenamoError::from)?)
}

fn show_plan(args: &ApplyArgs, rules: &RuleSet, out: &OutputManager) {
    out.header(&format!("Renaming under: {}", args.root.display()));
    for rule in rules.rules() {
        out.print(&format!("  {rule}"));
    }
    out.print("");
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` declines.
fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{prompt} [y/N]: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_summary(report: &RenameReport, dry_run: bool, out: &OutputManager) {
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    let mut line = format!(
        "{verb} {} of {} file(s)",
        report.renamed_count(),
        report.visited
    );
    if !report.skipped.is_empty() {
        line.push_str(&format!(
            ", skipped {} ({} collision, {} permission, {} other)",
            report.skipped.len(),
            report.collision_count(),
            report.permission_count(),
            report.io_count()
        ));
    }

    if report.has_failures() {
        out.info(&line);
    } else {
        out.success(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ApplyArgs,
    }

    fn parse(argv: &[&str]) -> ApplyArgs {
        let mut full = vec!["harness"];
        full.extend_from_slice(argv);
        Harness::parse_from(full).args
    }

    #[test]
    fn flags_build_ordered_rules() {
        let args = parse(&["-m", "GD0", "-r", "BR0", "-m", ".gd", "-r", ".br"]);
        let rules = build_rules(&args, &AppConfig::default()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rewrite("GD0Main.gd"), "BR0Main.br");
    }

    #[test]
    fn mismatched_pairs_are_rejected() {
        let args = parse(&["-m", "GD0"]);
        let err = build_rules(&args, &AppConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::RuleMismatch {
                matches: 1,
                replaces: 0
            }
        ));
    }

    #[test]
    fn no_flags_falls_back_to_config_defaults() {
        let args = parse(&[]);
        let rules = build_rules(&args, &AppConfig::default()).unwrap();
        assert_eq!(rules.rewrite("GD0Scene.tres"), "BR0Scene.tres");
    }

    #[test]
    fn empty_config_rules_without_flags_is_an_error() {
        let args = parse(&[]);
        let mut config = AppConfig::default();
        config.defaults.rules.clear();
        assert!(matches!(
            build_rules(&args, &config).unwrap_err(),
            CliError::NoRules
        ));
    }

    #[test]
    fn empty_match_flag_surfaces_domain_validation() {
        let args = parse(&["-m", "", "-r", "BR0"]);
        let err = build_rules(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

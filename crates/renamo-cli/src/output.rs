//! Terminal output management.
//!
//! [`OutputManager`] owns all user-facing printing in the CLI layer, and
//! [`ConsoleNotifier`] streams per-file events from the core service as they
//! happen, so a long run shows progress instead of a final dump.

use owo_colors::OwoColorize;

use renamo_core::application::ports::Notifier;
use renamo_core::domain::{RenameRecord, SkipRecord};

use crate::cli::OutputFormat;
use crate::config::AppConfig;

/// Central output manager for consistent, styled CLI messages.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl OutputManager {
    /// Resolve the effective format and colour support from flags + config.
    pub fn new(format: OutputFormat, no_color_flag: bool, quiet: bool, config: &AppConfig) -> Self {
        let format = match format {
            OutputFormat::Auto => match config.output.format.as_str() {
                "human" => OutputFormat::Human,
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                _ => {
                    if console::user_attended() {
                        OutputFormat::Human
                    } else {
                        OutputFormat::Plain
                    }
                }
            },
            explicit => explicit,
        };

        let color = matches!(format, OutputFormat::Human)
            && !no_color_flag
            && !config.output.no_color
            && console::colors_enabled();

        Self {
            format,
            color,
            quiet,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a plain line, suppressed by `--quiet`.
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a success message with a check mark.
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("{} {}", "\u{2713}".green().bold(), message);
        } else {
            println!("{message}");
        }
    }

    /// Print a warning to stderr. Warnings survive `--quiet`; a skipped
    /// file must never pass silently.
    pub fn warning(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", "\u{26a0}".yellow().bold(), message.yellow());
        } else {
            eprintln!("Warning: {message}");
        }
    }

    /// Print an error to stderr. Never suppressed.
    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("{} {}", "\u{2717}".red().bold(), message.red());
        } else {
            eprintln!("Error: {message}");
        }
    }

    /// Print an informational note.
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("{} {}", "\u{2139}".blue(), message);
        } else {
            println!("{message}");
        }
    }

    /// Print a section header.
    pub fn header(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            println!("\n{}", message.bold());
        } else {
            println!("\n{message}");
        }
    }
}

/// Streams rename events to the terminal as the tree walk progresses.
pub struct ConsoleNotifier {
    out: OutputManager,
    dry_run: bool,
}

impl ConsoleNotifier {
    pub fn new(out: OutputManager, dry_run: bool) -> Self {
        Self { out, dry_run }
    }
}

impl Notifier for ConsoleNotifier {
    fn renamed(&self, record: &RenameRecord) {
        // Line format consumed by scripts; keep it stable.
        let line = format!("Renamed: {} -> {}", record.from, record.to);
        if self.dry_run {
            self.out.print(&format!("[dry-run] {line}"));
        } else {
            self.out.print(&line);
        }
    }

    fn skipped(&self, record: &SkipRecord) {
        self.out.warning(&format!(
            "skipped '{}' in '{}': {}",
            record.name,
            record.dir.display(),
            record.reason
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(format: OutputFormat, no_color: bool) -> OutputManager {
        OutputManager::new(format, no_color, false, &AppConfig::default())
    }

    #[test]
    fn explicit_plain_disables_color() {
        let out = manager(OutputFormat::Plain, false);
        assert_eq!(out.format(), OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn no_color_flag_disables_color_even_for_human() {
        let out = manager(OutputFormat::Human, true);
        assert_eq!(out.format(), OutputFormat::Human);
        assert!(!out.supports_color());
    }

    #[test]
    fn config_format_overrides_auto() {
        let mut cfg = AppConfig::default();
        cfg.output.format = "json".into();
        let out = OutputManager::new(OutputFormat::Auto, false, false, &cfg);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn quiet_is_carried_through() {
        let out = OutputManager::new(OutputFormat::Plain, false, true, &AppConfig::default());
        assert!(out.is_quiet());
    }
}

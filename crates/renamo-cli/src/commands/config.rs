//! `renamo config` - inspect the loaded configuration.

use crate::cli::ConfigCommands;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub fn execute(cmd: &ConfigCommands, config: &AppConfig, out: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => get(key, config),
        ConfigCommands::List => list(config),
        ConfigCommands::Path => {
            out.print(&AppConfig::config_path().display().to_string());
            Ok(())
        }
    }
}

fn get(key: &str, config: &AppConfig) -> CliResult<()> {
    let value = lookup(key, config).ok_or_else(|| CliError::InvalidInput {
        message: format!(
            "unknown configuration key '{key}' (try 'renamo config list')"
        ),
        source: None,
    })?;
    println!("{value}");
    Ok(())
}

fn lookup(key: &str, config: &AppConfig) -> Option<String> {
    match key {
        "output.no_color" => Some(config.output.no_color.to_string()),
        "output.format" => Some(config.output.format.clone()),
        "defaults.rules" => Some(
            config
                .defaults
                .rules
                .iter()
                .map(|r| format!("{} -> {}", r.find, r.replace))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

fn list(config: &AppConfig) -> CliResult<()> {
    let text = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialize configuration: {e}"),
        source: Some(Box::new(e)),
    })?;
    print!("{text}");
    Ok(())
}

//! `renamo init` - write a starter configuration file.

use tracing::info;

use crate::cli::InitArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub fn execute(args: &InitArgs, out: &OutputManager) -> CliResult<()> {
    let path = if args.local {
        AppConfig::local_config_path()
    } else {
        AppConfig::config_path()
    };

    if path.exists() && !args.force {
        return Err(CliError::ConfigError {
            message: format!(
                "configuration already exists at '{}' (use --force to overwrite)",
                path.display()
            ),
            source: None,
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let text = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("failed to serialize default configuration: {e}"),
        source: Some(Box::new(e)),
    })?;
    std::fs::write(&path, text)?;

    info!(path = %path.display(), "wrote configuration");
    out.success(&format!("Created configuration at {}", path.display()));
    out.info("Edit [[defaults.rules]] to set your rename pairs.");

    Ok(())
}

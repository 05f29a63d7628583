//! Logging initialisation built on `tracing`.
//!
//! Verbosity is driven by the global `-v`/`-q` flags; `RUST_LOG` wins when
//! set so operators can scope filters per crate.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// | Flags   | Level |
/// |---------|-------|
/// | `-q`    | error |
/// | (none)  | warn  |
/// | `-v`    | info  |
/// | `-vv`   | debug |
/// | `-vvv`+ | trace |
pub fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = derive_level(verbose, quiet);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "renamo={level},renamo_core={level},renamo_adapters={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

fn derive_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(derive_level(3, true), "error");
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(derive_level(0, false), "warn");
    }

    #[test]
    fn verbosity_scales() {
        assert_eq!(derive_level(1, false), "info");
        assert_eq!(derive_level(2, false), "debug");
        assert_eq!(derive_level(3, false), "trace");
        assert_eq!(derive_level(200, false), "trace");
    }
}

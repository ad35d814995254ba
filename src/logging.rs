use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{Error, Result};

/// Send tracing output to the log file. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::LoggingInit(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.logging.file = Some(dir.path().join("logs").join("api.log"));

        // The first call may only fail if a global subscriber already exists
        let _ = init(&config);
        assert!(dir.path().join("logs").join("api.log").exists());

        let second = init(&config);
        assert!(matches!(second, Err(Error::LoggingInit(_))));
    }
}

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `level`. With a file the log is appended there without colours,
/// otherwise it goes to stderr.
///
/// A subscriber that is already installed is left in place.
pub fn init_logger(level: &str, log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
            .try_init()
            .ok();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .ok();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logger_creates_the_file() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("trade.log");

        init_logger("debug", Some(&path))?;
        tracing::info!("logger installed");

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let result = init_logger("info", Some(Path::new("/nonexistent-dir/trade.log")));
        assert!(result.is_err());
    }
}

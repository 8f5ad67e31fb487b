use crate::domain::settings::LogSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const FALLBACK_LEVEL: &str = "warn";
const LOG_FILE_PREFIX: &str = "blehostd_req.log";

/// Keeps the file writer alive; dropping it flushes pending lines
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install the global subscriber.
///
/// Console output goes to stderr so stdout carries only encoded requests.
pub fn init_logger(settings: &LogSettings) -> anyhow::Result<LoggingGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(&settings.level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(settings.ansi_colors);

    let (file_layer, file_guard) = match &settings.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!("Logging initialized");

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_accepts_directives() {
        assert_eq!(level_filter("debug").to_string(), "debug");
        assert_eq!(
            level_filter("blehostd_proto=trace").to_string(),
            "blehostd_proto=trace"
        );
    }

    #[test]
    fn test_level_filter_falls_back_on_garbage() {
        assert_eq!(level_filter("blehostd_proto=loud").to_string(), FALLBACK_LEVEL);
    }
}

use std::path::Path;

use config::ConfigError;
use time::macros::format_description;
use tracing::Dispatch;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        time::LocalTime,
        writer::{BoxMakeWriter, MakeWriterExt},
    },
};

use crate::{
    config::Logger,
    errors::{AppError, AppResult},
};

pub(crate) const LOG_FILE_NAME: &str = "sbc_bitrate.log";

pub(crate) fn parse_log_level(level: &str) -> AppResult<tracing::Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        other => Err(AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected log level: {}",
            other
        )))),
    }
}

/// Creates the log directory when missing; fails instead of panicking when
/// it cannot be created.
pub(crate) fn build_file_appender(dir: &Path) -> AppResult<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .map_err(|err| {
            AppError::Logger(format!("open log dir {} failed: {}", dir.display(), err))
        })
}

/// Logs go to stderr so stdout only carries the report. The returned guard
/// flushes the file writer and must live until exit.
pub(crate) fn init_logger(logger: &Logger) -> AppResult<Option<WorkerGuard>> {
    let level = parse_log_level(&logger.level)?;
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let (writer, guard) = match logger.dir.as_ref() {
        Some(dir) => {
            let appender = build_file_appender(dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (
                BoxMakeWriter::new(std::io::stderr.and(non_blocking)),
                Some(guard),
            )
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_env_filter(filter)
        .with_writer(writer)
        .finish();
    tracing::dispatcher::set_global_default(Dispatch::new(subscriber))
        .map_err(|err| AppError::Logger(err.to_string()))?;
    Ok(guard)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("TRACE").unwrap(), tracing::Level::TRACE);
        assert_eq!(parse_log_level("warn").unwrap(), tracing::Level::WARN);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_build_file_appender_unwritable_dir() {
        // a regular file cannot hold a log directory
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("Cargo.toml")
            .join("logs");
        assert!(matches!(
            build_file_appender(&dir),
            Err(AppError::Logger(_))
        ));

        let logger = Logger {
            level: "info".to_owned(),
            dir: Some(dir),
        };
        assert!(matches!(init_logger(&logger), Err(AppError::Logger(_))));
    }
}

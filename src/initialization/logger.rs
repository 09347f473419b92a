//! Logger setup for applications embedding the client.
//!
//! The library itself only emits records through `log`. Applications that have
//! no logger yet can install one here, or take the preconfigured
//! [`env_logger::Builder`] and finish it themselves.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Transport crates whose chatter is capped at `Info`.
const TRANSPORT_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util"];

/// Renders a record as one JSON object.
fn json_line(ts_millis: i64, record: &Record) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":{},\"msg\":{}}}",
        ts_millis,
        record.level(),
        serde_json::Value::from(record.target()),
        serde_json::Value::from(record.args().to_string())
    )
}

/// Renders a record as `target [LEVEL] message`, level colored.
fn plain_line(record: &Record) -> String {
    let level = record.level().to_string();
    let level = match record.level() {
        Level::Error => level.red(),
        Level::Warn => level.yellow(),
        Level::Info => level.green(),
        Level::Debug => level.blue(),
        Level::Trace => level.purple(),
    };
    format!("{} [{}] {}", record.target().cyan(), level, record.args())
}

/// Returns an `env_logger` builder for this crate's records.
///
/// `RUST_LOG` is read first, then `level` is applied on top of it. Transport
/// crates never log more verbosely than `Info`, even when `level` is higher.
pub fn logger_builder(level: LevelFilter, format: LogFormat) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for module in TRANSPORT_MODULES {
        builder.filter_module(module, level.min(LevelFilter::Info));
    }

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(buf, "{}", json_line(chrono::Utc::now().timestamp_millis(), record))
        }),
        LogFormat::Plain => builder.format(|buf, record| writeln!(buf, "{}", plain_line(record))),
    };

    builder
}

/// Installs the logger from [`logger_builder`] as the global logger.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    logger_builder(level, format).try_init()?;
    Ok(())
}

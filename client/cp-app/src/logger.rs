use crate::error::{AppError, Result as AppErrorResult};

use cp_config::LogLevel;

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Start the fern logger.
///
/// stdout belongs to the terminal screens, so without a `log_file` records
/// go to stderr, coloured when `colored` is set. A log file always gets the
/// plain format plus the record's target.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let sink = match &log_file {
        Some(path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, None, true))
            .chain(open_log_file(path)?),
        None => {
            let colors = colored.then(level_colors);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.as_ref(), false)
                })
                .chain(std::io::stderr())
        }
    };

    Dispatch::new()
        .level(*log_level)
        .chain(sink)
        .apply()
        .map_err(|e| AppError::logger(format!("Failed to initialize logger: {e}")))?;

    let destination = log_file
        .as_deref()
        .map_or_else(|| "stderr".to_string(), |path| path.display().to_string());
    info!("Logger initialized: level={log_level}, output={destination}");

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn write_line(
    out: FormatCallback<'_>,
    message: &Arguments<'_>,
    record: &Record<'_>,
    colors: Option<&ColoredLevelConfig>,
    with_target: bool,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let level = match colors {
        Some(colors) => colors.color(record.level()).to_string(),
        None => record.level().to_string(),
    };

    if with_target {
        out.finish(format_args!(
            "[{date} - {level}] {message} [{}]",
            record.target()
        ));
    } else {
        out.finish(format_args!("[{date} - {level}] {message}"));
    }
}

fn open_log_file(path: &Path) -> AppErrorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::io(format!("Failed to open log file {}", path.display()), e))
}

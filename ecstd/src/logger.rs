// SPDX-License-Identifier: MPL-2.0

//! Logging support.
//!
//! The logger formats records as `LEVEL: message` and hands them to the
//! [console](crate::console). Bring-up runs before interrupts exist, so no
//! locking is needed to keep lines whole.

use core::fmt;

use log::{LevelFilter, Metadata, Record};

use crate::{Error, console, prelude::*};

static LOGGER: Logger = Logger;

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        console::print(format_args!("{}\n", Line(record)));
    }

    fn flush(&self) {}
}

/// One formatted log line, without the trailing newline.
struct Line<'a, 'b>(&'a Record<'b>);

#[cfg(feature = "log_color")]
impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use owo_colors::Style;

        let record = self.0;
        let level_style = match record.level() {
            log::Level::Error => Style::new().red(),
            log::Level::Warn => Style::new().bright_yellow(),
            log::Level::Info => Style::new().blue(),
            log::Level::Debug => Style::new().bright_green(),
            log::Level::Trace => Style::new().bright_black(),
        };
        write!(
            f,
            "{}: {}",
            level_style.style(format_args!("{:<5}", record.level())),
            record.args()
        )
    }
}

#[cfg(not(feature = "log_color"))]
impl fmt::Display for Line<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5}: {}", self.0.level(), self.0.args())
    }
}

/// Installs the logger with the maximum level `level`.
///
/// Users should avoid using the log macros before this function is called.
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|_| Error::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Parses a level name as accepted by the `EC_LOG_LEVEL` build setting.
pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    Some(match value {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    })
}

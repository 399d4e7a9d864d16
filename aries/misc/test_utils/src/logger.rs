use std::{env, io::Write, sync::Once};

use chrono::Local;
use env_logger::{fmt::Formatter, Builder as EnvLoggerBuilder};
use log::{LevelFilter, Record};

use crate::errors::error::TestUtilsResult;

static TEST_LOGGING_INIT: Once = Once::new();

/// Installs the test logger once per process. Does nothing unless `RUST_LOG` is set.
pub fn init_logger() {
    TEST_LOGGING_INIT.call_once(|| {
        if let Ok(pattern) = env::var("RUST_LOG") {
            TestLogger::init(&pattern).unwrap();
        }
    })
}

pub struct TestLogger;

fn write_line(buf: &mut Formatter, record: &Record, level: &dyn std::fmt::Display) -> std::io::Result<()> {
    writeln!(
        buf,
        "{}|{:>5}|{:<30}|{:>35}:{:<4}| {}",
        Local::now().format("%Y-%m-%d %H:%M:%S.%f"),
        level,
        record.target(),
        record.file().unwrap_or(""),
        record.line().unwrap_or(0),
        record.args()
    )
}

fn text_format(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let style = buf.default_level_style(record.level());
    let level = format!("{style}{}{style:#}", record.level());
    write_line(buf, record, &level)
}

fn text_no_color_format(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    write_line(buf, record, &record.level())
}

impl TestLogger {
    /// `RUST_LOG_FORMATTER=text_no_color` drops the level colouring.
    pub fn init(pattern: &str) -> TestUtilsResult<()> {
        let formatter = match env::var("RUST_LOG_FORMATTER").as_deref() {
            Ok("text_no_color") => text_no_color_format,
            _ => text_format,
        };
        EnvLoggerBuilder::new()
            .format(formatter)
            .filter(None, LevelFilter::Off)
            .parse_filters(pattern)
            .try_init()?;
        Ok(())
    }
}

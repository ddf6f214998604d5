// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn initialize(verbose: bool) {
        let level = if verbose { LevelFilter::Trace } else { LevelFilter::Warn };
        let logger = Box::leak(Box::new(Logger { level }));

        log::set_max_level(level);
        if log::set_logger(logger).is_err() {
            eprintln!("Failed to install logger");
            return;
        }

        log::info!("Logger is installed");
    }

    /// Raises the level after the configuration has been read.
    pub fn enable_debug() {
        log::set_max_level(LevelFilter::Trace);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}

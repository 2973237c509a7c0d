use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Debug topics accepted by `--debug-filter`.
pub const DEBUG_TOPICS: [&str; 4] = ["puzzle", "round", "render", "input"];

#[derive(Debug)]
struct GameLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl GameLogger {
    fn topic_allowed(&self, target: &str) -> bool {
        match &self.debug_filters {
            Some(filters) => filters.iter().any(|f| target.starts_with(f.as_str())),
            None => true,
        }
    }
}

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Topic filters only narrow debug/trace output
        match metadata.level() {
            log::Level::Debug | log::Level::Trace => self.topic_allowed(metadata.target()),
            _ => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = round_context(&message)
            .map(|round| format!("[R{:02}] ", round))
            .unwrap_or_default();

        let output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Extracts `N` from a "Round N" mention in a log message.
fn round_context(message: &str) -> Option<u32> {
    let start = message.find("Round ")? + "Round ".len();
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn parse_filters(filter_str: &str) -> HashSet<String> {
    filter_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Maps a `--log-level` value to a filter, defaulting to Info.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Level used with `--list`: the listing owns stdout, so only errors are
/// logged alongside it.
pub fn listing_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Error)
}

static LOGGER: OnceLock<GameLogger> = OnceLock::new();

// Initialize the logger with optional debug topic filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| GameLogger {
        level,
        debug_filters: debug_filter.as_deref().map(parse_filters),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_puzzle {
    ($($arg:tt)*) => {
        log::debug!(target: "puzzle", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_round {
    ($round:expr, $($arg:tt)*) => {
        log::debug!(target: "round", "Round {} {}", $round, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_render {
    ($($arg:tt)*) => {
        log::debug!(target: "render", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", "{}", format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn logger(level: LevelFilter, filter: Option<&str>) -> GameLogger {
        GameLogger {
            level,
            debug_filters: filter.map(parse_filters),
        }
    }

    fn metadata(level: log::Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_round_context() {
        assert_eq!(round_context("Round 7 won with 12 points"), Some(7));
        assert_eq!(round_context("Starting Round 12"), Some(12));
        assert_eq!(round_context("Round x"), None);
        assert_eq!(round_context("no context here"), None);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_debug_filters_only_narrow_debug() {
        let logger = logger(LevelFilter::Debug, Some("round, render"));
        assert!(logger.enabled(&metadata(log::Level::Debug, "round")));
        assert!(!logger.enabled(&metadata(log::Level::Debug, "puzzle")));
        assert!(logger.enabled(&metadata(log::Level::Info, "puzzle")));
        assert!(logger.enabled(&metadata(log::Level::Warn, "emoji_guess::render")));
    }

    #[test]
    fn test_level_threshold() {
        let logger = logger(LevelFilter::Warn, None);
        assert!(logger.enabled(&metadata(log::Level::Error, "round")));
        assert!(!logger.enabled(&metadata(log::Level::Info, "round")));
        assert!(!logger.enabled(&metadata(log::Level::Debug, "round")));
    }

    #[test]
    fn test_listing_level_keeps_only_errors() {
        assert_eq!(listing_level(LevelFilter::Info), LevelFilter::Error);
        assert_eq!(listing_level(LevelFilter::Trace), LevelFilter::Error);
        assert_eq!(listing_level(LevelFilter::Off), LevelFilter::Off);

        let quiet = logger(listing_level(parse_level("debug")), None);
        assert!(!quiet.enabled(&metadata(log::Level::Info, "emoji_guess")));
        assert!(!quiet.enabled(&metadata(log::Level::Warn, "emoji_guess")));
        assert!(quiet.enabled(&metadata(log::Level::Error, "emoji_guess")));
    }
}

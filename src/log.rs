//! Leveled logging to stderr.
//!
//! Nothing is printed below the global level, which starts at `Warn`.

use ansi_term::{Colour, Style};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    /// Level for a count of `-v` flags.
    pub fn from_verbosity(count: u8) -> Level {
        match count {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Trace | Level::Debug => Style::new().dimmed(),
            Level::Info => Style::new(),
            Level::Warn => Colour::Yellow.bold(),
            Level::Error => Colour::Red.bold(),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Trace => write!(f, "TRACE"),
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);
pub static SHOW_TIMESTAMP: AtomicBool = AtomicBool::new(true);

pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
    level as u8 >= LEVEL.load(Ordering::Relaxed)
}

/// Use the `trace!`, `debug!`, `info!`, `warn!` or `fatal!` macros instead.
#[doc(hidden)]
pub fn log(level: Level, message: &str) {
    let label = format!("{:<5}", level.to_string());
    if SHOW_TIMESTAMP.load(Ordering::Relaxed) {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        eprintln!("{} {} {}", now, level.style().paint(label), message);
    } else {
        eprintln!("{} {}", level.style().paint(label), message);
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)*) => {
        if $crate::log::enabled($level) {
            $crate::log::log($level, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { $crate::log_at!($crate::log::Level::Trace, $($arg)*) };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_at!($crate::log::Level::Debug, $($arg)*) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_at!($crate::log::Level::Info, $($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_at!($crate::log::Level::Warn, $($arg)*) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => { $crate::log_at!($crate::log::Level::Error, $($arg)*) };
}

//! Centralized logging configuration for the emulator.
//!
//! A small structured logging layer shared by the CPU core and system
//! crates. Configuration is global and atomic so call sites stay lock-free;
//! messages are built lazily through closures so disabled categories cost a
//! single atomic load.
//!
//! # Usage
//!
//! ```rust
//! use xt86_core::logging::{log, LogCategory, LogLevel};
//!
//! log(LogCategory::Cpu, LogLevel::Debug, || {
//!     format!("HLT at CS:IP={:04X}:{:04X}", 0xF000, 0xFFF0)
//! });
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

/// Log level for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// Parse log level from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Some(LogLevel::Off),
            "error" | "err" | "1" => Some(LogLevel::Error),
            "warn" | "warning" | "2" => Some(LogLevel::Warn),
            "info" | "3" => Some(LogLevel::Info),
            "debug" | "4" => Some(LogLevel::Debug),
            "trace" | "5" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    fn from_u8(val: u8) -> Self {
        match val {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Off,
        }
    }
}

/// Log category for the emulator components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// CPU execution (decode, halt, invalid opcodes)
    Cpu,
    /// Memory access and op-cache maintenance
    Mem,
    /// Interrupt delivery and hooks
    Int,
    /// I/O port access
    Io,
}

impl LogCategory {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            LogCategory::Cpu => 0,
            LogCategory::Mem => 1,
            LogCategory::Int => 2,
            LogCategory::Io => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            LogCategory::Cpu => "CPU",
            LogCategory::Mem => "MEM",
            LogCategory::Int => "INT",
            LogCategory::Io => "IO",
        }
    }
}

/// Sentinel meaning "no per-category override, use the global level".
const LEVEL_UNSET: u8 = 0xFF;

/// Global log level applied to categories without an override.
static GLOBAL_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Off as u8);

/// Per-category level overrides.
static CATEGORY_LEVELS: [AtomicU8; LogCategory::COUNT] = [
    AtomicU8::new(LEVEL_UNSET),
    AtomicU8::new(LEVEL_UNSET),
    AtomicU8::new(LEVEL_UNSET),
    AtomicU8::new(LEVEL_UNSET),
];

/// Set the global log level for all categories without an override.
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LEVEL.store(level.to_u8(), Ordering::Relaxed);
}

/// Set a level override for one category.
pub fn set_category_level(category: LogCategory, level: LogLevel) {
    CATEGORY_LEVELS[category.index()].store(level.to_u8(), Ordering::Relaxed);
}

/// Remove a category override so it follows the global level again.
pub fn clear_category_level(category: LogCategory) {
    CATEGORY_LEVELS[category.index()].store(LEVEL_UNSET, Ordering::Relaxed);
}

/// Effective level for a category (override if set, else global).
pub fn effective_level(category: LogCategory) -> LogLevel {
    let raw = CATEGORY_LEVELS[category.index()].load(Ordering::Relaxed);
    if raw == LEVEL_UNSET {
        LogLevel::from_u8(GLOBAL_LEVEL.load(Ordering::Relaxed))
    } else {
        LogLevel::from_u8(raw)
    }
}

/// Returns true if a message at `level` in `category` would be emitted.
pub fn enabled(category: LogCategory, level: LogLevel) -> bool {
    level != LogLevel::Off && level <= effective_level(category)
}

/// Log a message with lazy construction.
///
/// The closure only runs when the category/level combination is enabled,
/// so hot paths pay one atomic load for disabled logging.
pub fn log<F>(category: LogCategory, level: LogLevel, msg: F)
where
    F: FnOnce() -> String,
{
    if !enabled(category, level) {
        return;
    }
    let tag = match level {
        LogLevel::Off => return,
        LogLevel::Error => "ERROR",
        LogLevel::Warn => "WARN",
        LogLevel::Info => "INFO",
        LogLevel::Debug => "DEBUG",
        LogLevel::Trace => "TRACE",
    };
    eprintln!("[{} {}] {}", category.name(), tag, msg());
}

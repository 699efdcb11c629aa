// Terminal diagnostics for the installer.
//
// These macros are the console-facing channel (colored, stderr). They are
// deliberately separate from the audit log in `libs::run_log`, which is the
// plain timestamped record of what the installer actually did.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

// `log_info!` for general progress messages.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        eprintln!("{} {}", colored::Colorize::bright_green("[INFO]"), format!($($arg)*))
    };
}

// `log_warn!` for non-fatal conditions worth the operator's attention.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        eprintln!("{} {}", colored::Colorize::bright_yellow("[WARN]"), format!($($arg)*))
    };
}

// `log_error!` for failures.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        eprintln!("{} {}", colored::Colorize::bright_red("[ERROR]"), format!($($arg)*))
    };
}

// `log_debug!` for internal tracing; printed only when debug mode is on.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
            eprintln!("{} {}", colored::Colorize::dimmed("[DEBUG]"), format!($($arg)*));
        }
    };
}

// Global debug flag, initialized exactly once at startup.
static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Initializes the diagnostic channel. Call once, before anything logs.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    if debug {
        log_debug!("Logger initialized in DEBUG mode");
    }
}

/// Whether `log_debug!` output is currently enabled.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|flag| flag.load(Ordering::Relaxed))
        .unwrap_or(false)
}

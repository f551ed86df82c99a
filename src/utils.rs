//! Utility functions used throughout the application

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable debug logging (set once from the CLI flag)
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("campusmarket-debug.log");
    path
}

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Format a numeric price as its display string (e.g., "$45.00")
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

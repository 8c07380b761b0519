//! # Utilities Module
//!
//! ## Purpose
//! Small shared helpers: operation timing for debug logging and text
//! truncation for CLI display.

use std::time::Instant;

/// Performance timer for measuring operation duration.
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    /// Start a new timer with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Stop the timer and log the duration.
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed_ms();
        tracing::debug!(operation = %self.name, elapsed_ms = elapsed, "operation timed");
        elapsed
    }
}

/// Truncate text to the specified length with an ellipsis.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        format!("{}...", &text[..max_length.saturating_sub(3)])
    }
}

//! Unified error type for lishi-counter.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Storage
    /// Flash read/write/erase failed.
    Storage,

    /// Stored counter record has an unexpected length (bytes found).
    RecordSize(usize),

    // UI / Display
    /// Drawing to or flushing the display failed.
    Display,

    // Input
    /// Input queue was full and the event was dropped.
    QueueFull,
}

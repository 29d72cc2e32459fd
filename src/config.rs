//! Application-wide constants and compile-time configuration.
//!
//! Layout, timing, and storage parameters live here so they can be
//! tuned in one place.

// Counters

/// Number of pick positions tracked (one column per wafer).
pub const COLUMN_COUNT: usize = 8;

/// Highest value a counter can be stepped to.
pub const MAX_COUNT: i32 = 4;

/// Value written to a column's box timer when its counter changes.
pub const BOX_TIMER_RESET: i32 = 2;

// Screen layout (128×64 SSD1306)

/// Title shown on the first line.
pub const TITLE: &str = "LISHI HU66";

/// Baseline origin of the title text.
pub const TITLE_X: i32 = 5;
pub const TITLE_Y: i32 = 10;

/// Horizontal centre of column 0 and spacing between columns.
pub const COLUMN_X0: i32 = 10;
pub const COLUMN_SPACING: i32 = 15;

/// Vertical centre of the "1".."8" labels.
pub const LABEL_Y: i32 = 35;

/// Vertical centre of the counter values.
pub const VALUE_Y: i32 = 50;

/// Selection frame geometry, relative to the active column centre.
pub const FRAME_OFFSET_X: i32 = -6;
pub const FRAME_Y: i32 = 40;
pub const FRAME_WIDTH: u32 = 12;
pub const FRAME_HEIGHT: u32 = 20;
pub const FRAME_RADIUS: u32 = 2;

// Input
//
// Logical key → nRF52840-DK pin (active-low, internal pull-up).
// Adjust for your custom PCB; the mapping is applied in `main.rs`.
//
//   Up     → P0.11
//   Down   → P0.12
//   Left   → P0.24
//   Right  → P0.25
//   Ok     → P0.02
//   Back   → P0.03
//   I²C SDA → P0.26
//   I²C SCL → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press is reported as long (ms).
pub const LONG_PRESS_MS: u64 = 500;

/// Capacity of the input event queue. Events beyond this are dropped.
pub const INPUT_QUEUE_SIZE: usize = 8;

// Counter storage

/// Flash page index where counter storage starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for counter storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;

/// Map key the counter record is stored under.
pub const COUNTER_RECORD_KEY: u8 = 0x01;

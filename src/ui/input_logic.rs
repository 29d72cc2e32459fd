use crate::config::COLUMN_COUNT;
use crate::ui::PressKind;

/// Move the column cursor one step right, wrapping to column 0.
pub fn next_column(active: usize) -> usize {
    (active + 1) % COLUMN_COUNT
}

/// Move the column cursor one step left, wrapping to the last column.
pub fn prev_column(active: usize) -> usize {
    (active + COLUMN_COUNT - 1) % COLUMN_COUNT
}

/// Classify a press by how long the key was held.
pub fn classify_hold(held_ms: u64, long_press_ms: u64) -> PressKind {
    if held_ms >= long_press_ms {
        PressKind::Long
    } else {
        PressKind::Short
    }
}

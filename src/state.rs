//! In-memory counter model.
//!
//! Eight pick counters, one "just changed" flag and box timer per column,
//! and the active column index. The model holds no lock itself; callers
//! keep it inside an `embassy_sync::mutex::Mutex` and mutate it only
//! through the guard.

use crate::config::{BOX_TIMER_RESET, COLUMN_COUNT, MAX_COUNT};
use crate::ui::input_logic::{next_column, prev_column};

/// The eight counter values, in column order.
pub type Counts = [i32; COLUMN_COUNT];

/// Copy of the model taken under the lock, for rendering and saving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub counts: Counts,
    pub pressed: [bool; COLUMN_COUNT],
    pub box_timer: [i32; COLUMN_COUNT],
    pub active: usize,
}

/// Counter state shared between the event loop and the display task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickState {
    counts: Counts,
    /// Set when a column's value changes. Nothing clears it yet.
    pressed: [bool; COLUMN_COUNT],
    /// Paired with `pressed`; written on change, never counted down.
    box_timer: [i32; COLUMN_COUNT],
    active: usize,
}

impl PickState {
    /// Zero-initialised state with column 0 active.
    pub const fn new() -> Self {
        Self {
            counts: [0; COLUMN_COUNT],
            pressed: [false; COLUMN_COUNT],
            box_timer: [0; COLUMN_COUNT],
            active: 0,
        }
    }

    /// Value of `column`, or `None` if the column does not exist.
    pub fn value(&self, column: usize) -> Option<i32> {
        self.counts.get(column).copied()
    }

    /// Set `column` to `value` clamped into `0..=MAX_COUNT`.
    ///
    /// Does not touch the press flag; out-of-range columns are ignored.
    pub fn set_value(&mut self, column: usize, value: i32) {
        if let Some(slot) = self.counts.get_mut(column) {
            *slot = value.clamp(0, MAX_COUNT);
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Select `column`, wrapping indices past the last column.
    pub fn set_active(&mut self, column: usize) {
        self.active = column % COLUMN_COUNT;
    }

    pub fn select_next(&mut self) {
        self.active = next_column(self.active);
    }

    pub fn select_prev(&mut self) {
        self.active = prev_column(self.active);
    }

    /// Step the active counter up by one. Returns `true` if it changed.
    pub fn increment(&mut self) -> bool {
        self.step_active(1)
    }

    /// Step the active counter down by one. Returns `true` if it changed.
    pub fn decrement(&mut self) -> bool {
        self.step_active(-1)
    }

    /// Zero the active counter.
    pub fn reset_active(&mut self) {
        self.counts[self.active] = 0;
    }

    // A value restored from a foreign record may sit outside the range;
    // stepping pulls it back in.
    fn step_active(&mut self, delta: i32) -> bool {
        let column = self.active;
        let current = self.counts[column];
        let next = current.saturating_add(delta).clamp(0, MAX_COUNT);
        if next == current {
            return false;
        }
        self.counts[column] = next;
        self.pressed[column] = true;
        self.box_timer[column] = BOX_TIMER_RESET;
        true
    }

    pub fn pressed(&self, column: usize) -> bool {
        self.pressed.get(column).copied().unwrap_or(false)
    }

    pub fn box_timer(&self, column: usize) -> i32 {
        self.box_timer.get(column).copied().unwrap_or(0)
    }

    /// All counter values, for persistence.
    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// Overwrite all counters with a loaded record, verbatim.
    pub fn restore(&mut self, counts: Counts) {
        self.counts = counts;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            counts: self.counts,
            pressed: self.pressed,
            box_timer: self.box_timer,
            active: self.active,
        }
    }
}

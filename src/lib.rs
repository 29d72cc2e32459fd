//! Pick-position counter for a LISHI HU66 decoder on an nRF52840 handheld.
//!
//! Eight columns, one per wafer, each holding a count in `0..=4`. The
//! user moves between columns and steps values with six buttons; the
//! counters are kept in flash across restarts.
//!
//! The library builds on the host so the state model, input dispatch,
//! rendering, storage and event loop can be tested without hardware:
//!
//! Usage: `cargo test`
//!
//! The embedded binary (`src/main.rs`, feature `embedded`) adds the button
//! tasks, the SSD1306 driver and the embassy executor on top.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
mod fmt;

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod ui;

pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::app::{dispatch, Command};
    use crate::config::{BOX_TIMER_RESET, COLUMN_COUNT, MAX_COUNT};
    use crate::state::PickState;
    use crate::ui::input_logic::{classify_hold, next_column, prev_column};
    use crate::ui::{InputEvent, Key, PressKind};
    use proptest::prelude::*;

    fn state_with(counts: [i32; COLUMN_COUNT], active: usize) -> PickState {
        let mut state = PickState::new();
        state.restore(counts);
        state.set_active(active);
        state
    }

    // ════════════════════════════════════════════════════════════════════════
    // State Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn new_state_is_zeroed() {
        let state = PickState::new();
        assert_eq!(state.counts(), [0; COLUMN_COUNT]);
        assert_eq!(state.active(), 0);
        for column in 0..COLUMN_COUNT {
            assert!(!state.pressed(column));
            assert_eq!(state.box_timer(column), 0);
        }
        assert_eq!(state, PickState::default());
    }

    #[test]
    fn increment_stops_at_max() {
        let mut state = state_with([MAX_COUNT - 1, 0, 0, 0, 0, 0, 0, 0], 0);
        assert!(state.increment());
        assert_eq!(state.value(0), Some(MAX_COUNT));
        assert!(!state.increment());
        assert_eq!(state.value(0), Some(MAX_COUNT));
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut state = state_with([1, 0, 0, 0, 0, 0, 0, 0], 0);
        assert!(state.decrement());
        assert_eq!(state.value(0), Some(0));
        assert!(!state.decrement());
        assert_eq!(state.value(0), Some(0));
    }

    #[test]
    fn change_marks_press_flag_and_timer() {
        let mut state = state_with([0; COLUMN_COUNT], 2);
        state.increment();
        assert!(state.pressed(2));
        assert_eq!(state.box_timer(2), BOX_TIMER_RESET);
        assert!(!state.pressed(1));
        assert_eq!(state.box_timer(1), 0);
    }

    #[test]
    fn no_op_step_leaves_press_flag_clear() {
        let mut state = state_with([0; COLUMN_COUNT], 4);
        state.decrement();
        assert!(!state.pressed(4));
        assert_eq!(state.box_timer(4), 0);
    }

    #[test]
    fn out_of_range_value_is_reclamped_on_step() {
        let mut state = state_with([9, -3, 0, 0, 0, 0, 0, 0], 0);
        assert!(state.decrement());
        assert_eq!(state.value(0), Some(MAX_COUNT));

        state.set_active(1);
        assert!(state.increment());
        assert_eq!(state.value(1), Some(0));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let mut state = state_with([i32::MAX, i32::MIN, 0, 0, 0, 0, 0, 0], 0);
        state.increment();
        assert_eq!(state.value(0), Some(MAX_COUNT));
        state.set_active(1);
        state.decrement();
        assert_eq!(state.value(1), Some(0));
    }

    #[test]
    fn set_value_clamps_and_ignores_bad_column() {
        let mut state = PickState::new();
        state.set_value(3, 17);
        state.set_value(5, -2);
        state.set_value(COLUMN_COUNT, 1);
        assert_eq!(state.value(3), Some(MAX_COUNT));
        assert_eq!(state.value(5), Some(0));
        assert_eq!(state.value(COLUMN_COUNT), None);
    }

    #[test]
    fn set_active_wraps() {
        let mut state = PickState::new();
        state.set_active(COLUMN_COUNT + 3);
        assert_eq!(state.active(), 3);
    }

    #[test]
    fn restore_takes_values_verbatim() {
        let mut state = PickState::new();
        state.restore([5, -1, 2, 3, 4, 0, 1, 100]);
        assert_eq!(state.counts(), [5, -1, 2, 3, 4, 0, 1, 100]);
    }

    #[test]
    fn snapshot_copies_every_field() {
        let mut state = state_with([1, 2, 3, 0, 0, 0, 0, 0], 1);
        state.increment();
        let snap = state.snapshot();
        assert_eq!(snap.counts, state.counts());
        assert_eq!(snap.active, 1);
        assert!(snap.pressed[1]);
        assert_eq!(snap.box_timer[1], BOX_TIMER_RESET);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Navigation Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn column_navigation_wraps() {
        assert_eq!(next_column(0), 1);
        assert_eq!(next_column(COLUMN_COUNT - 1), 0);
        assert_eq!(prev_column(0), COLUMN_COUNT - 1);
        assert_eq!(prev_column(5), 4);
    }

    #[test]
    fn eight_steps_return_to_start() {
        for start in 0..COLUMN_COUNT {
            let mut right = state_with([0; COLUMN_COUNT], start);
            let mut left = state_with([0; COLUMN_COUNT], start);
            for _ in 0..COLUMN_COUNT {
                dispatch(&mut right, InputEvent::short(Key::Right));
                dispatch(&mut left, InputEvent::short(Key::Left));
            }
            assert_eq!(right.active(), start);
            assert_eq!(left.active(), start);
        }
    }

    #[test]
    fn press_classification_threshold() {
        assert_eq!(classify_hold(0, 500), PressKind::Short);
        assert_eq!(classify_hold(499, 500), PressKind::Short);
        assert_eq!(classify_hold(500, 500), PressKind::Long);
        assert_eq!(classify_hold(2_000, 500), PressKind::Long);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Dispatch Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn short_up_and_down_step_active_column() {
        let mut state = state_with([0; COLUMN_COUNT], 6);
        assert_eq!(dispatch(&mut state, InputEvent::short(Key::Up)), Command::None);
        assert_eq!(dispatch(&mut state, InputEvent::short(Key::Up)), Command::None);
        assert_eq!(state.value(6), Some(2));
        dispatch(&mut state, InputEvent::short(Key::Down));
        assert_eq!(state.value(6), Some(1));
    }

    #[test]
    fn long_back_resets_only_active_column() {
        let mut state = state_with([4, 4, 4, 4, 4, 4, 4, 4], 3);
        let command = dispatch(&mut state, InputEvent::long(Key::Back));
        assert_eq!(command, Command::None);
        assert_eq!(state.counts(), [4, 4, 4, 0, 4, 4, 4, 4]);
    }

    #[test]
    fn long_ok_requests_save() {
        let mut state = state_with([1; COLUMN_COUNT], 0);
        assert_eq!(dispatch(&mut state, InputEvent::long(Key::Ok)), Command::Save);
        assert_eq!(state.counts(), [1; COLUMN_COUNT]);
    }

    #[test]
    fn short_back_requests_save_and_exit() {
        let mut state = PickState::new();
        assert_eq!(
            dispatch(&mut state, InputEvent::short(Key::Back)),
            Command::SaveAndExit
        );
    }

    #[test]
    fn unmapped_events_are_ignored() {
        let ignored = [
            InputEvent::short(Key::Ok),
            InputEvent::long(Key::Up),
            InputEvent::long(Key::Down),
            InputEvent::long(Key::Left),
            InputEvent::long(Key::Right),
        ];
        for event in ignored {
            let mut state = state_with([2; COLUMN_COUNT], 4);
            let before = state.clone();
            assert_eq!(dispatch(&mut state, event), Command::None);
            assert_eq!(state, before);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Property Tests
    // ════════════════════════════════════════════════════════════════════════

    fn any_event() -> impl Strategy<Value = InputEvent> {
        let key = prop_oneof![
            Just(Key::Up),
            Just(Key::Down),
            Just(Key::Left),
            Just(Key::Right),
            Just(Key::Ok),
            Just(Key::Back),
        ];
        let kind = prop_oneof![Just(PressKind::Short), Just(PressKind::Long)];
        (kind, key).prop_map(|(kind, key)| InputEvent { kind, key })
    }

    proptest! {
        #[test]
        fn counters_stay_in_range(events in prop::collection::vec(any_event(), 0..200)) {
            let mut state = PickState::new();
            for event in events {
                dispatch(&mut state, event);
                prop_assert!(state.active() < COLUMN_COUNT);
                for value in state.counts() {
                    prop_assert!((0..=MAX_COUNT).contains(&value));
                }
            }
        }

        #[test]
        fn step_never_leaves_range(start in any::<i32>(), ups in 0usize..10, downs in 0usize..10) {
            let mut state = state_with([start; COLUMN_COUNT], 0);
            for _ in 0..ups {
                state.increment();
            }
            for _ in 0..downs {
                state.decrement();
            }
            if ups + downs > 0 {
                let value = state.value(0).unwrap();
                prop_assert!((0..=MAX_COUNT).contains(&value));
            }
        }
    }
}

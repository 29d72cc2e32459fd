//! User interface subsystem - OLED display + physical buttons.
//!
//! Button tasks classify presses and queue `InputEvent`s; the event loop
//! in [`crate::app`] applies them to the counter state and asks the
//! display task to redraw.
//!
//! ## Components
//!
//! - **Frame**: pure rendering of a state snapshot to draw commands
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded only)
//! - **Buttons**: 6 tactile switches with debouncing and long-press
//!   detection (embedded only)

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod frame;
pub mod input_logic;

/// Logical keys on the handheld.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

/// How long a key was held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Released before the long-press threshold.
    Short,
    /// Held past the long-press threshold.
    Long,
}

/// A classified key press, as queued by the button tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub kind: PressKind,
    pub key: Key,
}

impl InputEvent {
    pub const fn short(key: Key) -> Self {
        Self {
            kind: PressKind::Short,
            key,
        }
    }

    pub const fn long(key: Key) -> Self {
        Self {
            kind: PressKind::Long,
            key,
        }
    }
}

/// Requests from the event loop to the display task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    /// State changed - render a fresh frame.
    Redraw,
    /// Application is exiting - blank and power down the panel.
    Off,
}

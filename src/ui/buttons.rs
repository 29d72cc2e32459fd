//! GPIO button input with async debouncing and long-press detection.
//!
//! Six physical buttons (active-low with internal pull-up), one per
//! logical key: UP, DOWN, LEFT, RIGHT, OK, BACK.
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, classifies the press as short or long, and queues an
//! `InputEvent` without blocking.

use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};

use crate::app::enqueue;
use crate::config::{BUTTON_DEBOUNCE_MS, INPUT_QUEUE_SIZE, LONG_PRESS_MS};
use crate::ui::input_logic::classify_hold;
use crate::ui::{InputEvent, Key, PressKind};

/// Run a single button polling loop.
///
/// A press released before `LONG_PRESS_MS` is reported as short on
/// release. A press held that long is reported as long immediately and
/// its release is swallowed.
pub async fn button_task(
    pin: AnyPin,
    key: Key,
    tx: Sender<'static, CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_SIZE>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;
        let pressed_at = Instant::now();

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        let kind = match select(
            btn.wait_for_high(),
            Timer::at(pressed_at + Duration::from_millis(LONG_PRESS_MS)),
        )
        .await
        {
            Either::First(()) => classify_hold(pressed_at.elapsed().as_millis(), LONG_PRESS_MS),
            Either::Second(()) => PressKind::Long,
        };

        let event = InputEvent { kind, key };
        info!("Button: {:?}", event);
        let _ = enqueue(&tx, event);

        // Wait for release to avoid repeat triggers.
        if kind == PressKind::Long {
            btn.wait_for_high().await;
        }
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}

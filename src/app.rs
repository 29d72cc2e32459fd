//! Counter application: input dispatch and the event loop.
//!
//! The loop owns nothing global. The state mutex, input queue, store and
//! display signal are handed in by `main` (or a test), so the same code
//! runs on the device and on the host.
//!
//! Lock discipline: the state mutex is held only while an event is
//! applied. Counters are copied out before any storage I/O.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use crate::error::Error;
use crate::state::{Counts, PickState};
use crate::storage::CounterStore;
use crate::ui::{DisplayCommand, InputEvent, Key, PressKind};

/// Follow-up work the event loop performs after releasing the lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Nothing beyond a redraw.
    None,
    /// Persist all counters and keep running.
    Save,
    /// Persist all counters and leave the loop.
    SaveAndExit,
}

/// Apply one input event to the state.
///
/// | press | key   | effect                                  |
/// |-------|-------|-----------------------------------------|
/// | short | Right | next column (wraps)                     |
/// | short | Left  | previous column (wraps)                 |
/// | short | Up    | +1 on active column, capped at 4        |
/// | short | Down  | -1 on active column, floored at 0       |
/// | short | Back  | save and exit                           |
/// | long  | Back  | active column to 0 (not saved)          |
/// | long  | Ok    | save                                    |
///
/// Everything else is ignored.
pub fn dispatch(state: &mut PickState, event: InputEvent) -> Command {
    match (event.kind, event.key) {
        (PressKind::Short, Key::Right) => state.select_next(),
        (PressKind::Short, Key::Left) => state.select_prev(),
        (PressKind::Short, Key::Up) => {
            state.increment();
        }
        (PressKind::Short, Key::Down) => {
            state.decrement();
        }
        (PressKind::Short, Key::Back) => return Command::SaveAndExit,
        (PressKind::Long, Key::Back) => state.reset_active(),
        (PressKind::Long, Key::Ok) => return Command::Save,
        _ => {}
    }
    Command::None
}

/// Queue an event without waiting. A full queue drops the event.
pub fn enqueue<M: RawMutex, const N: usize>(
    tx: &Sender<'_, M, InputEvent, N>,
    event: InputEvent,
) -> Result<(), Error> {
    tx.try_send(event).map_err(|_| {
        warn!("Input queue full - dropping {:?}", event);
        Error::QueueFull
    })
}

/// Restore counters from `store`, if a usable record exists.
///
/// Any failure leaves the in-memory counters as they were.
pub async fn load<M: RawMutex, S: CounterStore>(state: &Mutex<M, PickState>, store: &mut S) {
    match store.load().await {
        Ok(Some(counts)) => {
            state.lock().await.restore(counts);
            info!("Restored counters {:?}", counts);
        }
        Ok(None) => info!("Starting with zeroed counters"),
        Err(e) => warn!("Counter load skipped: {:?}", e),
    }
}

async fn save<S: CounterStore>(store: &mut S, counts: &Counts) {
    match store.save(counts).await {
        Ok(()) => info!("Saved counters {:?}", counts),
        Err(e) => warn!("Counter save skipped: {:?}", e),
    }
}

/// Process input events until a short Back press.
///
/// Each event is applied under the state lock; the display is asked to
/// redraw afterwards unless the event ends the loop. The exit path always
/// attempts one save, and its outcome does not block termination.
pub async fn run<M: RawMutex, S: CounterStore, const N: usize>(
    state: &Mutex<M, PickState>,
    events: Receiver<'_, M, InputEvent, N>,
    store: &mut S,
    display: &Signal<M, DisplayCommand>,
) {
    loop {
        let event = events.receive().await;
        debug!("Input: {:?}", event);

        let (command, counts) = {
            let mut guard = state.lock().await;
            let command = dispatch(&mut guard, event);
            (command, guard.counts())
        };

        match command {
            Command::None => {}
            Command::Save => save(store, &counts).await,
            Command::SaveAndExit => {
                save(store, &counts).await;
                info!("Exit requested");
                return;
            }
        }

        display.signal(DisplayCommand::Redraw);
    }
}

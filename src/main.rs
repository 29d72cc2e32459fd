//! lishi-counter firmware entry point (nRF52840 + SSD1306).
//!
//! Task layout:
//! - `button` ×6: debounce, classify short/long, queue `InputEvent`s
//! - `display_task`: redraw the OLED on request, power it off on exit
//! - `main`: load counters, run the event loop, tear down

#![no_std]
#![no_main]

use defmt::*;
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin as _};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use {defmt_rtt as _, panic_probe as _};

use lishi::app;
use lishi::config::INPUT_QUEUE_SIZE;
use lishi::state::PickState;
use lishi::storage::FlashStore;
use lishi::ui::{buttons, display, frame, DisplayCommand, InputEvent, Key};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type I2cBus = Twim<'static, TWISPI0>;

/// Counter state, shared by the event loop and the display task.
static STATE: Mutex<CriticalSectionRawMutex, PickState> = Mutex::new(PickState::new());

/// Classified key presses from the button tasks.
static INPUT_QUEUE: Channel<CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_SIZE> =
    Channel::new();

/// Redraw / power-off requests for the display task.
static DISPLAY_CMD: Signal<CriticalSectionRawMutex, DisplayCommand> = Signal::new();

#[embassy_executor::task(pool_size = 6)]
async fn button(pin: AnyPin, key: Key) {
    buttons::button_task(pin, key, INPUT_QUEUE.sender()).await
}

#[embassy_executor::task]
async fn display_task(mut oled: display::Display<I2cBus>) {
    loop {
        match DISPLAY_CMD.wait().await {
            DisplayCommand::Redraw => {
                let snapshot = STATE.lock().await.snapshot();
                let frame = frame::render(&snapshot);
                if let Err(e) = display::show(&mut oled, &frame) {
                    warn!("Display update failed: {:?}", e);
                }
            }
            DisplayCommand::Off => {
                display::power_off(&mut oled);
                info!("Display off");
                return;
            }
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("lishi-counter starting...");

    let p = embassy_nrf::init(Default::default());

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = display::init(i2c);

    let mut store = FlashStore::new(BlockingAsync::new(Nvmc::new(p.NVMC)));
    app::load(&STATE, &mut store).await;

    unwrap!(spawner.spawn(display_task(oled)));

    let keys = [
        (p.P0_11.degrade(), Key::Up),
        (p.P0_12.degrade(), Key::Down),
        (p.P0_24.degrade(), Key::Left),
        (p.P0_25.degrade(), Key::Right),
        (p.P0_02.degrade(), Key::Ok),
        (p.P0_03.degrade(), Key::Back),
    ];
    for (pin, key) in keys {
        unwrap!(spawner.spawn(button(pin, key)));
    }

    DISPLAY_CMD.signal(DisplayCommand::Redraw);
    info!("Ready");

    app::run(&STATE, INPUT_QUEUE.receiver(), &mut store, &DISPLAY_CMD).await;

    // Teardown: display surface first; state and queues are static.
    DISPLAY_CMD.signal(DisplayCommand::Off);
    info!("Counters saved - idle until reset");
    core::future::pending::<()>().await;
}

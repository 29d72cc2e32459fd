//! SSD1306 OLED display wrapper.

use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::ui::frame::{self, Frame};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("SSD1306 init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    display
}

/// Paint `frame` into the display buffer and push it to the panel.
pub fn show<I2C>(display: &mut Display<I2C>, frame: &Frame) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    frame::paint(frame, display).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}

/// Blank the panel and switch it off.
pub fn power_off<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    let _ = display.flush();
    let _ = display.set_display_on(false);
}

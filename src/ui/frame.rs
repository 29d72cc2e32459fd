//! Counter screen rendering.
//!
//! [`render`] turns a state snapshot into a fixed list of draw commands
//! without touching any hardware; [`paint`] rasterises that list onto any
//! `embedded-graphics` target (the SSD1306 buffer on the device).
//!
//! Screen layout (128×64):
//! ```text
//!   LISHI HU66
//!
//!   1  2  3  4  5  6  7  8      labels, y = 35
//!  ╭─╮
//!  │0│ 1  2  3  4  0  1  2      values, y = 50
//!  ╰─╯                          selection frame around active column
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use heapless::{String, Vec};

use crate::config::{
    COLUMN_COUNT, COLUMN_SPACING, COLUMN_X0, FRAME_HEIGHT, FRAME_OFFSET_X, FRAME_RADIUS,
    FRAME_WIDTH, FRAME_Y, LABEL_Y, TITLE, TITLE_X, TITLE_Y, VALUE_Y,
};
use crate::state::Snapshot;

/// Title + one label and one value per column + the selection frame.
pub const FRAME_CAPACITY: usize = 2 + 2 * COLUMN_COUNT;

/// Longest text a command carries ("-2147483648" plus slack).
pub const TEXT_CAPACITY: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    /// Bold title font.
    Primary,
    /// Small font for labels and values.
    Secondary,
}

impl Font {
    fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Font::Primary => &FONT_7X13_BOLD,
            Font::Secondary => &FONT_6X10,
        }
    }
}

/// How a text position is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Left edge, on the alphabetic baseline.
    Baseline,
    /// Centred horizontally and vertically.
    Center,
}

impl Anchor {
    fn text_style(self) -> TextStyle {
        match self {
            Anchor::Baseline => TextStyleBuilder::new()
                .alignment(Alignment::Left)
                .baseline(Baseline::Alphabetic)
                .build(),
            Anchor::Center => TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build(),
        }
    }
}

/// A single drawing instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Text {
        position: Point,
        font: Font,
        anchor: Anchor,
        text: String<TEXT_CAPACITY>,
    },
    /// Outline rectangle with rounded corners.
    RoundedFrame { area: Rectangle, radius: u32 },
}

/// Ordered draw commands for one screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    ops: Vec<DrawOp, FRAME_CAPACITY>,
}

impl Frame {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    fn push_text(
        &mut self,
        position: Point,
        font: Font,
        anchor: Anchor,
        text: String<TEXT_CAPACITY>,
    ) {
        let _ = self.ops.push(DrawOp::Text {
            position,
            font,
            anchor,
            text,
        });
    }
}

/// Horizontal centre of `column` on screen.
pub fn column_x(column: usize) -> i32 {
    COLUMN_X0 + column as i32 * COLUMN_SPACING
}

fn number(value: i32) -> String<TEXT_CAPACITY> {
    let mut s = String::new();
    let _ = write!(s, "{}", value);
    s
}

/// Build the counter screen for `snapshot`.
pub fn render(snapshot: &Snapshot) -> Frame {
    let mut frame = Frame::default();

    let mut title = String::new();
    let _ = title.push_str(TITLE);
    frame.push_text(
        Point::new(TITLE_X, TITLE_Y),
        Font::Primary,
        Anchor::Baseline,
        title,
    );

    for column in 0..COLUMN_COUNT {
        frame.push_text(
            Point::new(column_x(column), LABEL_Y),
            Font::Secondary,
            Anchor::Center,
            number(column as i32 + 1),
        );
    }

    for (column, &count) in snapshot.counts.iter().enumerate() {
        frame.push_text(
            Point::new(column_x(column), VALUE_Y),
            Font::Secondary,
            Anchor::Center,
            number(count),
        );
    }

    let left = column_x(snapshot.active) + FRAME_OFFSET_X;
    let _ = frame.ops.push(DrawOp::RoundedFrame {
        area: Rectangle::new(
            Point::new(left, FRAME_Y),
            Size::new(FRAME_WIDTH, FRAME_HEIGHT),
        ),
        radius: FRAME_RADIUS,
    });

    frame
}

/// Clear `target` and draw every command in `frame`.
pub fn paint<D>(frame: &Frame, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    for op in frame.ops() {
        match op {
            DrawOp::Text {
                position,
                font,
                anchor,
                text,
            } => {
                let character_style = MonoTextStyle::new(font.mono(), BinaryColor::On);
                Text::with_text_style(
                    text.as_str(),
                    *position,
                    character_style,
                    anchor.text_style(),
                )
                .draw(target)?;
            }
            DrawOp::RoundedFrame { area, radius } => {
                RoundedRectangle::with_equal_corners(*area, Size::new(*radius, *radius))
                    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                    .draw(target)?;
            }
        }
    }

    Ok(())
}

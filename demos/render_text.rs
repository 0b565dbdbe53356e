//! Render a line of text through the full driver stack on the host
//!
//! The bus transport only logs what it would send; the framebuffer is
//! printed to the terminal afterwards.
//!
//! Run with: RUST_LOG=debug cargo run --example render_text --features std

use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use st7305::{BusTransport, Config, DisplayError, Mode, St7305, PANEL_COLUMNS};

/// Transport that logs each transaction instead of driving pins
#[derive(Default)]
struct LogTransport {
    mode: Option<Mode>,
    bytes: usize,
}

impl BusTransport for LogTransport {
    fn select(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), DisplayError> {
        self.mode = Some(mode);
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.bytes += bytes.len();
        match self.mode {
            Some(Mode::Command) => log::debug!("cmd  {:02X?}", bytes),
            _ if bytes.len() > 16 => log::debug!("data {} bytes", bytes.len()),
            _ => log::debug!("data {:02X?}", bytes),
        }
        Ok(())
    }

    fn set_reset(&mut self, high: bool) -> Result<(), DisplayError> {
        log::debug!("rst  {}", if high { "high" } else { "low" });
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        log::debug!("wait {} ms", ms);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut display = St7305::new(LogTransport::default(), Config::default().with_size(384, 48))?;
    display.begin()?;

    Rectangle::new(Point::zero(), display.size())
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut display)?;
    let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::new("Hello ST7305", Point::new(8, 30), style).draw(&mut display)?;

    display.refresh()?;

    // Two rows per terminal line, every other column
    let bytes = display.framebuffer().as_bytes();
    let on = |x: usize, y: usize| bytes[(y >> 3) * PANEL_COLUMNS + x] & (1 << (y & 7)) != 0;
    for y in (0..48).step_by(2) {
        let line: String = (0..PANEL_COLUMNS / 2)
            .map(|x| if on(x * 2, y) || on(x * 2, y + 1) { '#' } else { ' ' })
            .collect();
        println!("{}", line.trim_end());
    }

    let bus = display.release();
    log::info!("{} bytes sent", bus.bytes);
    Ok(())
}

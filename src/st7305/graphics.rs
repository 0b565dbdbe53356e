//! `embedded-graphics` drawing support
//!
//! Lines, shapes and text come from `embedded-graphics`; they reach the
//! panel through [`Canvas::set_pixel`]. `BinaryColor::On` turns a pixel on
//! (dark on the reflective panel). Pixels outside the canvas are skipped.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::st7305::driver::St7305;
use crate::st7305::framebuffer::{Canvas, FrameBuffer};
use crate::st7305::interface::BusTransport;

fn draw_pixels<C, I>(canvas: &mut C, pixels: I)
where
    C: Canvas,
    I: IntoIterator<Item = Pixel<BinaryColor>>,
{
    for Pixel(point, color) in pixels {
        // Negative coordinates never reach the canvas
        if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
            canvas.set_pixel(x, y, color.is_on());
        }
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        draw_pixels(self, pixels);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl<BUS> DrawTarget for St7305<BUS>
where
    BUS: BusTransport,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        draw_pixels(self.framebuffer_mut(), pixels);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill(color.is_on());
        Ok(())
    }
}

impl<BUS> OriginDimensions for St7305<BUS>
where
    BUS: BusTransport,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

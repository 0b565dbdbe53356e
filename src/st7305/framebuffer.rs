//! Logical pixel storage
//!
//! One byte per column and 8-row band; bit `n` of a byte is row `band * 8 + n`.

use crate::st7305::error::Error;
use crate::st7305::{FRAMEBUFFER_SIZE, PANEL_COLUMNS, PANEL_ROWS};

/// A two-dimensional monochrome drawing surface
///
/// This is all a drawing layer needs from the panel. Writes outside
/// `[0, width) × [0, height)` are ignored.
pub trait Canvas {
    /// Turn the pixel at (`x`, `y`) on or off
    fn set_pixel(&mut self, x: u32, y: u32, on: bool);

    /// Logical width in pixels
    fn width(&self) -> u32;

    /// Logical height in pixels
    fn height(&self) -> u32;
}

/// Band-packed monochrome framebuffer
pub struct FrameBuffer {
    buffer: [u8; FRAMEBUFFER_SIZE],
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create an all-off framebuffer with the given logical size
    ///
    /// Fails with [`Error::OutOfBounds`] when the size exceeds the panel.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width as usize > PANEL_COLUMNS || height as usize > PANEL_ROWS {
            return Err(Error::OutOfBounds {
                x: width,
                y: height,
            });
        }
        Ok(FrameBuffer {
            buffer: [0; FRAMEBUFFER_SIZE],
            width,
            height,
        })
    }

    /// Set or clear one pixel, reporting coordinates outside the canvas
    pub fn try_set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            log::warn!("Dropping pixel ({}, {}) outside {}x{}", x, y, self.width, self.height);
            return Err(Error::OutOfBounds { x, y });
        }

        let offset = (y as usize >> 3) * PANEL_COLUMNS + x as usize;
        let bit = 1u8 << (y & 0x07);
        if on {
            self.buffer[offset] |= bit;
        } else {
            self.buffer[offset] &= !bit;
        }
        Ok(())
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Turn every pixel on or off
    pub fn fill(&mut self, on: bool) {
        self.buffer.fill(if on { 0xFF } else { 0x00 });
    }

    /// The raw band-packed bytes
    pub fn as_bytes(&self) -> &[u8; FRAMEBUFFER_SIZE] {
        &self.buffer
    }
}

impl Canvas for FrameBuffer {
    fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        // Bounds were just checked
        let _ = self.try_set_pixel(x, y, on);
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

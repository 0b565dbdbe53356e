//! Framebuffer to wire format conversion
//!
//! The controller addresses the panel through multiplexed source lines: one
//! wire byte carries 4 rows of two neighbouring columns, interleaved with the
//! left column in the odd (high) bit of every pair:
//!
//! ```text
//! wire bit:   7    6    5    4    3    2    1    0
//! source:    b1.0 b2.0 b1.1 b2.1 b1.2 b2.2 b1.3 b2.3
//! ```
//!
//! where `b1` is the band byte of column `i` and `b2` the one of column `i + 1`.
//! Every column pair yields 7 groups of 3 bands, 2 wire bytes per band, which
//! is one 42 byte row of the 14 × 3 byte controller window.
//!
//! The iteration order below is the order the controller consumes bytes in.
//! Changing it scrambles the picture.

use crate::st7305::framebuffer::FrameBuffer;
use crate::st7305::{PANEL_BANDS, PANEL_COLUMNS, WIRE_BUFFER_SIZE};

/// Bands converted together, matching the 3 bytes of a window column group
const BANDS_PER_GROUP: usize = 3;

/// Frame data in the controller's native layout
pub type WireBuffer = [u8; WIRE_BUFFER_SIZE];

/// Interleave the low nibbles of two column bytes into one wire byte
#[inline]
pub fn pack_nibbles(b1: u8, b2: u8) -> u8 {
    let mut mix = 0;
    mix |= (b1 & 0x01) << 7;
    mix |= (b2 & 0x01) << 6;
    mix |= (b1 & 0x02) << 4;
    mix |= (b2 & 0x02) << 3;
    mix |= (b1 & 0x04) << 1;
    mix |= b2 & 0x04;
    mix |= (b1 & 0x08) >> 2;
    mix |= (b2 & 0x08) >> 3;
    mix
}

/// Recompute the whole wire buffer from the framebuffer
pub fn convert(framebuffer: &FrameBuffer, wire: &mut WireBuffer) {
    let source = framebuffer.as_bytes();
    let mut k = 0;

    for i in (0..PANEL_COLUMNS).step_by(2) {
        for j in (0..PANEL_BANDS).step_by(BANDS_PER_GROUP) {
            for band in j..j + BANDS_PER_GROUP {
                let b1 = source[band * PANEL_COLUMNS + i];
                let b2 = source[band * PANEL_COLUMNS + i + 1];

                wire[k] = pack_nibbles(b1, b2);
                wire[k + 1] = pack_nibbles(b1 >> 4, b2 >> 4);
                k += 2;
            }
        }
    }

    debug_assert_eq!(k, WIRE_BUFFER_SIZE);
}

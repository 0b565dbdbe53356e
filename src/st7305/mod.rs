//! ST7305 Reflective LCD Driver
//!
//! Used in the 2.9" 168×384 monochrome reflective (always-on) panels sold
//! with the ST7305 controller.
//!
//! ### Usage
//! The driver owns one logical black/white framebuffer. To display something you:
//!
//! 1. bring the controller up with [`driver::St7305::begin`]
//!    (or [`driver::St7305::reset`] followed by [`driver::St7305::initialize`])
//! 1. draw onto the driver, preferably with
//!    [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics)
//! 1. push the frame with [`driver::St7305::refresh`]
//!
//! ### Memory layout
//!
//! The framebuffer keeps 8 vertically stacked pixels per byte, one byte per
//! column and 8-row band. The controller wants something else entirely: two
//! adjacent columns interleaved into each wire byte. [`convert`] does that
//! permutation on every refresh.

pub mod config;
pub mod convert;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod graphics;
pub mod interface;
pub mod sequence;

mod cmd;
mod flag;

/// Source columns held by the framebuffer
pub const PANEL_COLUMNS: usize = 384;

/// 8-row bands held by the framebuffer
pub const PANEL_BANDS: usize = 21;

/// Pixel rows held by the framebuffer
pub const PANEL_ROWS: usize = PANEL_BANDS * 8;

/// Column groups of the controller window, 3 wire bytes each
pub const WINDOW_COLUMN_GROUPS: u8 = 14;

/// Rows of the controller window, one per column pair
pub const WINDOW_ROWS: u8 = 192;

/// First column group address the panel is wired to
pub const WINDOW_FIRST_COLUMN: u8 = 0x17;

/// Bytes per column group per window row
pub const BYTES_PER_GROUP: usize = 3;

/// Framebuffer size in bytes
pub const FRAMEBUFFER_SIZE: usize = PANEL_COLUMNS * PANEL_BANDS;

/// Wire buffer size in bytes, one full controller window
pub const WIRE_BUFFER_SIZE: usize =
    WINDOW_ROWS as usize * WINDOW_COLUMN_GROUPS as usize * BYTES_PER_GROUP;

//! Driver for ST7305 monochrome reflective LCD panels
//!
//! See [`st7305`] for the memory layout and the bring-up order.
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod st7305;

pub use crate::st7305::config::Config;
pub use crate::st7305::convert::{convert, pack_nibbles, WireBuffer};
pub use crate::st7305::driver::{ControllerState, St7305};
pub use crate::st7305::error::{DisplayError, Error};
pub use crate::st7305::framebuffer::{Canvas, FrameBuffer};
pub use crate::st7305::interface::{BusTransport, Mode, SpiInterface};
pub use crate::st7305::sequence::{InitStep, INIT_SEQUENCE};
pub use crate::st7305::{
    FRAMEBUFFER_SIZE, PANEL_BANDS, PANEL_COLUMNS, PANEL_ROWS, WIRE_BUFFER_SIZE,
};

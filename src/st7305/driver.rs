//! ST7305 Display Driver Implementation
//!
//! This module contains the protocol driver for the ST7305 reflective LCD controller.
//! It owns the framebuffer, the conversion buffer and the bus transport.
//!
//! ## Architecture
//!
//! ### Bring-up
//! - `reset()` - Pulse the reset line
//! - `initialize()` - Send the init table, then clear the framebuffer
//! - `begin()` - Both of the above
//!
//! ### Frame transfer
//! - `refresh()` - Convert the framebuffer and push it to the panel
//! - `set_window()` - Address the full controller window
//! - `send_frame()` - Memory write followed by one data burst
//!
//! ## Transactions
//!
//! Every command and every data block is its own chip-select assertion:
//! select, DC level, bytes, deselect. A frame is a single data block of
//! [`WIRE_BUFFER_SIZE`] bytes and must never be split, the controller would
//! keep writing from wherever its address pointer stopped.
//!
//! ## State
//!
//! The controller moves `Reset -> Initialized -> Ready` once per power cycle:
//! `initialize()` leaves it `Initialized`, the first window it gets makes it
//! `Ready`. Frames are refused in `Reset`. Nothing here guards against two
//! refreshes interleaving; callers serialize access.

use crate::st7305::cmd::Cmd;
use crate::st7305::config::Config;
use crate::st7305::convert::{self, WireBuffer};
use crate::st7305::error::Error;
use crate::st7305::framebuffer::{Canvas, FrameBuffer};
use crate::st7305::interface::{BusTransport, Mode};
use crate::st7305::sequence::{COLUMN_WINDOW, INIT_SEQUENCE, ROW_WINDOW};
use crate::st7305::WIRE_BUFFER_SIZE;

/// Where the controller is in its bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Powered or pulsed, configuration unknown
    Reset,
    /// Init table sent, display on, framebuffer cleared
    Initialized,
    /// A window has been addressed; the controller takes frames
    Ready,
}

/// ST7305 Reflective LCD Driver
///
/// ## Type Parameters
///
/// - `BUS` - transport to the controller, usually [`SpiInterface`]
///
/// [`SpiInterface`]: crate::st7305::interface::SpiInterface
pub struct St7305<BUS> {
    bus: BUS,
    config: Config,
    state: ControllerState,
    framebuffer: FrameBuffer,
    /// Scratch space for the converted frame, rebuilt on every refresh
    wire: WireBuffer,
}

impl<BUS> St7305<BUS>
where
    BUS: BusTransport,
{
    /// Create the driver without touching the bus
    ///
    /// Fails when the configured canvas is larger than the panel.
    pub fn new(bus: BUS, config: Config) -> Result<Self, Error> {
        let framebuffer = FrameBuffer::new(config.width, config.height)?;
        Ok(St7305 {
            bus,
            config,
            state: ControllerState::Reset,
            framebuffer,
            wire: [0; WIRE_BUFFER_SIZE],
        })
    }

    /// Reset, initialize and clear in one go
    pub fn begin(&mut self) -> Result<(), Error> {
        self.reset()?;
        self.initialize()
    }

    /// Pulse the reset line: high, low, high
    pub fn reset(&mut self) -> Result<(), Error> {
        log::info!("Resetting ST7305");
        self.state = ControllerState::Reset;

        self.bus.deselect()?;
        self.bus.set_reset(true)?;
        self.bus.delay_ms(self.config.reset_high_ms);
        self.bus.set_reset(false)?;
        self.bus.delay_ms(self.config.reset_low_ms);
        self.bus.set_reset(true)?;
        Ok(())
    }

    /// Send the init table and clear the framebuffer
    ///
    /// A failure partway leaves the controller half configured; the state
    /// stays `Reset` and a fresh `reset()` is needed before trying again.
    /// Running it again without a reset re-sends the whole table.
    pub fn initialize(&mut self) -> Result<(), Error> {
        log::info!("Initializing ST7305 ({} steps)", INIT_SEQUENCE.len());
        if self.state != ControllerState::Reset {
            log::warn!("Initializing from {:?} without a reset", self.state);
            self.state = ControllerState::Reset;
        }

        let tearing_effect = self.config.tearing_effect;
        for step in INIT_SEQUENCE.iter().filter(|step| step.applies(tearing_effect)) {
            cmd_with_data(&mut self.bus, step.opcode, step.data)?;
            if step.delay_ms > 0 {
                self.bus.delay_ms(step.delay_ms);
            }
        }
        self.framebuffer.clear();
        self.state = ControllerState::Initialized;
        log::info!("ST7305 initialized");
        Ok(())
    }

    /// Convert the framebuffer and push it to the panel
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.ensure_initialized()?;
        convert::convert(&self.framebuffer, &mut self.wire);
        self.set_window()?;
        log::debug!("Writing {} byte frame", self.wire.len());
        memory_write(&mut self.bus, &self.wire)
    }

    /// Address the full window the wire buffer is laid out for
    pub fn set_window(&mut self) -> Result<(), Error> {
        self.ensure_initialized()?;
        cmd_with_data(&mut self.bus, Cmd::COLUMN_ADDRESS_SET, &COLUMN_WINDOW)?;
        cmd_with_data(&mut self.bus, Cmd::ROW_ADDRESS_SET, &ROW_WINDOW)?;
        if self.state == ControllerState::Initialized {
            log::info!("ST7305 ready");
            self.state = ControllerState::Ready;
        }
        Ok(())
    }

    /// Stream a converted frame into the current window
    pub fn send_frame(&mut self, wire: &WireBuffer) -> Result<(), Error> {
        self.ensure_initialized()?;
        memory_write(&mut self.bus, wire)
    }

    /// Where the controller is in its bring-up
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Turn every pixel of the framebuffer off; the panel changes on the next refresh
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set or clear one pixel, reporting coordinates outside the canvas
    pub fn try_set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<(), Error> {
        self.framebuffer.try_set_pixel(x, y, on)
    }

    /// The framebuffer behind the driver
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub(crate) fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }

    /// Give back the bus
    pub fn release(self) -> BUS {
        self.bus
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        if self.state == ControllerState::Reset {
            log::warn!("Frame requested while controller is {:?}", self.state);
            return Err(Error::NotInitialized);
        }
        Ok(())
    }
}

/// Memory write command followed by the whole frame as one data block
fn memory_write<BUS: BusTransport>(bus: &mut BUS, wire: &WireBuffer) -> Result<(), Error> {
    cmd(bus, Cmd::MEMORY_WRITE)?;
    data(bus, wire)
}

fn cmd_with_data<BUS: BusTransport>(bus: &mut BUS, command: u8, bytes: &[u8]) -> Result<(), Error> {
    cmd(bus, command)?;
    if !bytes.is_empty() {
        data(bus, bytes)?;
    }
    Ok(())
}

/// One command byte in its own transaction
fn cmd<BUS: BusTransport>(bus: &mut BUS, command: u8) -> Result<(), Error> {
    log::debug!("cmd 0x{:02X}", command);
    transaction(bus, Mode::Command, &[command])
}

/// One block of data bytes in its own transaction
fn data<BUS: BusTransport>(bus: &mut BUS, bytes: &[u8]) -> Result<(), Error> {
    transaction(bus, Mode::Data, bytes)
}

/// Select, set DC, write, deselect. Chip select is released even when the
/// transfer failed; the first error wins.
fn transaction<BUS: BusTransport>(bus: &mut BUS, mode: Mode, bytes: &[u8]) -> Result<(), Error> {
    bus.select()?;
    let sent = bus.set_mode(mode).and_then(|_| bus.write(bytes));
    let released = bus.deselect();
    if let Err(e) = &sent {
        log::error!("Bus transaction of {} bytes failed: {:?}", bytes.len(), e);
    }
    sent?;
    released?;
    Ok(())
}

impl<BUS> Canvas for St7305<BUS>
where
    BUS: BusTransport,
{
    fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        self.framebuffer.set_pixel(x, y, on);
    }

    fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    fn height(&self) -> u32 {
        self.framebuffer.height()
    }
}

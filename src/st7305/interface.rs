//! Bus transport between the driver and the controller
//!
//! [`BusTransport`] is the raw line-level contract the protocol driver talks
//! through. [`SpiInterface`] implements it on top of `embedded-hal` so the
//! driver runs on any HAL; tests plug in a recording fake instead.
use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// Level of the data/command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// DC low, the next byte is an opcode
    Command,
    /// DC high, the next bytes are parameters or pixel data
    Data,
}

/// Byte-oriented control bus with chip select, DC and reset lines
pub trait BusTransport {
    /// Assert chip select
    fn select(&mut self) -> Result<(), DisplayError>;

    /// Release chip select once every byte written so far is on the wire
    fn deselect(&mut self) -> Result<(), DisplayError>;

    /// Drive the data/command line
    fn set_mode(&mut self, mode: Mode) -> Result<(), DisplayError>;

    /// Clock bytes out
    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError>;

    /// Drive the reset line
    fn set_reset(&mut self, high: bool) -> Result<(), DisplayError>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// [`BusTransport`] over an `embedded-hal` SPI bus and GPIO pins
pub struct SpiInterface<SPI, CS, DC, RST, DELAY> {
    /// SPI bus, chip select is driven separately
    spi: SPI,
    /// Chip select, active low
    cs: CS,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
    delay: DELAY,
}

impl<SPI, CS, DC, RST, DELAY> SpiInterface<SPI, CS, DC, RST, DELAY> {
    /// Wrap the bus and pins
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, delay: DELAY) -> Self {
        SpiInterface {
            spi,
            cs,
            dc,
            rst,
            delay,
        }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, CS, DC, RST, DELAY) {
        (self.spi, self.cs, self.dc, self.rst, self.delay)
    }
}

impl<SPI, CS, DC, RST, DELAY> BusTransport for SpiInterface<SPI, CS, DC, RST, DELAY>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn select(&mut self) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)
    }

    fn deselect(&mut self) -> Result<(), DisplayError> {
        // The bus may still be shifting out the tail of the last write
        self.spi.flush().map_err(|_| DisplayError::BusWriteError)?;
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), DisplayError> {
        match mode {
            Mode::Command => self.dc.set_low(),
            Mode::Data => self.dc.set_high(),
        }
        .map_err(|_| DisplayError::DCError)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        match self.spi.write(bytes) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write of {} bytes failed: {:?}", bytes.len(), e);
                Err(DisplayError::BusWriteError)
            }
        }
    }

    fn set_reset(&mut self, high: bool) -> Result<(), DisplayError> {
        if high {
            self.rst.set_high()
        } else {
            self.rst.set_low()
        }
        .map_err(|_| DisplayError::RSError)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

//! Driver errors

pub use display_interface::DisplayError;

/// Errors returned by the ST7305 driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate or dimension lies outside the panel
    OutOfBounds {
        /// Column
        x: u32,
        /// Row
        y: u32,
    },
    /// The bus transport reported a failure
    BusTransferFailed(DisplayError),
    /// A frame was pushed before the controller finished its init sequence
    NotInitialized,
}

impl From<DisplayError> for Error {
    fn from(err: DisplayError) -> Self {
        Error::BusTransferFailed(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => write!(f, "pixel ({}, {}) is outside the panel", x, y),
            Self::BusTransferFailed(e) => write!(f, "bus transfer failed: {:?}", e),
            Self::NotInitialized => write!(f, "controller is not initialized"),
        }
    }
}

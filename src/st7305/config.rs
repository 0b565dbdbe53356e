//! Driver configuration

use crate::st7305::{PANEL_COLUMNS, PANEL_ROWS};

const RESET_HIGH_MS: u32 = 50;
const RESET_LOW_MS: u32 = 100;

/// Settings the driver is constructed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Logical width in pixels, at most [`PANEL_COLUMNS`]
    pub width: u32,
    /// Logical height in pixels, at most [`PANEL_ROWS`]
    pub height: u32,
    /// Enable the tearing effect output line during init
    pub tearing_effect: bool,
    /// How long RST is held high before the low pulse
    pub reset_high_ms: u32,
    /// Length of the low pulse on RST
    pub reset_low_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: PANEL_COLUMNS as u32,
            height: PANEL_ROWS as u32,
            tearing_effect: false,
            reset_high_ms: RESET_HIGH_MS,
            reset_low_ms: RESET_LOW_MS,
        }
    }
}

impl Config {
    /// Set the logical canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable the tearing effect line
    pub fn with_tearing_effect(mut self, enabled: bool) -> Self {
        self.tearing_effect = enabled;
        self
    }

    /// Override the reset pulse timing
    pub fn with_reset_timing(mut self, high_ms: u32, low_ms: u32) -> Self {
        self.reset_high_ms = high_ms;
        self.reset_low_ms = low_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_whole_panel() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (384, 168));
        assert!(!config.tearing_effect);
        assert_eq!((config.reset_high_ms, config.reset_low_ms), (50, 100));
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_size(200, 100)
            .with_tearing_effect(true)
            .with_reset_timing(10, 20);
        assert_eq!((config.width, config.height), (200, 100));
        assert!(config.tearing_effect);
        assert_eq!((config.reset_high_ms, config.reset_low_ms), (10, 20));
    }
}

/// Data byte values sent with the ST7305 configuration commands.
///
/// Multi-byte register payloads live in the init table itself; these are the
/// single-byte settings that carry a meaning of their own.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Booster Enable (0xD1)
    pub const BOOSTER_ON: u8 = 0x01;

    // Frame Rate Control (0xB2): 51Hz in HPM, 1Hz in LPM
    pub const FRAME_RATE_HPM_51HZ_LPM_1HZ: u8 = 0x05;

    // Source EQ Enable (0xB7)
    pub const SOURCE_EQ_ON: u8 = 0x13;

    // Gate Line Setting (0xB0): 96 gate lines, 4 pixel rows each = 384 lines
    pub const GATE_LINES_384: u8 = 0x60;

    // Source Voltage Select (0xC9)
    pub const SOURCE_VOLTAGE_VSHP1_VSLP1: u8 = 0x00;

    // Memory Data Access Control (0x36)
    pub const MADCTL_DEFAULT: u8 = 0x00;

    // Data Format Select (0x3A): 3 write cycles per 24 bit, monochrome
    pub const DATA_FORMAT_MONO_3WRITE: u8 = 0x11;

    // Gamma Mode Setting (0xB9)
    pub const GAMMA_MONO: u8 = 0x20;

    // Panel Setting (0xB8): 1-dot inversion, frame interval, one line interlace
    pub const PANEL_ONE_LINE_INTERLACE: u8 = 0x29;

    // Tearing Effect Line ON (0x35)
    pub const TE_VBLANK_ONLY: u8 = 0x00;

    // Auto Power Down (0xD0)
    pub const AUTO_POWER_DOWN_ON: u8 = 0xFF;
}

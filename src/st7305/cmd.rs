pub struct Cmd;
impl Cmd {
    // Power and voltage
    pub const NVM_LOAD_CONTROL: u8 = 0xD6;
    pub const BOOSTER_ENABLE: u8 = 0xD1;
    pub const GATE_VOLTAGE: u8 = 0xC0;
    pub const VSHP_SETTING: u8 = 0xC1;
    pub const VSLP_SETTING: u8 = 0xC2;
    pub const VSHN_SETTING: u8 = 0xC4;
    pub const VSLN_SETTING: u8 = 0xC5;
    pub const SOURCE_VOLTAGE_SELECT: u8 = 0xC9;
    pub const AUTO_POWER_DOWN: u8 = 0xD0;

    // Timing
    pub const FRAME_RATE_CONTROL: u8 = 0xB2;
    pub const GATE_EQ_HPM: u8 = 0xB3;
    pub const GATE_EQ_LPM: u8 = 0xB4;
    pub const GATE_TIMING: u8 = 0x62;
    pub const SOURCE_EQ_ENABLE: u8 = 0xB7;
    pub const GATE_LINE_SETTING: u8 = 0xB0;

    // Panel mode
    pub const SLEEP_OUT: u8 = 0x11;
    pub const MEMORY_DATA_ACCESS: u8 = 0x36;
    pub const DATA_FORMAT_SELECT: u8 = 0x3A;
    pub const GAMMA_MODE: u8 = 0xB9;
    pub const PANEL_SETTING: u8 = 0xB8;
    pub const TEARING_EFFECT_ON: u8 = 0x35;
    pub const LOW_POWER_MODE: u8 = 0x39;
    pub const DISPLAY_ON: u8 = 0x29;

    // Update
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    pub const ROW_ADDRESS_SET: u8 = 0x2B;
    pub const MEMORY_WRITE: u8 = 0x2C;
}

/*
Vendor reference code names these:
0xD6 - NVM Load Control
0xD1 - Booster Enable
0xC0 - Gate Voltage Setting
0xC1/0xC2/0xC4/0xC5 - VSHP/VSLP/VSHN/VSLN Setting
0xB2 - Frame Rate Control
0xB3/0xB4 - Update Period Gate EQ Control in HPM/LPM
0xB0 - Gate Line Setting
0x39 - Low Power Mode ON
*/

//! Controller initialization table
//!
//! The bring-up sequence is data, not code: [`St7305::initialize`] walks
//! [`INIT_SEQUENCE`] in order and sends each step as one command transaction
//! followed by one data transaction.
//!
//! [`St7305::initialize`]: crate::st7305::driver::St7305::initialize

use crate::st7305::cmd::Cmd;
use crate::st7305::flag::Flag;
use crate::st7305::{WINDOW_COLUMN_GROUPS, WINDOW_FIRST_COLUMN, WINDOW_ROWS};

/// Delay after sleep out and after display on
const POWER_SETTLE_MS: u32 = 100;

/// Column window covering the whole wire buffer
pub const COLUMN_WINDOW: [u8; 2] = [
    WINDOW_FIRST_COLUMN,
    WINDOW_FIRST_COLUMN + WINDOW_COLUMN_GROUPS - 1,
];

/// Row window covering the whole wire buffer
pub const ROW_WINDOW: [u8; 2] = [0x00, WINDOW_ROWS - 1];

/// When a step is part of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Always sent
    Always,
    /// Only sent when the tearing effect line is enabled
    TearingEffect,
}

/// One command of the init sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    /// Command byte
    pub opcode: u8,
    /// Parameter bytes, possibly empty
    pub data: &'static [u8],
    /// Pause after the step, in milliseconds
    pub delay_ms: u32,
    /// Whether the step applies to the current configuration
    pub condition: Condition,
}

impl InitStep {
    const fn new(opcode: u8, data: &'static [u8]) -> Self {
        InitStep {
            opcode,
            data,
            delay_ms: 0,
            condition: Condition::Always,
        }
    }

    const fn then_wait(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    const fn only_if(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Whether this step is sent with the tearing effect line set as given
    pub fn applies(&self, tearing_effect: bool) -> bool {
        match self.condition {
            Condition::Always => true,
            Condition::TearingEffect => tearing_effect,
        }
    }
}

/// The full bring-up sequence, from NVM load to display on
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::new(Cmd::NVM_LOAD_CONTROL, &[0x13, 0x02]),
    InitStep::new(Cmd::BOOSTER_ENABLE, &[Flag::BOOSTER_ON]),
    InitStep::new(Cmd::GATE_VOLTAGE, &[0x08, 0x06]),
    // VSHP 4.8V
    InitStep::new(Cmd::VSHP_SETTING, &[0x3C, 0x3E, 0x3C, 0x3C]),
    // VSLP 0.98V
    InitStep::new(Cmd::VSLP_SETTING, &[0x23, 0x21, 0x23, 0x23]),
    // VSHN -3.6V
    InitStep::new(Cmd::VSHN_SETTING, &[0x5A, 0x5C, 0x5A, 0x5A]),
    // VSLN 0.22V
    InitStep::new(Cmd::VSLN_SETTING, &[0x37, 0x35, 0x37, 0x37]),
    InitStep::new(Cmd::FRAME_RATE_CONTROL, &[Flag::FRAME_RATE_HPM_51HZ_LPM_1HZ]),
    InitStep::new(
        Cmd::GATE_EQ_HPM,
        &[0xE5, 0xF6, 0x17, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x71],
    ),
    InitStep::new(
        Cmd::GATE_EQ_LPM,
        &[0x05, 0x46, 0x77, 0x77, 0x77, 0x77, 0x76, 0x45],
    ),
    InitStep::new(Cmd::GATE_TIMING, &[0x32, 0x03, 0x1F]),
    InitStep::new(Cmd::SOURCE_EQ_ENABLE, &[Flag::SOURCE_EQ_ON]),
    InitStep::new(Cmd::GATE_LINE_SETTING, &[Flag::GATE_LINES_384]),
    InitStep::new(Cmd::SLEEP_OUT, &[]).then_wait(POWER_SETTLE_MS),
    InitStep::new(Cmd::SOURCE_VOLTAGE_SELECT, &[Flag::SOURCE_VOLTAGE_VSHP1_VSLP1]),
    InitStep::new(Cmd::MEMORY_DATA_ACCESS, &[Flag::MADCTL_DEFAULT]),
    InitStep::new(Cmd::DATA_FORMAT_SELECT, &[Flag::DATA_FORMAT_MONO_3WRITE]),
    InitStep::new(Cmd::GAMMA_MODE, &[Flag::GAMMA_MONO]),
    InitStep::new(Cmd::PANEL_SETTING, &[Flag::PANEL_ONE_LINE_INTERLACE]),
    InitStep::new(Cmd::COLUMN_ADDRESS_SET, &COLUMN_WINDOW),
    InitStep::new(Cmd::ROW_ADDRESS_SET, &ROW_WINDOW),
    InitStep::new(Cmd::TEARING_EFFECT_ON, &[Flag::TE_VBLANK_ONLY])
        .only_if(Condition::TearingEffect),
    InitStep::new(Cmd::AUTO_POWER_DOWN, &[Flag::AUTO_POWER_DOWN_ON]),
    InitStep::new(Cmd::LOW_POWER_MODE, &[]),
    InitStep::new(Cmd::DISPLAY_ON, &[]).then_wait(POWER_SETTLE_MS),
];

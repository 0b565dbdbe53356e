//! Recording bus transport shared by the integration tests

#![allow(dead_code)]

use st7305::{BusTransport, DisplayError, Mode};

/// One completed bus event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A command transaction carrying one opcode
    Command(u8),
    /// A data transaction with every byte written under one chip select
    Data(Vec<u8>),
    /// Reset line driven to the given level
    Reset(bool),
    /// Blocking delay
    Delay(u32),
}

/// Collects transactions and checks they are well formed
///
/// Writes outside a chip-select assertion, nested selects or a mode change
/// mid-transaction are recorded as violations instead of events.
#[derive(Default)]
pub struct RecordingTransport {
    pub events: Vec<Event>,
    pub violations: Vec<String>,
    selected: bool,
    mode: Option<Mode>,
    pending: Vec<u8>,
    wrote: bool,
    /// Fail the write with this index (0-based), counted across all writes
    pub fail_write_at: Option<usize>,
    writes: usize,
    pub selects: usize,
    pub deselects: usize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(write: usize) -> Self {
        RecordingTransport {
            fail_write_at: Some(write),
            ..Self::default()
        }
    }

    /// Opcodes in the order they were sent
    pub fn opcodes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Command(op) => Some(*op),
                _ => None,
            })
            .collect()
    }

    /// Only the command and data events, without reset and delay
    pub fn transactions(&self) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Command(_) | Event::Data(_)))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl BusTransport for RecordingTransport {
    fn select(&mut self) -> Result<(), DisplayError> {
        if self.selected {
            self.violations.push("select while already selected".into());
        }
        self.selected = true;
        self.mode = None;
        self.wrote = false;
        self.pending.clear();
        self.selects += 1;
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), DisplayError> {
        self.deselects += 1;
        if !self.selected {
            return Ok(());
        }
        self.selected = false;
        if !self.wrote {
            return Ok(());
        }
        match self.mode {
            Some(Mode::Command) => {
                if self.pending.len() != 1 {
                    self.violations
                        .push(format!("command transaction with {} bytes", self.pending.len()));
                }
                for op in self.pending.drain(..) {
                    self.events.push(Event::Command(op));
                }
            }
            Some(Mode::Data) => {
                let bytes = std::mem::take(&mut self.pending);
                self.events.push(Event::Data(bytes));
            }
            None => self.violations.push("write without mode".into()),
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), DisplayError> {
        if self.wrote {
            self.violations.push("mode change inside a transaction".into());
        }
        self.mode = Some(mode);
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_write_at == Some(index) {
            return Err(DisplayError::BusWriteError);
        }
        if !self.selected {
            self.violations.push("write without chip select".into());
        }
        if self.wrote {
            self.violations.push("transaction split into several writes".into());
        }
        self.wrote = true;
        self.pending.extend_from_slice(bytes);
        Ok(())
    }

    fn set_reset(&mut self, high: bool) -> Result<(), DisplayError> {
        self.events.push(Event::Reset(high));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}

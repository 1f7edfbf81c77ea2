//! Console Output Devices.
//!
//! Implements the two stock `OutputSink`s: `StdoutSink` prints each value as a
//! decimal line on the process stdout, and `BufferSink` records values in a
//! shared buffer that stays readable after the sink is boxed into a `Cpu`.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::soc::traits::OutputSink;

/// Writes every value to stdout as a decimal line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn name(&self) -> &'static str {
        "STDOUT"
    }

    fn emit(&mut self, value: u8) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{value}")?;
        out.flush()
    }
}

/// Captures emitted values in memory.
///
/// Clones share the same buffer, so keep one clone and hand the other to the CPU.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    values: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every value emitted so far, oldest first.
    pub fn values(&self) -> Vec<u8> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured output exactly as `StdoutSink` would have printed it.
    pub fn text(&self) -> String {
        self.values()
            .iter()
            .map(|value| format!("{value}\n"))
            .collect()
    }
}

impl OutputSink for BufferSink {
    fn name(&self) -> &'static str {
        "BUFFER"
    }

    fn emit(&mut self, value: u8) -> io::Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
        Ok(())
    }
}

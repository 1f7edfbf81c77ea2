//! Configuration system for the LS-8 CPU.
//!
//! This module defines the configuration structures used to parameterize the engine.
//! It provides:
//! 1. **Defaults:** Baseline architectural values (memory size, reset stack pointer).
//! 2. **Structures:** `general` run-loop settings and `system` storage settings.
//! 3. **Enums:** The policy applied when the decoder meets an unknown opcode.
//!
//! Configuration is read from JSON by the CLI (`--config`) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the engine.
mod defaults {
    /// Addressable memory in bytes.
    pub const MEMORY_SIZE: usize = super::constants::MEMORY_SIZE;

    /// Reset value of `R7`.
    pub const INITIAL_SP: u8 = super::constants::INITIAL_SP;
}

/// Action taken when the byte at PC is not a recognized opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnknownOpcodePolicy {
    /// Stop the run with `CpuError::UnknownOpcode`.
    #[default]
    Fault,
    /// Log a warning, advance PC by one byte, and keep running.
    Skip,
}

/// Root configuration structure containing all engine settings.
///
/// # Examples
///
/// ```
/// use ls8_core::config::{Config, UnknownOpcodePolicy};
///
/// let config = Config::default();
/// assert_eq!(config.system.memory_size, 256);
/// assert_eq!(config.general.unknown_opcode, UnknownOpcodePolicy::Fault);
///
/// let json = r#"{
///     "general": { "trace": true, "max_steps": 1000, "unknown_opcode": "Skip" },
///     "system": { "memory_size": 128 }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.system.memory_size, 128);
/// assert_eq!(config.system.initial_sp, 0xF4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run-loop settings.
    pub general: GeneralConfig,
    /// Memory and register file settings.
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from JSON; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not valid configuration JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Run-loop settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log PC, the next three bytes, and all registers before every step.
    pub trace: bool,

    /// Maximum number of steps `run()` executes before failing; `None` is unbounded.
    pub max_steps: Option<u64>,

    /// What to do when the decoder meets an unknown opcode.
    pub unknown_opcode: UnknownOpcodePolicy,
}

/// Memory and register file settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Number of addressable memory bytes.
    pub memory_size: usize,

    /// Reset value of the stack pointer register `R7`.
    pub initial_sp: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            initial_sp: defaults::INITIAL_SP,
        }
    }
}

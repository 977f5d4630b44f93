//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize the
//! emulator. It provides:
//! 1. **Defaults:** Reset values for the program counter and stack pointer.
//! 2. **Structures:** Hierarchical config for general settings and memory layout.
//!
//! Configuration is supplied as JSON (`ls8 run --config cfg.json`) or via
//! `Config::default()`. Every field is optional in JSON.

use serde::Deserialize;

use crate::common::constants::{PC_INIT, SP_INIT};

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "initial_sp": 240 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.initial_sp, 0xF0);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General emulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General emulation settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Print an LS-8 trace line to stderr before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,
}

impl GeneralConfig {
    const fn default_start_pc() -> u8 {
        PC_INIT
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: PC_INIT,
        }
    }
}

/// Memory layout configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Stack pointer reset value.
    #[serde(default = "MemoryConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl MemoryConfig {
    const fn default_initial_sp() -> u8 {
        SP_INIT
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            initial_sp: SP_INIT,
        }
    }
}

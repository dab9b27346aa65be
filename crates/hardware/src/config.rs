//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (data memory size, register-zero policy, drain policy).
//! 2. **Structures:** Sectioned config for general, memory, and pipeline settings.
//! 3. **Validation:** Rejection of settings the simulator cannot honour.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with `Config::default()`.
//! Missing fields fall back to their defaults.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_DATA_MEM_SIZE, MAX_DATA_MEM_SIZE};
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Data memory size in bytes.
    pub const DATA_MEM_SIZE: usize = super::DEFAULT_DATA_MEM_SIZE;

    /// Register `$0` behaves as an ordinary register.
    pub const HARDWIRE_ZERO: bool = false;

    /// In-flight instructions drain through WB before the run halts.
    pub const DRAIN: bool = true;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_cycles": 500 },
///     "memory": { "data_mem_size": 4096 },
///     "pipeline": { "hardwire_zero": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, Some(500));
/// assert_eq!(config.memory.data_mem_size, 4096);
/// assert!(config.pipeline.hardwire_zero);
/// assert!(config.pipeline.drain);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline policy configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the JSON is malformed or a value is rejected
    /// by [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for a zero or oversized data memory, or a
    /// zero cycle limit.
    pub fn validate(&self) -> Result<(), SimError> {
        let size = self.memory.data_mem_size;
        if size == 0 {
            return Err(SimError::Config("data_mem_size must be non-zero".into()));
        }
        if size > MAX_DATA_MEM_SIZE {
            return Err(SimError::Config(format!(
                "data_mem_size {size} exceeds the {MAX_DATA_MEM_SIZE}-byte limit"
            )));
        }
        if self.general.max_cycles == Some(0) {
            return Err(SimError::Config("max_cycles must be non-zero".into()));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Abort with [`SimError::CycleLimit`] after this many cycles
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Emit a `debug` event with the pipeline state after every cycle
    #[serde(default)]
    pub trace: bool,
}

/// Data memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Data memory size in bytes
    #[serde(default = "MemoryConfig::default_data_mem_size")]
    pub data_mem_size: usize,
}

impl MemoryConfig {
    /// Returns the default data memory size.
    const fn default_data_mem_size() -> usize {
        defaults::DATA_MEM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_mem_size: defaults::DATA_MEM_SIZE,
        }
    }
}

/// Pipeline policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Discard writes to `$0` and never treat it as a hazard destination
    #[serde(default = "PipelineConfig::default_hardwire_zero")]
    pub hardwire_zero: bool,

    /// Keep cycling until every latch is empty once fetch passes the end of
    /// the program. When false, halt as soon as fetch passes the end.
    #[serde(default = "PipelineConfig::default_drain")]
    pub drain: bool,
}

impl PipelineConfig {
    /// Returns the default register-zero policy.
    const fn default_hardwire_zero() -> bool {
        defaults::HARDWIRE_ZERO
    }

    /// Returns the default drain policy.
    const fn default_drain() -> bool {
        defaults::DRAIN
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            hardwire_zero: defaults::HARDWIRE_ZERO,
            drain: defaults::DRAIN,
        }
    }
}

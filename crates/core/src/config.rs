//! Configuration for the MIPS-lite simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline settings (input trace, cycle cap, forwarding).
//! 2. **Structure:** A single flat `Config` consumed by the driver and the CLI.
//!
//! Configuration is supplied as JSON (`--config` on the CLI, deserialized with
//! serde) or via `Config::default()`; individual command-line flags override
//! whichever source was used.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Input memory image used when no `-i` flag is given.
    pub const INPUT_IMAGE: &str = "traces/random.txt";

    /// Driver-level safety cap on simulated clock cycles.
    ///
    /// A run that has not fetched and drained a HALT within this many cycles
    /// is treated as runaway and aborted with a timeout error.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Simulation run configuration.
///
/// Every field has a default, so a partial JSON document (or none at all)
/// is a valid configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the input memory image.
    pub input: String,

    /// Path to persist the memory image to on exit, if any.
    pub output: Option<String>,

    /// Whether the pipeline resolves data hazards by operand forwarding.
    pub forwarding: bool,

    /// Whether the final report includes the timing section.
    pub timing: bool,

    /// Whether the final report includes the full memory image.
    pub print_memory: bool,

    /// Safety cap on simulated clock cycles before the run is aborted.
    pub max_cycles: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: defaults::INPUT_IMAGE.to_string(),
            output: None,
            forwarding: false,
            timing: false,
            print_memory: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

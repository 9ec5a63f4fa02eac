//! Simulator: owns the pipeline engine and drives it to completion.
//!
//! The driver adds the one policy the core deliberately lacks: a safety cap
//! on total cycles, so a program that never halts surfaces as a timeout
//! instead of spinning forever.

use crate::common::{RegisterFile, SimError};
use crate::config::Config;
use crate::core::PipelineEngine;
use crate::mem::MemoryAccess;
use crate::stats::Stats;

/// Top-level simulator: the pipeline engine plus the driver's cycle cap.
pub struct Simulator<M: MemoryAccess> {
    /// The pipeline engine and everything it owns.
    pub engine: PipelineEngine<M>,
    max_cycles: u64,
}

impl<M: MemoryAccess> Simulator<M> {
    /// Creates a simulator over a loaded memory image.
    ///
    /// # Arguments
    ///
    /// * `memory` - Memory service holding the program image.
    /// * `config` - Run configuration (forwarding flag and cycle cap).
    pub fn new(memory: M, config: &Config) -> Self {
        Self {
            engine: PipelineEngine::new(
                RegisterFile::new(),
                Stats::new(),
                memory,
                config.forwarding,
            ),
            max_cycles: config.max_cycles,
        }
    }

    /// Advances the simulation by one clock cycle.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.engine.cycle()
    }

    /// Runs the simulation until the program halts.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the pipeline has drained after a HALT, or
    /// [`SimError::Timeout`] when the cycle cap is hit first; stage faults
    /// propagate unchanged.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.engine.is_program_finished() {
            if self.engine.stats.clock_cycles >= self.max_cycles {
                return Err(SimError::Timeout {
                    cycles: self.max_cycles,
                });
            }
            self.tick()?;
        }
        Ok(())
    }
}

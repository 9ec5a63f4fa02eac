//! The pipeline cycle sequencer.
//!
//! This module drives one simulated clock per call. It provides:
//! 1. **Stage Ordering:** Writeback, memory, and execute evaluate oldest
//!    first, then hazard detection, decode, and fetch, then latch advancement.
//! 2. **Branch Handling:** Always-not-taken with a two-latch flush when
//!    execute resolves a branch taken.
//! 3. **Stall Handling:** Bubble insertion into execute while decode and
//!    fetch hold their instructions in place.
//! 4. **Termination:** The run ends once a HALT has been fetched and every
//!    latch has drained.

use log::trace;

use crate::common::constants::PIPELINE_DEPTH;
use crate::common::{RegisterFile, SimError};
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{LatchEntry, Stage};
use crate::core::pipeline::stages;
use crate::mem::MemoryAccess;
use crate::stats::Stats;

/// The five-stage pipeline engine.
///
/// Owns the program counter, the stage latches, and the control flags, plus
/// the injected register file, statistics sink, and memory service. The
/// register file is mutated only during writeback and the memory service
/// only during fetch and the memory stage.
pub struct PipelineEngine<M: MemoryAccess> {
    /// Architectural register file.
    pub regs: RegisterFile,
    /// Statistics sink.
    pub stats: Stats,
    /// Memory service.
    pub memory: M,
    /// Stage latches, indexed by [`Stage`]. `None` is a bubble.
    pub latches: [Option<LatchEntry>; PIPELINE_DEPTH],
    /// Program counter; always word-aligned.
    pub pc: u32,
    /// Whether operand forwarding resolves data hazards.
    pub forwarding_enabled: bool,
    /// Set when a HALT enters fetch; stops further fetching.
    pub halt_fetched: bool,
    /// Set by execute when a branch resolves taken; cleared by the flush.
    pub branch_taken: bool,
    /// Rederived each cycle by hazard detection; consumed by advancement.
    pub stall_this_cycle: bool,
}

impl<M: MemoryAccess> PipelineEngine<M> {
    /// Creates an engine over injected collaborators.
    ///
    /// The PC starts at 0 with every latch empty and all flags clear.
    ///
    /// # Arguments
    ///
    /// * `regs` - Architectural register file.
    /// * `stats` - Statistics sink.
    /// * `memory` - Memory service.
    /// * `forwarding_enabled` - Whether operand forwarding is active.
    pub fn new(regs: RegisterFile, stats: Stats, memory: M, forwarding_enabled: bool) -> Self {
        Self {
            regs,
            stats,
            memory,
            latches: Default::default(),
            pc: 0,
            forwarding_enabled,
            halt_fetched: false,
            branch_taken: false,
            stall_this_cycle: false,
        }
    }

    /// The current program counter.
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Whether operand forwarding is active.
    pub fn is_forwarding_enabled(&self) -> bool {
        self.forwarding_enabled
    }

    /// The latch entry occupying a stage, if any.
    pub fn stage(&self, stage: Stage) -> Option<&LatchEntry> {
        self.latches[stage as usize].as_ref()
    }

    /// Whether the program has terminated.
    ///
    /// True once a HALT has been fetched and every latch has drained.
    pub fn is_program_finished(&self) -> bool {
        self.halt_fetched && self.latches.iter().all(Option::is_none)
    }

    /// Advances the simulation by exactly one clock cycle.
    ///
    /// A no-op once the program has finished. Stages evaluate oldest first so
    /// a register committed at writeback is observable by decode in the same
    /// cycle and younger stages never clobber state an older stage still
    /// needs. A branch resolved taken short-circuits the younger half of the
    /// cycle: the PC is redirected and the two speculatively fetched latches
    /// are flushed before the pipeline advances.
    ///
    /// # Returns
    ///
    /// An error when a stage faults (invalid address, undecodable word, or a
    /// broken engine invariant). Statistics stay at their last consistent
    /// state.
    pub fn cycle(&mut self) -> Result<(), SimError> {
        if self.is_program_finished() {
            return Ok(());
        }
        self.stats.clock_cycles += 1;

        stages::writeback_stage(self);
        stages::memory_stage(self)?;
        stages::execute_stage(self);

        if self.branch_taken {
            if let Some(ex) = &self.latches[Stage::Execute as usize] {
                self.pc = ex.alu_result;
            }
            trace!("--  flush: redirecting fetch to {:#x}", self.pc);
            self.latches[Stage::Fetch as usize] = None;
            self.latches[Stage::Decode as usize] = None;
            self.branch_taken = false;
            self.stall_this_cycle = false;
            self.advance();
            return Ok(());
        }

        let check = hazards::check_hazards(
            self.latches[Stage::Decode as usize].as_ref(),
            self.latches[Stage::Execute as usize].as_ref(),
            self.latches[Stage::Memory as usize].as_ref(),
        );
        if check.any() {
            self.stats.data_hazards += 1;
        }
        self.stall_this_cycle = check.stall_required(self.forwarding_enabled);

        stages::decode_stage(self)?;
        stages::fetch_stage(self)?;
        self.advance();
        Ok(())
    }

    /// Shifts the latches down one stage.
    ///
    /// The writeback latch is dropped, memory moves to writeback, and
    /// execute moves to memory. On a stalled cycle a bubble enters execute
    /// while decode and fetch hold their entries and the stall is tallied;
    /// otherwise decode and fetch advance and the fetch latch empties.
    fn advance(&mut self) {
        self.latches[Stage::Writeback as usize] = self.latches[Stage::Memory as usize].take();
        self.latches[Stage::Memory as usize] = self.latches[Stage::Execute as usize].take();
        if self.stall_this_cycle {
            self.stats.stalls += 1;
            self.stall_this_cycle = false;
            trace!("--  stall: bubble inserted into execute");
        } else {
            self.latches[Stage::Execute as usize] = self.latches[Stage::Decode as usize].take();
            self.latches[Stage::Decode as usize] = self.latches[Stage::Fetch as usize].take();
        }
    }
}

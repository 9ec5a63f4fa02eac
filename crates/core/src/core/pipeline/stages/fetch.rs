//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the pipeline. It reads the
//! instruction word at the current program counter, decodes it into the
//! fetch latch, and advances the PC. Fetch follows the always-not-taken
//! branch model: the PC moves to the next sequential word every cycle and
//! taken branches are corrected later by the execute-stage flush.

use log::trace;

use crate::common::constants::WORD_SIZE;
use crate::common::SimError;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::latches::{LatchEntry, Stage};
use crate::isa::decode;
use crate::mem::MemoryAccess;

/// Executes the instruction fetch stage.
///
/// Fetches into the fetch latch only when it is unoccupied (a stalled cycle
/// leaves the previously fetched instruction in place) and only while no
/// HALT has been fetched. Fetching a HALT sets the halt flag and leaves the
/// PC on the HALT word, so the final architectural state reports the halt
/// address.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the pipeline engine.
///
/// # Returns
///
/// An error when the instruction address is invalid or the fetched word
/// does not decode.
pub fn fetch_stage<M: MemoryAccess>(engine: &mut PipelineEngine<M>) -> Result<(), SimError> {
    if engine.halt_fetched || engine.latches[Stage::Fetch as usize].is_some() {
        return Ok(());
    }

    let word = engine.memory.read_instruction(engine.pc)?;
    let instr = decode(word)?;
    trace!("IF  pc={:#x} inst={:#010x}", engine.pc, word);

    engine.latches[Stage::Fetch as usize] = Some(LatchEntry::new(instr, engine.pc));

    if instr.is_halt() {
        engine.halt_fetched = true;
    } else {
        engine.pc = engine.pc.wrapping_add(WORD_SIZE);
    }
    Ok(())
}

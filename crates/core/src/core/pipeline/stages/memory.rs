//! Memory (MEM) Stage.
//!
//! This module implements the data memory access stage. Loads read the word
//! at the effective address into the latch; stores write the `rt` operand to
//! the effective address and record the address in the touched set. Every
//! other instruction passes through untouched.

use log::trace;

use crate::common::SimError;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::latches::Stage;
use crate::mem::MemoryAccess;

/// Executes the memory stage.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the pipeline engine.
///
/// # Returns
///
/// An error when the effective address fails the alignment or bounds checks.
pub fn memory_stage<M: MemoryAccess>(engine: &mut PipelineEngine<M>) -> Result<(), SimError> {
    let Some(mem) = engine.latches[Stage::Memory as usize].as_ref() else {
        return Ok(());
    };
    let instr = mem.instr;
    let address = mem.alu_result;
    let store_value = mem.rt_value;
    let pc = mem.pc;

    if instr.is_load() {
        let data = engine.memory.read_data(address)?;
        trace!("MEM pc={:#x} load [{:#x}] -> {:#x}", pc, address, data);
        if let Some(entry) = engine.latches[Stage::Memory as usize].as_mut() {
            entry.mem_data = data;
        }
    } else if instr.is_store() {
        trace!("MEM pc={:#x} store [{:#x}] <- {:#x}", pc, address, store_value);
        engine.memory.write_data(address, store_value)?;
        engine.stats.record_memory_address(address);
    }
    Ok(())
}

//! Instruction Decode (ID) Stage.
//!
//! This module implements the operand-read stage of the pipeline. It reads
//! the source registers of the instruction in the decode latch (through the
//! forwarding network when forwarding is enabled) and resolves the
//! destination register for downstream hazard checks and writeback.

use log::trace;

use crate::common::SimError;
use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::Stage;
use crate::mem::MemoryAccess;

/// Executes the instruction decode stage.
///
/// Skipped entirely while a stall is pending: the stalled instruction stays
/// in the decode latch and re-decodes on the next non-stalled cycle, by which
/// time its producer has moved far enough down the pipeline. The `rt`
/// operand is read through the forwarding network only when the instruction
/// actually consumes it (R-type, BEQ, STW); for I-type writers `rt` names
/// the destination, not a source.
///
/// The destination register recorded in the latch is `None` for non-writing
/// instructions and for an architected destination of R0, which keeps R0 out
/// of hazard checks and out of the touched-register set.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the pipeline engine.
///
/// # Returns
///
/// An error when the forwarding network detects an internal contradiction.
pub fn decode_stage<M: MemoryAccess>(engine: &mut PipelineEngine<M>) -> Result<(), SimError> {
    if engine.stall_this_cycle {
        return Ok(());
    }
    let Some(id) = engine.latches[Stage::Decode as usize].as_ref() else {
        return Ok(());
    };
    let instr = id.instr;
    let pc = id.pc;

    let rs_value = read_operand(engine, instr.rs())?;
    let rt_value = if instr.reads_rt() {
        read_operand(engine, instr.rt())?
    } else {
        engine.regs.read(instr.rt())
    };

    trace!(
        "ID  pc={:#x} rs=R{} ({:#x}) rt=R{} ({:#x})",
        pc,
        instr.rs(),
        rs_value,
        instr.rt(),
        rt_value
    );

    if let Some(entry) = engine.latches[Stage::Decode as usize].as_mut() {
        entry.rs_value = rs_value;
        entry.rt_value = rt_value;
        entry.dst_reg = instr.destination().filter(|&d| d != 0);
    }
    Ok(())
}

/// Resolves one source operand, bypassing the register file when forwarding
/// is enabled.
fn read_operand<M: MemoryAccess>(
    engine: &PipelineEngine<M>,
    reg: u8,
) -> Result<u32, SimError> {
    if engine.forwarding_enabled {
        hazards::forward_operand(
            reg,
            engine.latches[Stage::Execute as usize].as_ref(),
            engine.latches[Stage::Memory as usize].as_ref(),
            &engine.regs,
        )
    } else {
        Ok(engine.regs.read(reg))
    }
}

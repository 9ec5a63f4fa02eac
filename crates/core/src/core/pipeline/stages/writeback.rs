//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the pipeline. It commits
//! results to the register file and updates the retired-instruction
//! statistics. Running first within the cycle gives decode same-cycle
//! visibility of the committed value through the register file, so no
//! explicit WB-to-ID forwarding path is needed.

use log::trace;

use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::latches::Stage;
use crate::mem::MemoryAccess;

/// Executes the writeback stage.
///
/// Every instruction reaching writeback is tallied in its category exactly
/// once; bubbles and flushed instructions never get here. Instructions with
/// a destination commit the loaded word (loads) or the ALU result (everything
/// else) and record the register in the touched set.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the pipeline engine.
pub fn writeback_stage<M: MemoryAccess>(engine: &mut PipelineEngine<M>) {
    let Some(wb) = engine.latches[Stage::Writeback as usize].as_ref() else {
        return;
    };
    let category = wb.instr.category();
    let is_load = wb.instr.is_load();
    let dst = wb.dst_reg;
    let value = if is_load { wb.mem_data } else { wb.alu_result };
    let pc = wb.pc;

    engine.stats.record_category(category);

    if let Some(dst) = dst {
        trace!("WB  pc={:#x} R{} <= {:#x}", pc, dst, value);
        engine.regs.write(dst, value);
        engine.stats.record_register(dst);
    }
}

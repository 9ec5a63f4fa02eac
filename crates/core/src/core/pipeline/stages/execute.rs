//! Execute (EX) Stage.
//!
//! This module implements the ALU and branch-resolution stage. Arithmetic
//! and effective-address computations treat operands as signed 32-bit values
//! with two's-complement wrap; logical operations treat them as unsigned bit
//! patterns. Branches resolve here: a taken branch records its target in the
//! latch and raises the engine's branch flag for the flush path.

use log::{trace, warn};

use crate::core::pipeline::engine::PipelineEngine;
use crate::core::pipeline::latches::Stage;
use crate::isa::{opcodes, InstructionType};
use crate::mem::MemoryAccess;

/// Executes the execute stage.
///
/// Evaluates the instruction in the execute latch, storing the ALU result
/// (or effective address, or branch target) back into the latch. Sets the
/// engine's `branch_taken` flag when a branch resolves taken; the cycle
/// sequencer performs the flush. Branch targets are relative to the
/// branching instruction's own fetch PC, with a word-scaled offset.
///
/// A HALT reaching execute while the halt flag is somehow clear is a
/// defect in fetch tracking; the stage warns and sets the flag so the run
/// still winds down.
///
/// # Arguments
///
/// * `engine` - Mutable reference to the pipeline engine.
pub fn execute_stage<M: MemoryAccess>(engine: &mut PipelineEngine<M>) {
    engine.branch_taken = false;
    let Some(ex) = engine.latches[Stage::Execute as usize].as_ref() else {
        return;
    };
    let instr = ex.instr;
    let a = ex.rs_value;
    let rt_value = ex.rt_value;
    let pc = ex.pc;
    let imm = instr.imm().unwrap_or(0);

    // Second ALU operand: rt for R-type, sign-extended immediate for I-type.
    let b = match instr.instruction_type() {
        InstructionType::R => rt_value,
        InstructionType::I => imm as u32,
    };

    let mut taken = false;
    let result = match instr.opcode() {
        opcodes::ADD | opcodes::ADDI => (a as i32).wrapping_add(b as i32) as u32,
        opcodes::SUB | opcodes::SUBI => (a as i32).wrapping_sub(b as i32) as u32,
        opcodes::MUL | opcodes::MULI => (a as i32).wrapping_mul(b as i32) as u32,
        opcodes::OR | opcodes::ORI => a | b,
        opcodes::AND | opcodes::ANDI => a & b,
        opcodes::XOR | opcodes::XORI => a ^ b,
        opcodes::LDW | opcodes::STW => (a as i32).wrapping_add(imm) as u32,
        opcodes::BZ => {
            taken = a == 0;
            branch_target(pc, imm)
        }
        opcodes::BEQ => {
            taken = a == rt_value;
            branch_target(pc, imm)
        }
        opcodes::JR => {
            taken = true;
            a
        }
        // HALT carries no result; decode rejects every other opcode.
        _ => pc,
    };

    if instr.is_halt() && !engine.halt_fetched {
        warn!(
            "HALT at pc={:#x} reached execute without stopping fetch; halting now",
            pc
        );
        engine.halt_fetched = true;
    }

    if taken {
        trace!("EX  pc={:#x} branch taken, target {:#x}", pc, result);
    } else {
        trace!("EX  pc={:#x} result {:#x}", pc, result);
    }

    if let Some(entry) = engine.latches[Stage::Execute as usize].as_mut() {
        entry.alu_result = result;
    }
    engine.branch_taken = taken;
}

/// Branch target: the branch's own fetch PC plus a word-scaled offset.
fn branch_target(pc: u32, imm: i32) -> u32 {
    (pc as i32).wrapping_add(imm.wrapping_mul(4)) as u32
}

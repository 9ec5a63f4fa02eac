//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the state carried between the five pipeline stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One latch entry per in-flight instruction.
//! 2. **Bubbles:** An unoccupied latch (`None`) is a bubble; a stage holding
//!    a bubble does nothing for that cycle.
//! 3. **Move Semantics:** Advancement takes entries out of their source latch,
//!    so an instruction occupies exactly one stage at a time.

use crate::isa::Instruction;

/// Pipeline stage index.
///
/// Stages are ordered oldest-last: an instruction enters at `Fetch` and
/// retires out of `Writeback`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Instruction fetch.
    Fetch = 0,
    /// Operand read and hazard resolution.
    Decode = 1,
    /// ALU evaluation and branch resolution.
    Execute = 2,
    /// Data memory access.
    Memory = 3,
    /// Register file commit.
    Writeback = 4,
}

/// In-flight state for one instruction occupying one pipeline stage.
///
/// Fields are filled in as the instruction moves down the pipeline: the
/// operand values at decode, the ALU result at execute, and the loaded word
/// at memory.
#[derive(Clone, Debug)]
pub struct LatchEntry {
    /// The decoded instruction.
    pub instr: Instruction,
    /// Program counter the instruction was fetched at.
    pub pc: u32,
    /// First source operand value, read at decode.
    pub rs_value: u32,
    /// Second source operand value, read at decode.
    pub rt_value: u32,
    /// ALU result, or the effective address for memory operations, or the
    /// branch target for control flow. Signed operations are carried as
    /// their two's-complement bit pattern.
    pub alu_result: u32,
    /// Word loaded from memory; valid after the memory stage for loads.
    pub mem_data: u32,
    /// Destination register, resolved at decode. `None` for non-writing
    /// instructions and for an architected destination of R0.
    pub dst_reg: Option<u8>,
}

impl LatchEntry {
    /// Creates a fresh entry for an instruction entering the fetch stage.
    ///
    /// # Arguments
    ///
    /// * `instr` - The decoded instruction.
    /// * `pc` - The address the instruction was fetched from.
    pub fn new(instr: Instruction, pc: u32) -> Self {
        Self {
            instr,
            pc,
            rs_value: 0,
            rt_value: 0,
            alu_result: 0,
            mem_data: 0,
            dst_reg: None,
        }
    }
}

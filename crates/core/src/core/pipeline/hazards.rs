//! Data hazard detection and operand forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when
//! data dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Scans the execute and memory latches for
//!    destinations that collide with the sources of the instruction in decode.
//! 2. **Stall Decisions:** Which detected hazards require a bubble, per
//!    forwarding mode.
//! 3. **Operand Forwarding:** Resolves RAW hazards by bypassing the register
//!    file, preferring the youngest in-flight producer.

use crate::common::{RegisterFile, SimError};
use crate::core::pipeline::latches::LatchEntry;

/// Outcome of the per-cycle hazard scan.
///
/// `execute` and `memory` report a RAW collision with the respective latch;
/// `load_use` reports the one collision forwarding cannot resolve: a load
/// in execute whose value is not available until after the following memory
/// stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardCheck {
    /// Decode sources collide with the destination in the execute latch.
    pub execute: bool,
    /// Decode sources collide with the destination in the memory latch.
    pub memory: bool,
    /// The execute-latch collision is against an in-flight load.
    pub load_use: bool,
}

impl HazardCheck {
    /// Whether any RAW dependency was observed this cycle.
    pub fn any(&self) -> bool {
        self.execute || self.memory
    }

    /// Whether the decode stage must stall this cycle.
    ///
    /// Without forwarding every collision stalls; decode may not read a
    /// register while a younger producer is in flight. With forwarding only
    /// the load-use case stalls, for one bubble.
    pub fn stall_required(&self, forwarding_enabled: bool) -> bool {
        if forwarding_enabled {
            self.load_use
        } else {
            self.execute || self.memory
        }
    }
}

/// Scans for RAW collisions between the decode instruction and the
/// execute/memory latches.
///
/// Only non-zero source indices can hazard (R0 is constant), and only
/// destinations that actually commit participate; latch `dst_reg` is
/// `None` for non-writers and for an architected destination of R0.
///
/// # Arguments
///
/// * `decode` - The decode latch, holding the instruction reading operands.
/// * `execute` - The execute latch, one instruction ahead.
/// * `memory` - The memory latch, two instructions ahead.
pub fn check_hazards(
    decode: Option<&LatchEntry>,
    execute: Option<&LatchEntry>,
    memory: Option<&LatchEntry>,
) -> HazardCheck {
    let Some(id) = decode else {
        return HazardCheck::default();
    };

    let rs = id.instr.rs();
    let rt = id.instr.rt();
    let reads_rt = id.instr.reads_rt();

    let collides = |entry: &LatchEntry| match entry.dst_reg {
        Some(d) => (rs != 0 && rs == d) || (reads_rt && rt != 0 && rt == d),
        None => false,
    };

    let ex_hit = execute.is_some_and(collides);
    HazardCheck {
        execute: ex_hit,
        memory: memory.is_some_and(collides),
        load_use: ex_hit && execute.is_some_and(|e| e.instr.is_load()),
    }
}

/// Reads a source register through the forwarding network.
///
/// Checks the youngest producer first: an execute-latch destination match
/// returns the ALU result computed earlier this cycle; a memory-latch match
/// returns the loaded word for loads and the ALU result otherwise; with no
/// match the register file is read.
///
/// Only called when forwarding is enabled and no stall is pending, so an
/// execute-latch match against a load is a contradiction; hazard detection
/// must have stalled that case one cycle earlier.
///
/// # Arguments
///
/// * `reg` - Source register index to resolve.
/// * `execute` - The execute latch.
/// * `memory` - The memory latch.
/// * `regs` - The architectural register file.
pub fn forward_operand(
    reg: u8,
    execute: Option<&LatchEntry>,
    memory: Option<&LatchEntry>,
    regs: &RegisterFile,
) -> Result<u32, SimError> {
    if let Some(ex) = execute {
        if ex.dst_reg == Some(reg) {
            if ex.instr.is_load() {
                return Err(SimError::Invariant(format!(
                    "forwarded R{} from a load still in execute; a load-use stall was required",
                    reg
                )));
            }
            return Ok(ex.alu_result);
        }
    }
    if let Some(mem) = memory {
        if mem.dst_reg == Some(reg) {
            return Ok(if mem.instr.is_load() {
                mem.mem_data
            } else {
                mem.alu_result
            });
        }
    }
    Ok(regs.read(reg))
}

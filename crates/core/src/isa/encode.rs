//! Bit-exact instruction word assembly.
//!
//! The inverse of field extraction: packs classified fields back into 32-bit
//! words. Decoding an encoded word recovers every field exactly.

use crate::isa::instruction::{OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT};

/// Assembles an R-type word: `[opcode:6][rs:5][rt:5][rd:5][unused:11]`.
pub fn encode_r(opcode: u8, rs: u8, rt: u8, rd: u8) -> u32 {
    ((opcode as u32 & OPCODE_MASK) << OPCODE_SHIFT)
        | ((rs as u32 & REG_MASK) << RS_SHIFT)
        | ((rt as u32 & REG_MASK) << RT_SHIFT)
        | ((rd as u32 & REG_MASK) << RD_SHIFT)
}

/// Assembles an I-type word: `[opcode:6][rs:5][rt:5][imm:16]`.
///
/// The immediate is stored as its low 16 bits; decoding sign-extends it back.
pub fn encode_i(opcode: u8, rs: u8, rt: u8, imm: i16) -> u32 {
    ((opcode as u32 & OPCODE_MASK) << OPCODE_SHIFT)
        | ((rs as u32 & REG_MASK) << RS_SHIFT)
        | ((rt as u32 & REG_MASK) << RT_SHIFT)
        | (imm as u16 as u32)
}

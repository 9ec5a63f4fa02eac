//! Instruction word decoding and classification.
//!
//! This module turns raw 32-bit words into [`Instruction`] values. It
//! provides:
//! 1. **Classification:** Opcode to format (R/I) and category mapping.
//! 2. **Writeback Analysis:** Which opcodes commit a register result.
//! 3. **Validation:** Unknown opcodes fail with a decode error.

use crate::common::SimError;
use crate::isa::instruction::{Instruction, InstructionFields};
use crate::isa::opcodes;
use crate::isa::{InstructionCategory, InstructionType};

/// Classifies an opcode into its instruction category.
///
/// # Returns
///
/// The category, or `None` for opcodes outside the known set.
pub fn category_of(opcode: u8) -> Option<InstructionCategory> {
    match opcode {
        opcodes::ADD | opcodes::ADDI | opcodes::SUB | opcodes::SUBI | opcodes::MUL
        | opcodes::MULI => Some(InstructionCategory::Arithmetic),
        opcodes::OR | opcodes::ORI | opcodes::AND | opcodes::ANDI | opcodes::XOR
        | opcodes::XORI => Some(InstructionCategory::Logical),
        opcodes::LDW | opcodes::STW => Some(InstructionCategory::Memory),
        opcodes::BZ | opcodes::BEQ | opcodes::JR | opcodes::HALT => {
            Some(InstructionCategory::Control)
        }
        _ => None,
    }
}

/// Determines the instruction format for an opcode.
///
/// R-type covers the six register-register ALU operations; every other known
/// opcode is I-type.
pub fn type_of(opcode: u8) -> InstructionType {
    match opcode {
        opcodes::ADD | opcodes::SUB | opcodes::MUL | opcodes::OR | opcodes::AND
        | opcodes::XOR => InstructionType::R,
        _ => InstructionType::I,
    }
}

/// Whether an opcode commits a register value at writeback.
///
/// True for the twelve ALU operations and the load; false for stores,
/// control flow, and HALT.
pub fn writes_register(opcode: u8) -> bool {
    matches!(
        opcode,
        opcodes::ADD
            | opcodes::ADDI
            | opcodes::SUB
            | opcodes::SUBI
            | opcodes::MUL
            | opcodes::MULI
            | opcodes::OR
            | opcodes::ORI
            | opcodes::AND
            | opcodes::ANDI
            | opcodes::XOR
            | opcodes::XORI
            | opcodes::LDW
    )
}

/// Decodes a 32-bit word into an [`Instruction`].
///
/// # Arguments
///
/// * `word` - The raw instruction encoding.
///
/// # Returns
///
/// The decoded instruction, or [`SimError::Decode`] when the opcode is
/// outside the known set.
pub fn decode(word: u32) -> Result<Instruction, SimError> {
    let opcode = word.opcode();
    let category = category_of(opcode).ok_or(SimError::Decode { opcode, word })?;
    Ok(Instruction::from_parts(
        word,
        type_of(opcode),
        category,
        writes_register(opcode),
    ))
}

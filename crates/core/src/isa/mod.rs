//! MIPS-lite instruction set definitions.
//!
//! This module covers everything about the 32-bit instruction word. It
//! provides:
//! 1. **Opcodes:** The 18-entry MIPS-lite opcode space (ADD=0 through HALT=17).
//! 2. **Field Extraction:** Bit-level access to opcode, rs, rt, rd, and imm.
//! 3. **Decoding:** Classification into R/I type and instruction category.
//! 4. **Encoding:** Bit-exact assembly of R-type and I-type words.

/// Instruction word decoding and classification.
pub mod decode;
/// Bit-exact instruction word assembly.
pub mod encode;
/// Field extraction and the decoded instruction value type.
pub mod instruction;
/// Opcode constants.
pub mod opcodes;

pub use decode::decode;
pub use encode::{encode_i, encode_r};
pub use instruction::{Instruction, InstructionFields};

/// Instruction format: R-type carries a destination register field, I-type
/// carries a 16-bit immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionType {
    /// Register format: `[opcode:6][rs:5][rt:5][rd:5][unused:11]`.
    R,
    /// Immediate format: `[opcode:6][rs:5][rt:5][imm:16]`, imm sign-extended.
    I,
}

/// Instruction category, tallied per retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InstructionCategory {
    /// ADD, ADDI, SUB, SUBI, MUL, MULI.
    Arithmetic,
    /// OR, ORI, AND, ANDI, XOR, XORI.
    Logical,
    /// LDW, STW.
    Memory,
    /// BZ, BEQ, JR, HALT.
    Control,
}

impl InstructionCategory {
    /// All categories, in report order.
    pub const ALL: [InstructionCategory; 4] = [
        InstructionCategory::Arithmetic,
        InstructionCategory::Logical,
        InstructionCategory::Memory,
        InstructionCategory::Control,
    ];

    /// Lower-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            InstructionCategory::Arithmetic => "arithmetic",
            InstructionCategory::Logical => "logical",
            InstructionCategory::Memory => "memory",
            InstructionCategory::Control => "control",
        }
    }
}

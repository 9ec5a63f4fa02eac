//! Instruction field extraction and the decoded instruction value.
//!
//! Provides bit extraction over raw 32-bit words and the immutable
//! `Instruction` value the pipeline carries through its latches.

use crate::isa::opcodes;
use crate::isa::{InstructionCategory, InstructionType};

/// Bit mask for a 6-bit opcode field.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the rd field.
pub const RD_SHIFT: u32 = 11;

/// Trait for extracting instruction fields from encoded words.
///
/// Provides methods to extract all MIPS-lite instruction fields from a
/// 32-bit instruction encoding.
pub trait InstructionFields {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u8;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> u8;

    /// Extracts the target register field (bits 20-16).
    ///
    /// For R-type words this is the second source; for I-type writers it is
    /// the destination.
    fn rt(&self) -> u8;

    /// Extracts the destination register field (bits 15-11, R-type only).
    fn rd(&self) -> u8;

    /// Extracts the 16-bit immediate (bits 15-0), sign-extended to 32 bits.
    fn imm(&self) -> i32;
}

impl InstructionFields for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rs(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rt(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    /// Sign extension goes through `i16`: the low half-word reinterpreted as
    /// a signed 16-bit value, then widened.
    #[inline(always)]
    fn imm(&self) -> i32 {
        (*self as u16) as i16 as i32
    }
}

/// A decoded MIPS-lite instruction.
///
/// Immutable value derived from one 32-bit word. The optional fields keep
/// the format distinction explicit: only R-type words carry `rd`, only
/// I-type words carry `imm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    word: u32,
    opcode: u8,
    rs: u8,
    rt: u8,
    rd: Option<u8>,
    imm: Option<i32>,
    itype: InstructionType,
    category: InstructionCategory,
    writes_register: bool,
}

impl Instruction {
    /// Assembles a decoded instruction from its classified parts.
    ///
    /// Callers go through [`crate::isa::decode`], which performs the opcode
    /// validation and classification.
    pub(crate) fn from_parts(
        word: u32,
        itype: InstructionType,
        category: InstructionCategory,
        writes_register: bool,
    ) -> Self {
        let (rd, imm) = match itype {
            InstructionType::R => (Some(word.rd()), None),
            InstructionType::I => (None, Some(word.imm())),
        };
        Self {
            word,
            opcode: word.opcode(),
            rs: word.rs(),
            rt: word.rt(),
            rd,
            imm,
            itype,
            category,
            writes_register,
        }
    }

    /// The raw 32-bit encoding.
    pub fn word(&self) -> u32 {
        self.word
    }

    /// The 6-bit opcode.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// The first source register index.
    pub fn rs(&self) -> u8 {
        self.rs
    }

    /// The target register index (second source or I-type destination).
    pub fn rt(&self) -> u8 {
        self.rt
    }

    /// The destination register field; present for R-type words only.
    pub fn rd(&self) -> Option<u8> {
        self.rd
    }

    /// The sign-extended immediate; present for I-type words only.
    pub fn imm(&self) -> Option<i32> {
        self.imm
    }

    /// The instruction format.
    pub fn instruction_type(&self) -> InstructionType {
        self.itype
    }

    /// The instruction category.
    pub fn category(&self) -> InstructionCategory {
        self.category
    }

    /// Whether this instruction commits a register value at writeback.
    pub fn writes_register(&self) -> bool {
        self.writes_register
    }

    /// The architected destination register: `rd` for R-type, `rt` for
    /// I-type writers, none for instructions that write nothing.
    pub fn destination(&self) -> Option<u8> {
        if !self.writes_register {
            return None;
        }
        match self.itype {
            InstructionType::R => self.rd,
            InstructionType::I => Some(self.rt),
        }
    }

    /// Whether `rt` is read as a source operand (R-type, BEQ, and STW).
    pub fn reads_rt(&self) -> bool {
        self.itype == InstructionType::R
            || self.opcode == opcodes::BEQ
            || self.opcode == opcodes::STW
    }

    /// Whether this is the load instruction.
    pub fn is_load(&self) -> bool {
        self.opcode == opcodes::LDW
    }

    /// Whether this is the store instruction.
    pub fn is_store(&self) -> bool {
        self.opcode == opcodes::STW
    }

    /// Whether this is the halt instruction.
    pub fn is_halt(&self) -> bool {
        self.opcode == opcodes::HALT
    }
}

//! MIPS-lite opcode constants.
//!
//! The opcode occupies the top six bits of the instruction word. The space is
//! dense: 0 through 17 are defined and everything else is an illegal
//! instruction.

/// Add (R-type): `rd = rs + rt`.
pub const ADD: u8 = 0;
/// Add immediate: `rt = rs + imm`.
pub const ADDI: u8 = 1;
/// Subtract (R-type): `rd = rs - rt`.
pub const SUB: u8 = 2;
/// Subtract immediate: `rt = rs - imm`.
pub const SUBI: u8 = 3;
/// Multiply (R-type): `rd = rs * rt`.
pub const MUL: u8 = 4;
/// Multiply immediate: `rt = rs * imm`.
pub const MULI: u8 = 5;

/// Bitwise or (R-type): `rd = rs | rt`.
pub const OR: u8 = 6;
/// Bitwise or immediate: `rt = rs | imm`.
pub const ORI: u8 = 7;
/// Bitwise and (R-type): `rd = rs & rt`.
pub const AND: u8 = 8;
/// Bitwise and immediate: `rt = rs & imm`.
pub const ANDI: u8 = 9;
/// Bitwise exclusive-or (R-type): `rd = rs ^ rt`.
pub const XOR: u8 = 10;
/// Bitwise exclusive-or immediate: `rt = rs ^ imm`.
pub const XORI: u8 = 11;

/// Load word: `rt = mem[rs + imm]`.
pub const LDW: u8 = 12;
/// Store word: `mem[rs + imm] = rt`.
pub const STW: u8 = 13;

/// Branch if zero: taken when `rs == 0`, target `pc + imm * 4`.
pub const BZ: u8 = 14;
/// Branch if equal: taken when `rs == rt`, target `pc + imm * 4`.
pub const BEQ: u8 = 15;
/// Jump register: unconditional jump to the address in `rs`.
pub const JR: u8 = 16;
/// Halt: stops instruction fetch; the program ends once the pipeline drains.
pub const HALT: u8 = 17;

//! MIPS-lite General-Purpose Register File.
//!
//! This module implements the architectural register file. It performs the
//! following:
//! 1. **Storage:** Maintains 32 word-sized registers (`R0`-`R31`).
//! 2. **Invariant Enforcement:** Ensures that register `R0` is hardwired to zero.
//! 3. **Diagnostics:** Provides a register dump for fault reporting.

use crate::common::constants::NUM_REGISTERS;

/// General-purpose register file.
///
/// Contains 32 word-sized registers. Register `R0` is hardwired to zero:
/// reads always return 0 and writes are ignored.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    regs: [u32; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The word stored in the register. Register `R0` always returns 0.
    #[inline]
    pub fn read(&self, idx: u8) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx as usize]
        }
    }

    /// Writes a value to a register.
    ///
    /// Writes to register `R0` are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The word to write.
    #[inline]
    pub fn write(&mut self, idx: u8, val: u32) {
        if idx != 0 {
            self.regs[idx as usize] = val;
        }
    }

    /// Renders the full register state as dump lines, two registers per
    /// row. Emitted by the driver when a run aborts on a fault.
    pub fn dump_rows(&self) -> Vec<String> {
        (0..NUM_REGISTERS)
            .step_by(2)
            .map(|i| {
                format!(
                    "R{:<2}={:<12} R{:<2}={}",
                    i,
                    self.regs[i] as i32,
                    i + 1,
                    self.regs[i + 1] as i32
                )
            })
            .collect()
    }
}

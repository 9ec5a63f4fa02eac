//! Simulation statistics collection and reporting.
//!
//! This module tracks runtime metrics for the MIPS-lite simulator. It
//! provides:
//! 1. **Cycle Accounting:** Total clock cycles, stall cycles, and data hazards.
//! 2. **Instruction Mix:** Retired-instruction counts by category.
//! 3. **Touched Sets:** Unique written registers and stored-to addresses.
//! 4. **Reporting:** Sectioned text output in report order.

use std::collections::BTreeSet;

use crate::isa::InstructionCategory;

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"` and `"timing"`. Pass an empty
/// slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "timing"];

/// Simulation statistics tracking all runtime metrics.
///
/// The touched sets are ordered so that reports and persisted output are
/// reproducible across runs.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Total simulated clock cycles.
    pub clock_cycles: u64,
    /// Stall cycles inserted by hazard detection.
    pub stalls: u64,
    /// Cycles in which a RAW dependency was observed between decode and a
    /// downstream stage, whether resolved by stalling or by forwarding.
    pub data_hazards: u64,

    /// Retired arithmetic instructions (ADD, ADDI, SUB, SUBI, MUL, MULI).
    pub inst_arithmetic: u64,
    /// Retired logical instructions (OR, ORI, AND, ANDI, XOR, XORI).
    pub inst_logical: u64,
    /// Retired memory instructions (LDW, STW).
    pub inst_memory: u64,
    /// Retired control instructions (BZ, BEQ, JR, HALT).
    pub inst_control: u64,

    registers: BTreeSet<u8>,
    memory_addresses: BTreeSet<u32>,
}

impl Stats {
    /// Creates a zeroed statistics sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies one retired instruction in its category.
    pub fn record_category(&mut self, category: InstructionCategory) {
        match category {
            InstructionCategory::Arithmetic => self.inst_arithmetic += 1,
            InstructionCategory::Logical => self.inst_logical += 1,
            InstructionCategory::Memory => self.inst_memory += 1,
            InstructionCategory::Control => self.inst_control += 1,
        }
    }

    /// The retired-instruction count for one category.
    pub fn category_count(&self, category: InstructionCategory) -> u64 {
        match category {
            InstructionCategory::Arithmetic => self.inst_arithmetic,
            InstructionCategory::Logical => self.inst_logical,
            InstructionCategory::Memory => self.inst_memory,
            InstructionCategory::Control => self.inst_control,
        }
    }

    /// Total instructions retired across all categories.
    pub fn total_instructions(&self) -> u64 {
        self.inst_arithmetic + self.inst_logical + self.inst_memory + self.inst_control
    }

    /// Records a register as written.
    pub fn record_register(&mut self, reg: u8) {
        self.registers.insert(reg);
    }

    /// Records a data address as stored to.
    pub fn record_memory_address(&mut self, addr: u32) {
        self.memory_addresses.insert(addr);
    }

    /// The set of registers written during the run, in ascending order.
    pub fn registers(&self) -> &BTreeSet<u8> {
        &self.registers
    }

    /// The set of addresses stored to during the run, in ascending order.
    pub fn memory_addresses(&self) -> &BTreeSet<u32> {
        &self.memory_addresses
    }

    /// Average stall cycles per observed data hazard, or 0.0 with no hazards.
    pub fn stalls_per_hazard(&self) -> f64 {
        if self.data_hazards == 0 {
            0.0
        } else {
            self.stalls as f64 / self.data_hazards as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or
    /// `"timing"`. Pass an empty slice to print all sections.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        if want("summary") {
            println!("INSTRUCTION COUNTS");
            for category in InstructionCategory::ALL {
                println!(
                    "  {:<22} {}",
                    category.label(),
                    self.category_count(category)
                );
            }
            println!("  {:<22} {}", "total", self.total_instructions());
            println!("----------------------------------------------------------");
        }
        if want("timing") {
            println!("TIMING");
            println!("  {:<22} {}", "clock_cycles", self.clock_cycles);
            println!("  {:<22} {}", "stalls", self.stalls);
            println!("  {:<22} {}", "data_hazards", self.data_hazards);
            println!("  {:<22} {:.2}", "stalls_per_hazard", self.stalls_per_hazard());
            println!("----------------------------------------------------------");
        }
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

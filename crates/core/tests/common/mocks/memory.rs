use std::collections::HashMap;

use mockall::mock;

use mips_lite_core::common::SimError;
use mips_lite_core::mem::MemoryAccess;

mock! {
    /// Expectation-driven memory mock for verifying exact core/memory
    /// interactions (which operation, which address, how many times).
    pub Memory {}

    impl MemoryAccess for Memory {
        fn read_instruction(&mut self, addr: u32) -> Result<u32, SimError>;
        fn read_data(&mut self, addr: u32) -> Result<u32, SimError>;
        fn write_data(&mut self, addr: u32, value: u32) -> Result<(), SimError>;
    }
}

/// Table-backed memory fake: a word map with the production alignment and
/// bounds rules, no file behind it. Unmapped addresses read as zero.
#[derive(Default)]
pub struct TableMemory {
    words: HashMap<u32, u32>,
    /// Every write observed, in order.
    pub writes: Vec<(u32, u32)>,
}

impl TableMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a word at a byte address.
    pub fn with_word(mut self, addr: u32, value: u32) -> Self {
        self.words.insert(addr, value);
        self
    }

    fn check(addr: u32) -> Result<(), SimError> {
        if addr % 4 != 0 {
            return Err(SimError::Misaligned(addr));
        }
        if addr >= 4096 {
            return Err(SimError::OutOfBounds(addr));
        }
        Ok(())
    }
}

impl MemoryAccess for TableMemory {
    fn read_instruction(&mut self, addr: u32) -> Result<u32, SimError> {
        Self::check(addr)?;
        Ok(self.words.get(&addr).copied().unwrap_or(0))
    }

    fn read_data(&mut self, addr: u32) -> Result<u32, SimError> {
        Self::check(addr)?;
        Ok(self.words.get(&addr).copied().unwrap_or(0))
    }

    fn write_data(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        Self::check(addr)?;
        self.words.insert(addr, value);
        self.writes.push((addr, value));
        Ok(())
    }
}

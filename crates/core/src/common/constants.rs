//! System-wide constants for the MIPS-lite architecture.

/// Size of one machine word in bytes. The word is the smallest addressable
/// unit in this architecture.
pub const WORD_SIZE: u32 = 4;

/// Total addressable memory in bytes (4 KiB).
pub const MEMORY_SIZE: u32 = 4096;

/// Total addressable memory in words.
pub const MEMORY_WORDS: usize = (MEMORY_SIZE / WORD_SIZE) as usize;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of pipeline stages (fetch, decode, execute, memory, writeback).
pub const PIPELINE_DEPTH: usize = 5;

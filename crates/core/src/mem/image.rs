//! Word-addressable memory image.
//!
//! This module implements the simulator's 4 KiB flat memory. It provides:
//! 1. **Access Trait:** The three-operation contract the pipeline consumes,
//!    kept behind a trait so tests can inject table-backed or mocked memory.
//! 2. **Auto-Extension:** Accesses beyond the loaded image inside the 4 KiB
//!    space grow the backing store with zeros.
//! 3. **Persistence Support:** A modified flag and full-image iteration for
//!    writing the final image back to disk.

use crate::common::constants::{MEMORY_SIZE, MEMORY_WORDS, WORD_SIZE};
use crate::common::SimError;

/// Memory operations consumed by the pipeline core.
///
/// Instruction fetch and data access are distinct operations even though the
/// production store treats them identically; the split keeps the fetch and
/// memory stages independently mockable.
pub trait MemoryAccess {
    /// Reads the instruction word at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address; must be word-aligned and inside the 4 KiB space.
    fn read_instruction(&mut self, addr: u32) -> Result<u32, SimError>;

    /// Reads the data word at `addr`.
    fn read_data(&mut self, addr: u32) -> Result<u32, SimError>;

    /// Writes a data word at `addr` and marks the image modified.
    fn write_data(&mut self, addr: u32, value: u32) -> Result<(), SimError>;
}

/// Flat word-vector memory image.
///
/// The backing vector holds only the words loaded or touched so far, up to
/// the 1024-word space. Reads and writes past the current end extend it with
/// zeros, so a persisted image always covers every touched index.
#[derive(Clone, Debug, Default)]
pub struct ImageMemory {
    words: Vec<u32>,
    modified: bool,
}

impl ImageMemory {
    /// Creates an empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an image from pre-loaded words.
    ///
    /// # Arguments
    ///
    /// * `words` - Initial contents, word 0 first.
    ///
    /// # Returns
    ///
    /// The image, or [`SimError::OutOfBounds`] when more than 1024 words are
    /// supplied.
    pub fn from_words(words: Vec<u32>) -> Result<Self, SimError> {
        if words.len() > MEMORY_WORDS {
            return Err(SimError::OutOfBounds((words.len() as u32) * WORD_SIZE));
        }
        Ok(Self {
            words,
            modified: false,
        })
    }

    /// The words currently backed, word 0 first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of words currently backed (loaded plus auto-extended).
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether any write has landed since the image was loaded.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Validates alignment and bounds, returning the word index.
    fn check(addr: u32) -> Result<usize, SimError> {
        if addr % WORD_SIZE != 0 {
            return Err(SimError::Misaligned(addr));
        }
        if addr >= MEMORY_SIZE {
            return Err(SimError::OutOfBounds(addr));
        }
        Ok((addr / WORD_SIZE) as usize)
    }

    /// Grows the backing store with zeros through `index`.
    fn extend_to(&mut self, index: usize) {
        if index >= self.words.len() {
            self.words.resize(index + 1, 0);
        }
    }

    fn read_word(&mut self, addr: u32) -> Result<u32, SimError> {
        let index = Self::check(addr)?;
        self.extend_to(index);
        Ok(self.words[index])
    }
}

impl MemoryAccess for ImageMemory {
    fn read_instruction(&mut self, addr: u32) -> Result<u32, SimError> {
        self.read_word(addr)
    }

    fn read_data(&mut self, addr: u32) -> Result<u32, SimError> {
        self.read_word(addr)
    }

    fn write_data(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        let index = Self::check(addr)?;
        self.extend_to(index);
        self.words[index] = value;
        self.modified = true;
        Ok(())
    }
}

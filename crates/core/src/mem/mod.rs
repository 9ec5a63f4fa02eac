//! Memory service for the MIPS-lite simulator.
//!
//! This module defines the memory contract the pipeline core consumes and
//! its production implementation. It provides:
//! 1. **Access Trait:** Word-granular instruction fetch and data read/write.
//! 2. **Backing Store:** A word-vector image covering the 4 KiB address space.
//! 3. **Validation:** Alignment and bounds checks on every access.

/// Word-vector backing store and the access trait.
pub mod image;

pub use image::{ImageMemory, MemoryAccess};

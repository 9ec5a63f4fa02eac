//! Error definitions for the MIPS-lite simulator.
//!
//! This module defines the error handling for the simulator core and the
//! memory-image loader. It provides:
//! 1. **Simulation Errors:** Faults raised while the pipeline is running.
//! 2. **Image Errors:** Failures while reading or writing a memory image file.
//! 3. **Error Trait Integration:** `Display` and `std::error::Error` impls for
//!    system-level reporting.

use std::fmt;
use std::io;

/// Faults raised by the simulator core.
///
/// All variants propagate to the driver; none are recovered internally.
/// `Invariant` indicates an engine bug and must abort the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// An instruction word carried an opcode outside the known set.
    ///
    /// The associated values are the offending opcode and the full word.
    Decode { opcode: u8, word: u32 },

    /// A memory access used an address that is not a multiple of the word size.
    Misaligned(u32),

    /// A memory access used an address at or beyond the 4 KiB address space.
    OutOfBounds(u32),

    /// The driver-level cycle cap was reached before the program terminated.
    Timeout { cycles: u64 },

    /// The engine detected an internal contradiction.
    ///
    /// Examples: forwarding the ALU result of a load that should have
    /// stalled, or reading operands while a stall is pending.
    Invariant(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Decode { opcode, word } => {
                write!(f, "unknown opcode {} in instruction word {:#010x}", opcode, word)
            }
            SimError::Misaligned(addr) => {
                write!(f, "unaligned memory access at address {:#x}", addr)
            }
            SimError::OutOfBounds(addr) => {
                write!(f, "memory address {:#x} out of bounds", addr)
            }
            SimError::Timeout { cycles } => {
                write!(f, "program failed to halt within {} cycles", cycles)
            }
            SimError::Invariant(msg) => write!(f, "pipeline invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

/// Failures while loading or persisting a memory image file.
#[derive(Debug)]
pub enum ImageError {
    /// Underlying file I/O failure.
    Io(io::Error),

    /// A line could not be parsed as an 8-digit hexadecimal word.
    ///
    /// The associated values are the 1-based line number and the line text.
    Parse { line: usize, text: String },

    /// A blank line appeared inside the body of the image.
    BlankLine(usize),

    /// The image holds more words than the 4 KiB address space allows.
    TooLarge(usize),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Io(e) => write!(f, "image I/O error: {}", e),
            ImageError::Parse { line, text } => {
                write!(f, "line {}: invalid memory word '{}'", line, text)
            }
            ImageError::BlankLine(line) => {
                write!(f, "line {}: blank line inside image body", line)
            }
            ImageError::TooLarge(words) => {
                write!(f, "image holds {} words, exceeding the 1024-word space", words)
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ImageError {
    fn from(e: io::Error) -> Self {
        ImageError::Io(e)
    }
}

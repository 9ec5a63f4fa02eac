//! Memory image loading and persistence.
//!
//! This module handles the on-disk image format: a text file with one 32-bit
//! word per line, encoded as 8 hexadecimal digits. It provides:
//! 1. **Parsing:** Case-insensitive input with surrounding whitespace
//!    tolerated; blank lines inside the body and oversized images rejected.
//! 2. **Formatting:** Uppercase zero-padded output covering every word up to
//!    the highest touched or extended index.
//! 3. **File I/O:** Load-from and save-to paths, with typed errors.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::common::constants::MEMORY_WORDS;
use crate::common::ImageError;
use crate::mem::ImageMemory;

/// Parses image text into its words.
///
/// Each line is trimmed and must then contain 1 to 8 hexadecimal digits
/// (case-insensitive). Blank lines followed by further content are rejected;
/// trailing blank lines at end-of-file are tolerated.
///
/// # Arguments
///
/// * `text` - The full image file contents.
///
/// # Returns
///
/// The words in file order, or the first [`ImageError`] encountered.
pub fn parse_image(text: &str) -> Result<Vec<u32>, ImageError> {
    let mut lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .collect();
    while lines.last().is_some_and(|(_, line)| line.is_empty()) {
        lines.pop();
    }

    let mut words = Vec::with_capacity(lines.len());
    for (number, line) in lines {
        if line.is_empty() {
            return Err(ImageError::BlankLine(number));
        }
        if line.len() > 8 || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ImageError::Parse {
                line: number,
                text: line.to_string(),
            });
        }
        let word = u32::from_str_radix(line, 16).map_err(|_| ImageError::Parse {
            line: number,
            text: line.to_string(),
        })?;
        words.push(word);
    }

    if words.len() > MEMORY_WORDS {
        return Err(ImageError::TooLarge(words.len()));
    }
    Ok(words)
}

/// Formats an image as output text: one word per line, 8 uppercase hex
/// digits, zero-padded, covering every backed word.
pub fn format_image(memory: &ImageMemory) -> String {
    let mut out = String::with_capacity(memory.word_count() * 9);
    for word in memory.words() {
        let _ = writeln!(out, "{:08X}", word);
    }
    out
}

/// Loads a memory image from disk.
///
/// # Arguments
///
/// * `path` - Path of the image file.
pub fn load_image(path: &Path) -> Result<ImageMemory, ImageError> {
    let text = fs::read_to_string(path)?;
    let words = parse_image(&text)?;
    let count = words.len();
    ImageMemory::from_words(words).map_err(|_| ImageError::TooLarge(count))
}

/// Persists a memory image to disk in the output format.
///
/// # Arguments
///
/// * `path` - Destination path; overwritten if it exists.
/// * `memory` - The image to persist.
pub fn save_image(path: &Path, memory: &ImageMemory) -> Result<(), ImageError> {
    fs::write(path, format_image(memory))?;
    Ok(())
}

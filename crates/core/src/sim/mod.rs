//! Simulation driver layer.
//!
//! This module hosts the pieces around the pipeline core. It provides:
//! 1. **Image Loading:** Parsing and persisting the hex-text memory image.
//! 2. **The Driver:** A simulator wrapper running the engine to completion
//!    under a cycle cap.

/// Memory image parsing, formatting, and file I/O.
pub mod loader;
/// The run-to-completion driver.
pub mod simulator;

pub use simulator::Simulator;

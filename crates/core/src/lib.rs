//! MIPS-lite pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator of a simplified MIPS-style
//! in-order pipelined processor with the following:
//! 1. **Core:** Five-stage pipeline (fetch, decode, execute, memory,
//!    writeback) with hazard detection, optional operand forwarding, and
//!    always-not-taken branch handling.
//! 2. **ISA:** Decoding, classification, and encoding of the 18-opcode
//!    MIPS-lite instruction set.
//! 3. **Memory:** A 4 KiB word-addressed image with alignment and bounds
//!    checking behind a mockable access trait.
//! 4. **Simulation:** Image loader, run-to-completion driver, configuration,
//!    and statistics collection.

/// Common types and constants (register file, errors, geometry).
pub mod common;
/// Simulation run configuration.
pub mod config;
/// CPU core (pipeline engine, latches, hazards, stages).
pub mod core;
/// Instruction set (opcodes, decode, encode, field extraction).
pub mod isa;
/// Memory service (access trait, image backing store).
pub mod mem;
/// Image loader and run-to-completion driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Run configuration; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The pipeline engine; owns PC, latches, registers, stats, and memory.
pub use crate::core::PipelineEngine;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;

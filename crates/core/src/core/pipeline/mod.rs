//! Five-stage in-order pipeline.
//!
//! This module implements the pipeline core of the simulator. It provides:
//! 1. **Latches:** Per-stage in-flight instruction state.
//! 2. **Hazard Handling:** RAW detection, stall decisions, and forwarding.
//! 3. **Stage Logic:** One module per stage, evaluated oldest-first.
//! 4. **The Engine:** The cycle sequencer owning PC, latches, and flags.

/// The cycle sequencer.
pub mod engine;
/// Hazard detection and operand forwarding.
pub mod hazards;
/// Pipeline latch structures.
pub mod latches;
/// Per-stage datapath logic.
pub mod stages;

pub use engine::PipelineEngine;
pub use latches::{LatchEntry, Stage};

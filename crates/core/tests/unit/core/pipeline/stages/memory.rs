//! Memory Stage Tests.
//!
//! Verifies load data capture, store writes, touched-address recording, and
//! fault propagation, using both the table fake and the expectation mock.

use mips_lite_core::common::{RegisterFile, SimError};
use mips_lite_core::core::pipeline::latches::Stage;
use mips_lite_core::core::pipeline::stages::memory_stage;
use mips_lite_core::core::PipelineEngine;
use mips_lite_core::stats::Stats;

use super::{decoded_entry, engine};
use crate::common::builder;
use crate::common::mocks::memory::{MockMemory, TableMemory};

#[test]
fn load_captures_the_word_into_the_latch() {
    let memory = TableMemory::new().with_word(160, 40);
    let mut engine = engine(memory, false);
    let mut entry = decoded_entry(builder::ldw(2, 3, 60), 100, 0);
    entry.alu_result = 160;
    engine.latches[Stage::Memory as usize] = Some(entry);

    memory_stage(&mut engine).expect("memory succeeds");

    let entry = engine.stage(Stage::Memory).expect("latch occupied");
    assert_eq!(entry.mem_data, 40, "loaded word lands in mem_data");
}

#[test]
fn store_writes_rt_to_the_effective_address() {
    let mut engine = engine(TableMemory::new(), false);
    let mut entry = decoded_entry(builder::stw(9, 3, 60), 100, 345);
    entry.alu_result = 160;
    engine.latches[Stage::Memory as usize] = Some(entry);

    memory_stage(&mut engine).expect("memory succeeds");

    assert_eq!(engine.memory.writes, vec![(160, 345)]);
    assert!(
        engine.stats.memory_addresses().contains(&160),
        "store address recorded in the touched set"
    );
}

#[test]
fn loads_do_not_touch_the_address_set() {
    let memory = TableMemory::new().with_word(160, 40);
    let mut engine = engine(memory, false);
    let mut entry = decoded_entry(builder::ldw(2, 3, 60), 100, 0);
    entry.alu_result = 160;
    engine.latches[Stage::Memory as usize] = Some(entry);

    memory_stage(&mut engine).expect("memory succeeds");

    assert!(engine.stats.memory_addresses().is_empty());
}

#[test]
fn non_memory_instructions_leave_memory_alone() {
    let mut mock = MockMemory::new();
    mock.expect_read_data().times(0);
    mock.expect_write_data().times(0);
    let mut engine = PipelineEngine::new(RegisterFile::new(), Stats::new(), mock, false);
    engine.latches[Stage::Memory as usize] = Some(decoded_entry(builder::add(3, 1, 2), 1, 2));

    memory_stage(&mut engine).expect("memory succeeds");
}

#[test]
fn misaligned_effective_address_faults() {
    let mut engine = engine(TableMemory::new(), false);
    let mut entry = decoded_entry(builder::ldw(2, 3, 1), 0, 0);
    entry.alu_result = 1;
    engine.latches[Stage::Memory as usize] = Some(entry);

    assert_eq!(memory_stage(&mut engine), Err(SimError::Misaligned(1)));
}

#[test]
fn out_of_bounds_store_faults_without_recording() {
    let mut engine = engine(TableMemory::new(), false);
    let mut entry = decoded_entry(builder::stw(9, 3, 0), 0, 7);
    entry.alu_result = 4096;
    engine.latches[Stage::Memory as usize] = Some(entry);

    assert_eq!(memory_stage(&mut engine), Err(SimError::OutOfBounds(4096)));
    assert!(
        engine.stats.memory_addresses().is_empty(),
        "stats stay at their last consistent state"
    );
}

#[test]
fn empty_memory_latch_is_a_no_op() {
    let mut engine = engine(TableMemory::new(), false);
    memory_stage(&mut engine).expect("memory succeeds");
}

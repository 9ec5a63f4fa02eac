//! Statistics Tests.
//!
//! Verifies category tallying, the uniqueness of the touched sets, the
//! derived metrics, and section selection.

use mips_lite_core::isa::InstructionCategory;
use mips_lite_core::stats::{Stats, STATS_SECTIONS};

#[test]
fn categories_tally_independently() {
    let mut stats = Stats::new();
    stats.record_category(InstructionCategory::Arithmetic);
    stats.record_category(InstructionCategory::Arithmetic);
    stats.record_category(InstructionCategory::Control);

    assert_eq!(stats.category_count(InstructionCategory::Arithmetic), 2);
    assert_eq!(stats.category_count(InstructionCategory::Control), 1);
    assert_eq!(stats.category_count(InstructionCategory::Logical), 0);
    assert_eq!(stats.category_count(InstructionCategory::Memory), 0);
    assert_eq!(stats.total_instructions(), 3);
}

#[test]
fn touched_sets_deduplicate() {
    let mut stats = Stats::new();
    stats.record_register(5);
    stats.record_register(5);
    stats.record_register(1);
    stats.record_memory_address(160);
    stats.record_memory_address(160);

    assert_eq!(stats.registers().len(), 2);
    assert_eq!(stats.memory_addresses().len(), 1);
}

#[test]
fn touched_sets_iterate_in_ascending_order() {
    let mut stats = Stats::new();
    for reg in [9, 1, 31, 4] {
        stats.record_register(reg);
    }
    let order: Vec<u8> = stats.registers().iter().copied().collect();
    assert_eq!(order, vec![1, 4, 9, 31]);
}

#[test]
fn stalls_per_hazard_handles_zero_hazards() {
    let stats = Stats::new();
    assert_eq!(stats.stalls_per_hazard(), 0.0);
}

#[test]
fn stalls_per_hazard_divides() {
    let mut stats = Stats::new();
    stats.stalls = 12;
    stats.data_hazards = 12;
    assert_eq!(stats.stalls_per_hazard(), 1.0);
}

#[test]
fn section_names_are_stable() {
    assert_eq!(STATS_SECTIONS, &["summary", "timing"]);
}

#[test]
fn category_labels_match_report_order() {
    let labels: Vec<&str> = InstructionCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["arithmetic", "logical", "memory", "control"]);
}

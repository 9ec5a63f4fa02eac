//! Load-Use Hazard Detection Tests.
//!
//! Verifies that the hazard scan flags the one collision operand forwarding
//! cannot resolve: a load in execute whose destination matches a source of
//! the instruction in decode.

use mips_lite_core::core::pipeline::hazards::check_hazards;

use super::decoded_entry;
use crate::common::builder;

// ══════════════════════════════════════════════════════════
// 1. Basic load-use detection
// ══════════════════════════════════════════════════════════

#[test]
fn stall_when_load_dst_matches_rs() {
    let execute = decoded_entry(builder::ldw(5, 1, 0));
    let decode = decoded_entry(builder::addi(6, 5, 1));
    let check = check_hazards(Some(&decode), Some(&execute), None);
    assert!(check.load_use, "LDW R5, then use R5 as rs: load-use");
    assert!(check.stall_required(true), "forwarding must still stall");
    assert!(check.stall_required(false));
}

#[test]
fn stall_when_load_dst_matches_rt_source() {
    let execute = decoded_entry(builder::ldw(7, 1, 0));
    let decode = decoded_entry(builder::add(6, 1, 7));
    let check = check_hazards(Some(&decode), Some(&execute), None);
    assert!(check.load_use, "LDW R7, then use R7 as rt: load-use");
}

#[test]
fn store_after_load_of_its_data_register_stalls() {
    let execute = decoded_entry(builder::ldw(2, 1, 0));
    let decode = decoded_entry(builder::stw(2, 3, 0));
    let check = check_hazards(Some(&decode), Some(&execute), None);
    assert!(check.load_use, "STW reads rt, so the load-use applies");
}

// ══════════════════════════════════════════════════════════
// 2. No-stall cases
// ══════════════════════════════════════════════════════════

#[test]
fn no_load_use_for_alu_producer() {
    let execute = decoded_entry(builder::add(5, 1, 2));
    let decode = decoded_entry(builder::addi(6, 5, 1));
    let check = check_hazards(Some(&decode), Some(&execute), None);
    assert!(check.execute, "plain RAW hazard is still reported");
    assert!(!check.load_use, "ALU producer is forwardable");
    assert!(!check.stall_required(true), "forwarding resolves it");
    assert!(check.stall_required(false), "no forwarding stalls it");
}

#[test]
fn no_load_use_once_the_load_reaches_memory() {
    let memory = decoded_entry(builder::ldw(5, 1, 0));
    let decode = decoded_entry(builder::addi(6, 5, 1));
    let check = check_hazards(Some(&decode), None, Some(&memory));
    assert!(check.memory, "RAW against memory stage is reported");
    assert!(!check.load_use, "the loaded word is forwardable from memory");
    assert!(!check.stall_required(true));
    assert!(check.stall_required(false));
}

#[test]
fn no_hazard_when_load_targets_r0() {
    let execute = decoded_entry(builder::ldw(0, 1, 0));
    let decode = decoded_entry(builder::addi(6, 0, 1));
    let check = check_hazards(Some(&decode), Some(&execute), None);
    assert!(!check.any(), "a load to R0 commits nothing");
}

#[test]
fn no_hazard_when_consumer_rt_is_not_a_source() {
    // ADDI's rt is its destination, not a source; LDW R2 then ADDI R2,R0
    // must not stall even though the register indices collide.
    let execute = decoded_entry(builder::ldw(2, 1, 0));
    let decode = decoded_entry(builder::addi(2, 0, 5));
    let check = check_hazards(Some(&decode), Some(&execute), None);
    assert!(!check.any(), "rt collision on a non-source is not a hazard");
}

#[test]
fn no_hazard_for_empty_latches() {
    let decode = decoded_entry(builder::addi(6, 5, 1));
    assert!(!check_hazards(Some(&decode), None, None).any());
    assert!(!check_hazards(None, None, None).any());
}

#[test]
fn no_hazard_when_decode_is_a_bubble() {
    let execute = decoded_entry(builder::ldw(5, 1, 0));
    assert!(!check_hazards(None, Some(&execute), None).any());
}

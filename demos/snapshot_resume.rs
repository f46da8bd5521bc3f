//! Snapshot and Resume
//!
//! This example demonstrates persisting a machine mid-flight and resuming
//! it later, redo stack included.
//!
//! Key concepts:
//! - Snapshot::capture() records the full observable machine state
//! - Serialization formats (JSON for readability, binary for compactness)
//! - restore() rejects version mismatches and inconsistent data
//! - A restored machine continues exactly where it left off
//!
//! Run with: cargo run --example snapshot_resume

use waymark::core::StateMachine;
use waymark::snapshot::Snapshot;
use waymark::state_table;

fn main() {
    println!("=== Snapshot and Resume ===\n");

    let config = state_table! {
        initial: "queued",
        "queued" => { "assign" => "in_progress" },
        "in_progress" => { "block" => "blocked", "complete" => "done" },
        "blocked" => { "unblock" => "in_progress" },
        "done" => {},
    };

    println!("Run 1: Work a ticket, then snapshot");
    println!("----------------------------------------");
    let mut machine = StateMachine::new(config);
    machine.trigger("assign").unwrap();
    machine.trigger("block").unwrap();
    machine.undo();
    println!("  Current: {}", machine.current_state());
    println!("  Path: {:?}", machine.history().path());
    println!("  Redo stack: {:?}\n", machine.history().undone());

    let snapshot = Snapshot::capture(&machine);
    let json = snapshot.to_json().unwrap();
    let bytes = snapshot.to_bytes().unwrap();
    println!(
        "  Snapshot {} captured at {}",
        snapshot.id, snapshot.created_at
    );
    println!("  JSON: {} bytes, binary: {} bytes\n", json.len(), bytes.len());

    // The process could end here; the JSON string is all that survives.

    println!("Run 2: Resume from the JSON snapshot");
    println!("----------------------------------------");
    let mut resumed = Snapshot::from_json(&json).unwrap().restore().unwrap();
    println!("  Current: {}", resumed.current_state());
    println!("  Redo replays the undone state: {}", resumed.redo());
    println!("  Current: {}", resumed.current_state());
    resumed.trigger("unblock").unwrap();
    resumed.trigger("complete").unwrap();
    println!("  Finished at: {}", resumed.current_state());
    println!("  Full journey: {:?}\n", resumed.history().path());

    println!("A tampered snapshot is rejected:");
    let mut bad = Snapshot::from_json(&json).unwrap();
    bad.current = "done".to_string();
    match bad.restore() {
        Ok(_) => println!("  Unexpected success"),
        Err(err) => println!("  Error: {}", err),
    }

    println!("\nKey Takeaways:");
    println!("- A snapshot captures table, path, and redo stack in one value");
    println!("- JSON and binary codecs cover debugging and storage");
    println!("- Validation on restore catches states no engine would produce");

    println!("\n=== Example Complete ===");
}

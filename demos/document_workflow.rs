//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow driven by a
//! declarative transition table.
//!
//! Key concepts:
//! - Declarative state table (draft -> review -> published)
//! - Rule-driven transitions via trigger()
//! - Typed errors for events the current state cannot handle
//! - Querying the table (all states, states handling an event)
//!
//! Run with: cargo run --example document_workflow

use waymark::builder::ConfigBuilder;
use waymark::core::StateMachine;

fn main() {
    println!("=== Document Approval Workflow ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .transition("published", "retract", "draft")
        .build()
        .unwrap();

    let mut machine = StateMachine::try_new(config).unwrap();

    println!("Created document workflow state machine");
    println!("States: {:?}\n", machine.states());

    println!("Step 1: Submit for review");
    machine.trigger("submit").unwrap();
    println!("  Current state: {}\n", machine.current_state());

    println!("Step 2: Reviewer rejects the draft");
    machine.trigger("reject").unwrap();
    println!("  Current state: {}\n", machine.current_state());

    println!("Step 3: Resubmit and approve");
    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("  Current state: {}\n", machine.current_state());

    println!("Step 4: Events the current state cannot handle fail loudly");
    match machine.trigger("submit") {
        Ok(()) => println!("  Unexpected success"),
        Err(err) => println!("  Error: {}", err),
    }
    println!();

    println!(
        "Which states handle 'submit'? {:?}",
        machine.states_for("submit")
    );
    println!("Journey so far: {:?}", machine.history().path());

    println!("\nKey Takeaways:");
    println!("- The whole workflow shape lives in one declarative table");
    println!("- trigger() follows the current state's rules; bad events are typed errors");
    println!("- Every state entered is recorded, ready for undo and reset");

    println!("\n=== Example Complete ===");
}

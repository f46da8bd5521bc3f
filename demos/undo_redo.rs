//! Undo and Redo
//!
//! This example walks the history mechanics: stepping back through visited
//! states, replaying them, and the interplay with forward moves.
//!
//! Key concepts:
//! - undo() / redo() report availability as bool, not as errors
//! - reset() truncates the history back to its origin
//! - Forward moves never invalidate the redo stack
//! - clear_history() starts a fresh lineage with a new origin
//!
//! Run with: cargo run --example undo_redo

use waymark::core::StateMachine;
use waymark::state_table;

fn main() {
    println!("=== Undo and Redo ===\n");

    let config = state_table! {
        initial: "idle",
        "idle" => { "start" => "running" },
        "running" => { "pause" => "idle", "finish" => "done" },
        "done" => {},
    };
    let mut machine = StateMachine::new(config);

    println!("Step 1: Walk forward");
    machine.trigger("start").unwrap();
    machine.trigger("finish").unwrap();
    println!("  Path: {:?}\n", machine.history().path());

    println!("Step 2: Undo twice");
    machine.undo();
    machine.undo();
    println!("  Current: {}", machine.current_state());
    println!("  Undo again? {}", machine.undo());
    println!("  Redo stack: {:?}\n", machine.history().undone());

    println!("Step 3: Redo once, then move forward");
    machine.redo();
    machine.trigger("pause").unwrap();
    println!("  Path: {:?}", machine.history().path());
    println!("  Redo stack still holds: {:?}", machine.history().undone());
    println!("  Redo replays it: {}", machine.redo());
    println!("  Current: {}\n", machine.current_state());

    println!("Step 4: Reset to the origin");
    println!("  reset() -> {}", machine.reset());
    println!("  Path: {:?}\n", machine.history().path());

    println!("Step 5: Clear history and start a new lineage");
    machine.trigger("start").unwrap();
    machine.clear_history();
    machine.change_state("done").unwrap();
    println!("  Path: {:?}", machine.history().path());
    println!("  reset() now returns: {}", machine.reset());

    println!("\nKey Takeaways:");
    println!("- undo/redo never fail; they report availability");
    println!("- The redo stack survives forward moves, reset, and clear_history");
    println!("- After clear_history(), the next move defines a new origin");

    println!("\n=== Example Complete ===");
}

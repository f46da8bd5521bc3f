//! Waymark: a table-driven finite state machine library
//!
//! Waymark drives a machine from a declarative table of states and their
//! event-keyed transitions, records every state entered along the way, and
//! supports linear undo/redo over that recorded path.
//!
//! # Core Concepts
//!
//! - **States and events**: plain string names; the machine's full shape is
//!   a [`Config`] table supplied once at construction
//! - **Transitions**: rule-driven via [`StateMachine::trigger`], or direct
//!   jumps via [`StateMachine::change_state`]
//! - **History**: every state entered is recorded; [`StateMachine::undo`]
//!   and [`StateMachine::redo`] walk the path backward and forward
//! - **Snapshots**: full machine state serializes to JSON or binary and
//!   restores later, redo stack included
//!
//! # Example
//!
//! ```rust
//! use waymark::state_table;
//! use waymark::core::StateMachine;
//!
//! let config = state_table! {
//!     initial: "draft",
//!     "draft" => { "submit" => "review" },
//!     "review" => { "approve" => "published", "reject" => "draft" },
//!     "published" => {},
//! };
//!
//! let mut machine = StateMachine::new(config);
//!
//! machine.trigger("submit").unwrap();
//! machine.trigger("approve").unwrap();
//! assert_eq!(machine.current_state(), "published");
//!
//! // Walk back, then replay
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "review");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "published");
//!
//! // The whole journey is recorded
//! assert_eq!(machine.history().path(), ["draft", "review", "published"]);
//! ```

pub mod builder;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{
    Config, ConfigError, EventName, History, StateDef, StateMachine, StateName, StateTable,
    TransitionError,
};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};

//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - Declarative configuration: `Config`, `StateTable`, `StateDef`
//! - The `StateMachine` engine with rule-driven and direct transitions
//! - Visited-path tracking with linear undo/redo via `History`
//!
//! Everything here is synchronous plain owned data; operations either
//! mutate the machine in place or are pure queries.

mod config;
mod error;
mod history;
mod machine;

pub use config::{Config, EventName, StateDef, StateName, StateTable};
pub use error::{ConfigError, TransitionError};
pub use history::History;
pub use machine::StateMachine;

//! Error types for transitions and configuration validation.

use super::config::{EventName, StateName};
use thiserror::Error;

/// Errors that can occur when moving a machine between states.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The requested state names no entry in the state table
    #[error("Unknown state '{name}'")]
    InvalidState { name: StateName },

    /// The current state has no transition for the triggered event
    #[error("No transition for event '{event}' from state '{from}'")]
    NoTransition { from: StateName, event: EventName },
}

/// Structural problems a configuration can carry.
///
/// Only surfaced by explicit validation; plain construction accepts any
/// configuration unchecked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The state table defines no states at all
    #[error("State table is empty. Define at least one state")]
    EmptyTable,

    /// The initial state names no table entry
    #[error("Initial state '{name}' is not defined in the state table")]
    UnknownInitial { name: StateName },

    /// A transition targets a state the table does not define
    #[error("Transition '{event}' on state '{state}' targets undefined state '{target}'")]
    DanglingTarget {
        state: StateName,
        event: EventName,
        target: StateName,
    },
}

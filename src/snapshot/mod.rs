//! Snapshot and resume functionality for state machines.
//!
//! This module provides serialization and deserialization of full machine
//! state, enabling a machine to be persisted and rebuilt later with its
//! visited path and redo stack intact.

use crate::core::{History, StateMachine, StateName, StateTable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of one machine's full observable state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was captured
    pub created_at: DateTime<Utc>,

    /// Current state of the machine
    pub current: StateName,

    /// The machine's state table
    pub states: StateTable,

    /// Visited path and redo stack
    pub history: History,
}

impl Snapshot {
    /// Capture the full state of a machine.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::core::StateMachine;
    /// use waymark::snapshot::Snapshot;
    /// use waymark::state_table;
    ///
    /// let config = state_table! {
    ///     initial: "idle",
    ///     "idle" => { "start" => "running" },
    ///     "running" => {},
    /// };
    ///
    /// let mut machine = StateMachine::new(config);
    /// machine.trigger("start").unwrap();
    ///
    /// let snapshot = Snapshot::capture(&machine);
    /// let restored = snapshot.restore().unwrap();
    /// assert_eq!(restored.current_state(), "running");
    /// ```
    pub fn capture(machine: &StateMachine) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            current: machine.current_state().to_string(),
            states: machine.table().clone(),
            history: machine.history().clone(),
        }
    }

    /// Rebuild a machine from this snapshot.
    ///
    /// Fails when the format version is unsupported, or when a non-empty
    /// path does not end at the recorded current state; a running engine
    /// never produces that pairing.
    pub fn restore(self) -> Result<StateMachine, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if let Some(latest) = self.history.latest() {
            if latest != &self.current {
                return Err(SnapshotError::ValidationFailed(format!(
                    "history ends at '{}' but current state is '{}'",
                    latest, self.current
                )));
            }
        }
        Ok(StateMachine::from_parts(
            self.current,
            self.states,
            self.history,
        ))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_table;

    fn running_machine() -> StateMachine {
        let config = state_table! {
            initial: "idle",
            "idle" => { "start" => "running" },
            "running" => { "finish" => "done" },
            "done" => {},
        };
        let mut machine = StateMachine::new(config);
        machine.trigger("start").unwrap();
        machine.trigger("finish").unwrap();
        machine.undo();
        machine
    }

    #[test]
    fn capture_restore_round_trip() {
        let machine = running_machine();

        let restored = Snapshot::capture(&machine).restore().unwrap();

        assert_eq!(restored, machine);
    }

    #[test]
    fn restored_machine_keeps_its_redo_stack() {
        let mut restored = Snapshot::capture(&running_machine()).restore().unwrap();

        assert!(restored.can_redo());
        assert!(restored.redo());
        assert_eq!(restored.current_state(), "done");
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = Snapshot::capture(&running_machine());
        snapshot.version = 99;

        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::UnsupportedVersion {
                found: 99,
                supported: SNAPSHOT_VERSION,
            })
        ));
    }

    #[test]
    fn inconsistent_current_state_is_rejected() {
        let mut snapshot = Snapshot::capture(&running_machine());
        snapshot.current = "done".to_string();

        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::ValidationFailed(_))
        ));
    }

    #[test]
    fn cleared_history_snapshot_restores() {
        let mut machine = running_machine();
        machine.clear_history();

        let restored = Snapshot::capture(&machine).restore().unwrap();

        assert!(restored.history().path().is_empty());
        assert_eq!(restored.current_state(), "running");
    }

    #[test]
    fn json_round_trip() {
        let snapshot = Snapshot::capture(&running_machine());

        let json = snapshot.to_json().unwrap();
        let decoded = Snapshot::from_json(&json).unwrap();

        assert_eq!(decoded.id, snapshot.id);
        assert_eq!(decoded.current, snapshot.current);
        assert_eq!(decoded.states, snapshot.states);
        assert_eq!(decoded.history, snapshot.history);
    }

    #[test]
    fn binary_round_trip() {
        let snapshot = Snapshot::capture(&running_machine());

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = Snapshot::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.id, snapshot.id);
        assert_eq!(decoded.states, snapshot.states);
        assert_eq!(decoded.history, snapshot.history);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            Snapshot::from_json("{ not json"),
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}

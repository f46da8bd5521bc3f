//! Visited-path tracking with linear undo and redo.
//!
//! The machine appends every state it enters to a path, and undo moves
//! popped states onto a redo stack so they can be replayed in order.

use super::config::StateName;
use serde::{Deserialize, Serialize};

/// The visited path and redo stack of one machine.
///
/// `path` holds every state entered, in order, starting with the initial
/// state. `undone` holds states removed by [`undo`](History::undo), most
/// recently undone on top. Forward moves only ever append to the path;
/// nothing but [`redo`](History::redo) drains the redo stack.
///
/// # Example
///
/// ```rust
/// use waymark::core::History;
///
/// let mut history = History::seeded("idle".to_string());
/// history.record("running".to_string());
/// history.record("done".to_string());
///
/// assert_eq!(history.path(), ["idle", "running", "done"]);
/// assert_eq!(history.undo().map(String::as_str), Some("running"));
/// assert_eq!(history.undone(), ["done"]);
/// assert_eq!(history.redo().map(String::as_str), Some("done"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    path: Vec<StateName>,
    undone: Vec<StateName>,
}

impl History {
    /// Create a history with both the path and the redo stack empty.
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            undone: Vec::new(),
        }
    }

    /// Create a history whose path starts at the given state.
    pub fn seeded(initial: StateName) -> Self {
        Self {
            path: vec![initial],
            undone: Vec::new(),
        }
    }

    /// Append a state to the path. The redo stack is untouched.
    pub fn record(&mut self, state: StateName) {
        self.path.push(state);
    }

    /// Step back one entry: the last path element moves to the redo stack
    /// and the newly exposed last element is returned.
    ///
    /// Returns `None` when the path holds one element or fewer; the first
    /// entry is never removed this way.
    pub fn undo(&mut self) -> Option<&StateName> {
        if self.path.len() <= 1 {
            return None;
        }
        let undone = self.path.pop()?;
        self.undone.push(undone);
        self.path.last()
    }

    /// Replay the most recently undone entry: it moves from the redo stack
    /// back onto the path and is returned.
    ///
    /// Returns `None` when the redo stack is empty.
    pub fn redo(&mut self) -> Option<&StateName> {
        let next = self.undone.pop()?;
        self.path.push(next);
        self.path.last()
    }

    /// Truncate the path back to its first entry and return it.
    ///
    /// Returns `None` when the path is empty. The redo stack is untouched.
    pub fn rewind(&mut self) -> Option<&StateName> {
        self.path.truncate(1);
        self.path.first()
    }

    /// Empty the path. The redo stack keeps its entries.
    pub fn clear(&mut self) {
        self.path.clear();
    }

    /// The visited path, oldest first.
    pub fn path(&self) -> &[StateName] {
        &self.path
    }

    /// States removed by undo, most recently undone last.
    pub fn undone(&self) -> &[StateName] {
        &self.undone
    }

    /// The most recently visited state still on the path.
    pub fn latest(&self) -> Option<&StateName> {
        self.path.last()
    }

    /// Whether a call to [`undo`](History::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.path.len() > 1
    }

    /// Whether a call to [`redo`](History::redo) would succeed.
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

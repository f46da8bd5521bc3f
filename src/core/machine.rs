//! The state machine engine: transition resolution and history management.

use super::config::{Config, StateName, StateTable};
use super::error::{ConfigError, TransitionError};
use super::history::History;

/// A finite state machine driven by a declarative transition table.
///
/// The machine owns its table, the name of the state it currently occupies,
/// and a [`History`] recording every state entered. Transitions happen
/// either by rule ([`trigger`](StateMachine::trigger)) or by explicit jump
/// ([`change_state`](StateMachine::change_state)); both append to the
/// history, which supports linear [`undo`](StateMachine::undo) and
/// [`redo`](StateMachine::redo).
///
/// # Example
///
/// ```rust
/// use waymark::state_table;
/// use waymark::core::StateMachine;
///
/// let config = state_table! {
///     initial: "idle",
///     "idle" => { "start" => "running" },
///     "running" => { "pause" => "idle", "finish" => "done" },
///     "done" => {},
/// };
///
/// let mut machine = StateMachine::new(config);
/// assert_eq!(machine.current_state(), "idle");
///
/// machine.trigger("start").unwrap();
/// machine.trigger("finish").unwrap();
/// assert_eq!(machine.current_state(), "done");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "running");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "done");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine {
    current: StateName,
    table: StateTable,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is accepted as-is: an `initial` that names no
    /// table entry, or transitions targeting undefined states, are not
    /// rejected here. A machine occupying an unknown state simply has no
    /// outgoing transitions. Use [`try_new`](StateMachine::try_new) to
    /// validate eagerly instead.
    pub fn new(config: Config) -> Self {
        let current = config.initial.clone();
        Self {
            current,
            table: config.states,
            history: History::seeded(config.initial),
        }
    }

    /// Create a machine after validating the configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::state_table;
    /// use waymark::core::{ConfigError, StateMachine};
    ///
    /// let config = state_table! {
    ///     initial: "nowhere",
    ///     "idle" => {},
    /// };
    ///
    /// assert!(matches!(
    ///     StateMachine::try_new(config),
    ///     Err(ConfigError::UnknownInitial { .. })
    /// ));
    /// ```
    pub fn try_new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub(crate) fn from_parts(current: StateName, table: StateTable, history: History) -> Self {
        Self {
            current,
            table,
            history,
        }
    }

    /// Get the name of the current state (pure).
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Jump directly to a named state, bypassing transition rules.
    ///
    /// The target must be defined in the state table; the jump is recorded
    /// in the history like any rule-driven transition. On failure the
    /// machine is unchanged. The redo stack is never touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::state_table;
    /// use waymark::core::{StateMachine, TransitionError};
    ///
    /// let config = state_table! {
    ///     initial: "idle",
    ///     "idle" => { "start" => "running" },
    ///     "running" => {},
    /// };
    ///
    /// let mut machine = StateMachine::new(config);
    /// machine.change_state("running").unwrap();
    /// assert_eq!(machine.current_state(), "running");
    ///
    /// let err = machine.change_state("limbo").unwrap_err();
    /// assert!(matches!(err, TransitionError::InvalidState { .. }));
    /// assert_eq!(machine.current_state(), "running");
    /// ```
    pub fn change_state(&mut self, target: &str) -> Result<(), TransitionError> {
        if !self.table.contains(target) {
            return Err(TransitionError::InvalidState {
                name: target.to_string(),
            });
        }
        self.current = target.to_string();
        self.history.record(self.current.clone());
        Ok(())
    }

    /// Fire an event, following the current state's transition table.
    ///
    /// Fails with [`TransitionError::NoTransition`] when the current state
    /// has no rule for the event, including when the current state itself
    /// is not defined in the table. On failure the machine is unchanged.
    /// The redo stack is never touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::state_table;
    /// use waymark::core::StateMachine;
    ///
    /// let config = state_table! {
    ///     initial: "idle",
    ///     "idle" => { "start" => "running" },
    ///     "running" => {},
    /// };
    ///
    /// let mut machine = StateMachine::new(config);
    /// machine.trigger("start").unwrap();
    /// assert_eq!(machine.current_state(), "running");
    /// assert!(machine.trigger("start").is_err());
    /// ```
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        let target = self
            .table
            .get(&self.current)
            .and_then(|def| def.transitions.get(event))
            .cloned()
            .ok_or_else(|| TransitionError::NoTransition {
                from: self.current.clone(),
                event: event.to_string(),
            })?;
        self.current = target.clone();
        self.history.record(target);
        Ok(())
    }

    /// Return to the first state still recorded in the history.
    ///
    /// Truncates the history back to its first entry, makes that entry the
    /// current state, and returns it. The origin is whatever the history
    /// starts with, so a lineage begun after
    /// [`clear_history`](StateMachine::clear_history) resets to its own
    /// first state rather than the construction-time initial. With an empty
    /// history there is nothing to return to and the current state is left
    /// unchanged. The redo stack is never touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::state_table;
    /// use waymark::core::StateMachine;
    ///
    /// let config = state_table! {
    ///     initial: "idle",
    ///     "idle" => { "start" => "running" },
    ///     "running" => { "finish" => "done" },
    ///     "done" => {},
    /// };
    ///
    /// let mut machine = StateMachine::new(config);
    /// machine.trigger("start").unwrap();
    /// machine.trigger("finish").unwrap();
    ///
    /// assert_eq!(machine.reset(), "idle");
    /// assert_eq!(machine.history().path(), ["idle"]);
    /// ```
    pub fn reset(&mut self) -> &str {
        if let Some(first) = self.history.rewind() {
            self.current = first.clone();
        }
        &self.current
    }

    /// All state names in table order (pure).
    pub fn states(&self) -> Vec<&str> {
        self.table.names().collect()
    }

    /// State names with a transition for the given event, in table order
    /// (pure).
    ///
    /// An event no state handles yields an empty list, not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::state_table;
    /// use waymark::core::StateMachine;
    ///
    /// let config = state_table! {
    ///     initial: "idle",
    ///     "idle" => { "start" => "running" },
    ///     "running" => { "pause" => "idle" },
    ///     "done" => {},
    /// };
    ///
    /// let machine = StateMachine::new(config);
    /// assert_eq!(machine.states(), ["idle", "running", "done"]);
    /// assert_eq!(machine.states_for("pause"), ["running"]);
    /// assert!(machine.states_for("bogus").is_empty());
    /// ```
    pub fn states_for(&self, event: &str) -> Vec<&str> {
        self.table
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(event))
            .map(|(name, _)| name)
            .collect()
    }

    /// Step back to the previously visited state.
    ///
    /// Moves the last history entry onto the redo stack and occupies the
    /// entry before it. Returns `false`, changing nothing, when only the
    /// first entry remains; running out of history is a normal outcome,
    /// not an error.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.current = previous.clone();
                true
            }
            None => false,
        }
    }

    /// Replay the most recently undone state.
    ///
    /// Pops the redo stack, occupies that state, and records it in the
    /// history again. Returns `false` when the redo stack is empty.
    ///
    /// Forward moves do not invalidate the redo stack, so a redo after an
    /// unrelated `trigger` or `change_state` still replays the undone
    /// state on top of the new path.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.current = next.clone();
                true
            }
            None => false,
        }
    }

    /// Discard the visited path.
    ///
    /// The current state and the redo stack are kept. The history stays
    /// empty until the next recorded move, which starts a new lineage with
    /// its own origin.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Get the visited path and redo stack (pure).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Get the state table (pure).
    pub fn table(&self) -> &StateTable {
        &self.table
    }

    /// Whether undo would succeed (pure).
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo would succeed (pure).
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow_config() -> Config {
        let mut states = StateTable::new();
        states.entry("idle").transitions.insert("start".into(), "running".into());
        states.entry("running").transitions.insert("pause".into(), "idle".into());
        states.entry("running").transitions.insert("finish".into(), "done".into());
        states.entry("done");
        Config {
            initial: "idle".to_string(),
            states,
        }
    }

    #[test]
    fn construction_seeds_history_with_the_initial_state() {
        let machine = StateMachine::new(workflow_config());

        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history().path(), ["idle"]);
        assert!(machine.history().undone().is_empty());
    }

    #[test]
    fn construction_does_not_validate_the_config() {
        let config = Config {
            initial: "ghost".to_string(),
            states: workflow_config().states,
        };

        let machine = StateMachine::new(config);
        assert_eq!(machine.current_state(), "ghost");
    }

    #[test]
    fn try_new_rejects_malformed_config() {
        let config = Config {
            initial: "ghost".to_string(),
            states: workflow_config().states,
        };

        assert_eq!(
            StateMachine::try_new(config),
            Err(ConfigError::UnknownInitial {
                name: "ghost".to_string()
            })
        );
    }

    #[test]
    fn trigger_follows_the_transition_table() {
        let mut machine = StateMachine::new(workflow_config());

        machine.trigger("start").unwrap();

        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.history().path(), ["idle", "running"]);
    }

    #[test]
    fn trigger_without_matching_rule_fails_and_changes_nothing() {
        let mut machine = StateMachine::new(workflow_config());

        let err = machine.trigger("finish").unwrap_err();

        assert_eq!(
            err,
            TransitionError::NoTransition {
                from: "idle".to_string(),
                event: "finish".to_string(),
            }
        );
        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history().path(), ["idle"]);
    }

    #[test]
    fn trigger_from_a_state_missing_from_the_table_fails() {
        let config = Config {
            initial: "ghost".to_string(),
            states: workflow_config().states,
        };
        let mut machine = StateMachine::new(config);

        let err = machine.trigger("start").unwrap_err();

        assert_eq!(
            err,
            TransitionError::NoTransition {
                from: "ghost".to_string(),
                event: "start".to_string(),
            }
        );
    }

    #[test]
    fn change_state_jumps_without_a_transition_rule() {
        let mut machine = StateMachine::new(workflow_config());

        machine.change_state("done").unwrap();

        assert_eq!(machine.current_state(), "done");
        assert_eq!(machine.history().path(), ["idle", "done"]);
    }

    #[test]
    fn change_state_rejects_unknown_target() {
        let mut machine = StateMachine::new(workflow_config());

        let err = machine.change_state("limbo").unwrap_err();

        assert_eq!(
            err,
            TransitionError::InvalidState {
                name: "limbo".to_string()
            }
        );
        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history().path(), ["idle"]);
    }

    #[test]
    fn self_transitions_append_to_the_path() {
        let mut states = StateTable::new();
        states.entry("idle").transitions.insert("tick".into(), "idle".into());
        let mut machine = StateMachine::new(Config {
            initial: "idle".to_string(),
            states,
        });

        machine.trigger("tick").unwrap();

        assert_eq!(machine.history().path(), ["idle", "idle"]);
        assert!(machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn states_are_reported_in_table_order() {
        let machine = StateMachine::new(workflow_config());

        assert_eq!(machine.states(), ["idle", "running", "done"]);
        assert_eq!(machine.states_for("start"), ["idle"]);
        assert_eq!(machine.states_for("pause"), ["running"]);
        assert!(machine.states_for("bogus").is_empty());
    }

    #[test]
    fn undo_is_unavailable_at_the_seed() {
        let mut machine = StateMachine::new(workflow_config());

        assert!(!machine.can_undo());
        assert!(!machine.undo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn redo_without_prior_undo_returns_false() {
        let mut machine = StateMachine::new(workflow_config());
        machine.trigger("start").unwrap();

        assert!(!machine.can_redo());
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn reset_does_not_clear_the_redo_stack() {
        let mut machine = StateMachine::new(workflow_config());
        machine.trigger("start").unwrap();
        machine.undo();

        machine.reset();

        assert!(machine.can_redo());
        assert!(machine.redo());
        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.history().path(), ["idle", "running"]);
    }

    #[test]
    fn clear_history_keeps_current_state_and_redo_stack() {
        let mut machine = StateMachine::new(workflow_config());
        machine.trigger("start").unwrap();
        machine.undo();

        machine.clear_history();

        assert_eq!(machine.current_state(), "idle");
        assert!(machine.history().path().is_empty());
        assert!(machine.can_redo());
    }

    #[test]
    fn reset_on_an_empty_history_leaves_current_unchanged() {
        let mut machine = StateMachine::new(workflow_config());
        machine.trigger("start").unwrap();
        machine.clear_history();

        assert_eq!(machine.reset(), "running");
        assert!(machine.history().path().is_empty());
    }
}

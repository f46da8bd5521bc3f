//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, EventName, StateName, StateTable};

/// Builder for constructing validated configurations with a fluent API.
///
/// Unlike a raw [`Config`] literal, which the machine accepts without
/// inspection, [`build`](ConfigBuilder::build) validates the result: the
/// initial state must be set and defined, and every transition must target
/// a defined state. A state named as a transition source is created
/// implicitly; a state that only ever appears as a target needs an explicit
/// [`state`](ConfigBuilder::state) call.
///
/// # Example
///
/// ```rust
/// use waymark::builder::ConfigBuilder;
/// use waymark::core::StateMachine;
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .transition("idle", "start", "running")
///     .transition("running", "finish", "done")
///     .state("done")
///     .build()
///     .unwrap();
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.states(), ["idle", "running", "done"]);
/// ```
pub struct ConfigBuilder {
    initial: Option<StateName>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: StateTable::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<StateName>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state, keeping any transitions already added for it.
    pub fn state(mut self, name: impl Into<StateName>) -> Self {
        self.states.entry(name);
        self
    }

    /// Add a transition from one state to another, declaring the source
    /// state if it is new.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        self.states
            .entry(from)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or validation fails.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let config = Config {
            initial,
            states: self.states,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Start building a configuration fluently.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

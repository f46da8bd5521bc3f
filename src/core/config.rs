//! Machine configuration: state names, transition tables, and validation.
//!
//! States and events are identified by plain strings, and the full shape of
//! a machine is a declarative table supplied once at construction time.

use super::error::ConfigError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Name identifying a state within a machine's table.
pub type StateName = String;

/// Name identifying an event that may trigger a transition.
pub type EventName = String;

/// Definition of a single state: its outgoing transitions.
///
/// Each entry maps an event name to the state the machine moves to when
/// that event is triggered while this state is current.
///
/// # Example
///
/// ```rust
/// use waymark::core::StateDef;
///
/// let mut def = StateDef::default();
/// def.transitions.insert("submit".into(), "review".into());
///
/// assert_eq!(def.transitions.get("submit").map(String::as_str), Some("review"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Outgoing transitions: event name to target state name
    pub transitions: HashMap<EventName, StateName>,
}

/// Insertion-ordered table of state definitions.
///
/// The order in which states are first inserted is the order `names` and
/// `iter` report them in, and it survives serialization round trips.
/// Inserting a name that is already present replaces its definition but
/// keeps its original position, matching how repeated key assignment
/// behaves in a configuration document.
///
/// # Example
///
/// ```rust
/// use waymark::core::StateTable;
///
/// let mut table = StateTable::new();
/// table.entry("draft").transitions.insert("submit".into(), "review".into());
/// table.entry("review").transitions.insert("approve".into(), "published".into());
/// table.entry("published");
///
/// assert_eq!(
///     table.names().collect::<Vec<_>>(),
///     ["draft", "review", "published"]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<(StateName, StateDef)>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of states in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a state's definition by name.
    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, def)| def)
    }

    /// Whether a state with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert a state definition, returning the previous definition if the
    /// name was already present.
    ///
    /// A replaced state keeps its original position in the table.
    pub fn insert(&mut self, name: impl Into<StateName>, def: StateDef) -> Option<StateDef> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, def)),
            None => {
                self.entries.push((name, def));
                None
            }
        }
    }

    /// Get a mutable reference to a state's definition, creating an empty
    /// definition at the end of the table if the name is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::core::StateTable;
    ///
    /// let mut table = StateTable::new();
    /// table.entry("idle").transitions.insert("start".into(), "running".into());
    /// table.entry("idle").transitions.insert("reset".into(), "idle".into());
    ///
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get("idle").map(|def| def.transitions.len()), Some(2));
    /// ```
    pub fn entry(&mut self, name: impl Into<StateName>) -> &mut StateDef {
        let name = name.into();
        let index = match self.entries.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.entries.push((name, StateDef::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// State names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Name and definition pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }
}

impl FromIterator<(StateName, StateDef)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (StateName, StateDef)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (name, def) in iter {
            table.insert(name, def);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, def) in &self.entries {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StateTableVisitor;

        impl<'de> Visitor<'de> for StateTableVisitor {
            type Value = StateTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of state names to state definitions")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = StateTable::new();
                while let Some((name, def)) = access.next_entry::<StateName, StateDef>()? {
                    table.insert(name, def);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(StateTableVisitor)
    }
}

/// Declarative machine configuration: the initial state and the state table.
///
/// Construction through [`StateMachine::new`](crate::core::StateMachine::new)
/// accepts any configuration without inspection, including an `initial` that
/// names no table entry. Call [`validate`](Config::validate) (or construct via
/// [`StateMachine::try_new`](crate::core::StateMachine::try_new)) to reject
/// malformed tables eagerly instead.
///
/// # Example
///
/// ```rust
/// use waymark::core::{Config, StateTable};
///
/// let mut states = StateTable::new();
/// states.entry("idle").transitions.insert("start".into(), "running".into());
/// states.entry("running").transitions.insert("pause".into(), "idle".into());
///
/// let config = Config {
///     initial: "idle".into(),
///     states,
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the state the machine starts in
    pub initial: StateName,
    /// The state table
    pub states: StateTable,
}

impl Config {
    /// Check the configuration for structural problems.
    ///
    /// Fails when the table is empty, when `initial` names no table entry,
    /// or when any transition targets an undefined state. A configuration
    /// that passes cannot produce a dangling current state through `trigger`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::core::{Config, ConfigError, StateTable};
    ///
    /// let mut states = StateTable::new();
    /// states.entry("idle").transitions.insert("start".into(), "running".into());
    ///
    /// let config = Config {
    ///     initial: "idle".into(),
    ///     states,
    /// };
    ///
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(ConfigError::DanglingTarget { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        if !self.states.contains(&self.initial) {
            return Err(ConfigError::UnknownInitial {
                name: self.initial.clone(),
            });
        }
        for (state, def) in self.states.iter() {
            for (event, target) in &def.transitions {
                if !self.states.contains(target) {
                    return Err(ConfigError::DanglingTarget {
                        state: state.to_string(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

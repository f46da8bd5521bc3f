//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::core::Config) from a declarative table literal.
///
/// The `initial:` entry names the starting state; each following entry
/// defines a state and its event-to-target transitions. States keep the
/// order they are written in. The result is not validated; pair with
/// [`StateMachine::try_new`](crate::core::StateMachine::try_new) or
/// [`Config::validate`](crate::core::Config::validate) to reject malformed
/// tables eagerly.
///
/// # Example
///
/// ```
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
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
/// ```
#[macro_export]
macro_rules! state_table {
    (
        initial: $initial:expr,
        $(
            $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
        ),* $(,)?
    ) => {{
        let mut states = $crate::core::StateTable::new();
        $(
            states.entry($state);
            $(
                states
                    .entry($state)
                    .transitions
                    .insert($event.into(), $target.into());
            )*
        )*
        $crate::core::Config {
            initial: $initial.into(),
            states,
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Config, StateTable};

    #[test]
    fn macro_matches_the_hand_built_config() {
        let from_macro = state_table! {
            initial: "idle",
            "idle" => { "start" => "running" },
            "running" => { "pause" => "idle", "finish" => "done" },
            "done" => {},
        };

        let mut states = StateTable::new();
        states.entry("idle").transitions.insert("start".into(), "running".into());
        states.entry("running").transitions.insert("pause".into(), "idle".into());
        states.entry("running").transitions.insert("finish".into(), "done".into());
        states.entry("done");
        let by_hand = Config {
            initial: "idle".to_string(),
            states,
        };

        assert_eq!(from_macro, by_hand);
    }

    #[test]
    fn macro_preserves_declaration_order() {
        let config = state_table! {
            initial: "one",
            "one" => {},
            "two" => {},
            "three" => {},
        };

        assert_eq!(
            config.states.names().collect::<Vec<_>>(),
            ["one", "two", "three"]
        );
    }

    #[test]
    fn macro_accepts_owned_strings() {
        let initial = String::from("a");
        let config = state_table! {
            initial: initial,
            "a" => { "loop" => "a" },
        };

        assert_eq!(config.initial, "a");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn macro_works_without_trailing_commas() {
        let config = state_table! {
            initial: "a",
            "a" => { "go" => "b" },
            "b" => {}
        };

        assert_eq!(config.states.names().collect::<Vec<_>>(), ["a", "b"]);
    }
}

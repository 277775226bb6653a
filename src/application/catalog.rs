use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawState {
    name: String,
}

/// A selectable Indian state or union territory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateOption {
    pub name: String,
    pub value: String,
}

static RAW_STATES: &str = include_str!("../../data/states.json");

static STATES: Lazy<Vec<StateOption>> = Lazy::new(|| {
    let raw: Vec<RawState> =
        serde_json::from_str(RAW_STATES).expect("failed to parse states list");
    raw.into_iter()
        .map(|s| StateOption {
            value: state_slug(&s.name),
            name: s.name,
        })
        .collect()
});

/// Lowercases a display name and joins its words with hyphens.
pub fn state_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn states() -> &'static [StateOption] {
    &STATES
}

pub fn is_known_state(value: &str) -> bool {
    STATES.iter().any(|s| s.value == value)
}

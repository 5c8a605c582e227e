use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::finger::{FingerSet, FingerState};

/// A named static gesture: exactly the fingers in `fingers` raised, no others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureDefinition {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub fingers: FingerSet,
}

impl GestureDefinition {
    pub const fn new_static(name: &'static str, description: &'static str, fingers: FingerSet) -> Self {
        Self {
            name: Cow::Borrowed(name),
            description: Cow::Borrowed(description),
            fingers,
        }
    }

    pub fn new(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        fingers: FingerSet,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fingers,
        }
    }

    pub fn matches(&self, raised: FingerSet) -> bool {
        self.fingers == raised
    }
}

pub const DEFAULT_GESTURES: [GestureDefinition; 7] = [
    GestureDefinition::new_static("fist", "Fist/Closed hand", FingerSet::empty()),
    GestureDefinition::new_static("pointingUp", "Pointing Up", FingerSet::INDEX),
    GestureDefinition::new_static(
        "peace",
        "Peace Sign",
        FingerSet::INDEX.union(FingerSet::MIDDLE),
    ),
    GestureDefinition::new_static("thumbsUp", "Thumbs Up", FingerSet::THUMB),
    GestureDefinition::new_static(
        "threeFingers",
        "Three Fingers",
        FingerSet::INDEX.union(FingerSet::MIDDLE).union(FingerSet::RING),
    ),
    GestureDefinition::new_static(
        "fourFingers",
        "Four Fingers",
        FingerSet::INDEX.union(FingerSet::MIDDLE).union(FingerSet::RING).union(FingerSet::PINKY),
    ),
    GestureDefinition::new_static("openPalm", "Open Palm", FingerSet::all()),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GestureTableError {
    #[error("gestures {first:?} and {second:?} require the same fingers")]
    DuplicateFingers { first: String, second: String },
    #[error("gesture {0:?} is defined more than once")]
    DuplicateName(String),
}

/// An ordered gesture lookup table. No two entries share a name or a
/// required finger set, so at most one entry matches any finger state.
#[derive(Debug, Clone)]
pub struct GestureTable {
    gestures: Vec<GestureDefinition>,
}

impl GestureTable {
    pub fn new(gestures: impl IntoIterator<Item = GestureDefinition>) -> Result<Self, GestureTableError> {
        let gestures = gestures.into_iter().collect::<Vec<_>>();

        let mut by_fingers = HashMap::new();
        let mut names = HashSet::new();
        for gesture in gestures.iter() {
            if !names.insert(gesture.name.as_ref()) {
                return Err(GestureTableError::DuplicateName(gesture.name.to_string()));
            }
            if let Some(first) = by_fingers.insert(gesture.fingers, gesture.name.as_ref()) {
                return Err(GestureTableError::DuplicateFingers {
                    first: first.to_string(),
                    second: gesture.name.to_string(),
                });
            }
        }

        tracing::debug!("loaded {} gesture definitions", gestures.len());
        Ok(Self { gestures })
    }

    pub fn gestures(&self) -> &[GestureDefinition] {
        &self.gestures
    }

    pub fn get(&self, name: &str) -> Option<&GestureDefinition> {
        self.gestures.iter().find(|g| g.name == name)
    }

    /// The first gesture, in table order, requiring exactly `raised`.
    pub fn find_set(&self, raised: FingerSet) -> Option<&GestureDefinition> {
        self.gestures.iter().find(|g| g.matches(raised))
    }

    pub fn find(&self, state: &FingerState) -> Option<&GestureDefinition> {
        self.find_set(state.raised())
    }
}

impl Default for GestureTable {
    fn default() -> Self {
        Self {
            gestures: DEFAULT_GESTURES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finger::Finger;

    fn find_name(raised: FingerSet) -> Option<String> {
        GestureTable::default()
            .find(&FingerState::from_raised(raised))
            .map(|g| g.name.to_string())
    }

    #[test]
    fn default_table_is_valid() {
        let table = GestureTable::new(DEFAULT_GESTURES).unwrap();
        assert_eq!(table.gestures().len(), 7);
    }

    #[test]
    fn default_table_has_unique_finger_sets() {
        let table = GestureTable::default();
        for (i, a) in table.gestures().iter().enumerate() {
            for b in &table.gestures()[i + 1..] {
                assert_ne!(a.fingers, b.fingers, "{} and {} overlap", a.name, b.name);
            }
        }
    }

    #[test]
    fn default_table_order() {
        let names = GestureTable::default().gestures().iter()
            .map(|g| g.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, [
            "fist",
            "pointingUp",
            "peace",
            "thumbsUp",
            "threeFingers",
            "fourFingers",
            "openPalm",
        ]);
    }

    #[test]
    fn matches_each_default_gesture() {
        assert_eq!(find_name(FingerSet::empty()).as_deref(), Some("fist"));
        assert_eq!(find_name(FingerSet::INDEX).as_deref(), Some("pointingUp"));
        assert_eq!(find_name(FingerSet::INDEX | FingerSet::MIDDLE).as_deref(), Some("peace"));
        assert_eq!(find_name(FingerSet::THUMB).as_deref(), Some("thumbsUp"));
        assert_eq!(
            find_name(FingerSet::INDEX | FingerSet::MIDDLE | FingerSet::RING).as_deref(),
            Some("threeFingers"),
        );
        assert_eq!(
            find_name(FingerSet::all() - FingerSet::THUMB).as_deref(),
            Some("fourFingers"),
        );
        assert_eq!(find_name(FingerSet::all()).as_deref(), Some("openPalm"));
    }

    #[test]
    fn open_palm_description() {
        let table = GestureTable::default();
        let gesture = table.find(&FingerState::from_raised(FingerSet::all())).unwrap();
        assert_eq!(gesture.description, "Open Palm");
    }

    #[test]
    fn supersets_and_subsets_do_not_match() {
        assert_eq!(find_name(FingerSet::INDEX | FingerSet::RING), None);
        assert_eq!(find_name(FingerSet::THUMB | FingerSet::INDEX), None);
        assert_eq!(find_name(FingerSet::MIDDLE), None);
    }

    #[test]
    fn rejects_duplicate_finger_sets() {
        let err = GestureTable::new([
            GestureDefinition::new("peace", "Peace Sign", FingerSet::INDEX | FingerSet::MIDDLE),
            GestureDefinition::new("victory", "Victory", [Finger::Middle, Finger::Index].into_iter().collect()),
        ]).unwrap_err();
        assert_eq!(err, GestureTableError::DuplicateFingers {
            first: "peace".to_string(),
            second: "victory".to_string(),
        });
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = GestureTable::new([
            GestureDefinition::new("wave", "Wave", FingerSet::all()),
            GestureDefinition::new("wave", "Other wave", FingerSet::THUMB),
        ]).unwrap_err();
        assert_eq!(err, GestureTableError::DuplicateName("wave".to_string()));
    }

    #[test]
    fn custom_table_is_searched_in_order() {
        let table = GestureTable::new([
            GestureDefinition::new("rock", "Rock On", FingerSet::INDEX | FingerSet::PINKY),
            GestureDefinition::new("call", "Call Me", FingerSet::THUMB | FingerSet::PINKY),
        ]).unwrap();
        let state = FingerState::from_raised(FingerSet::THUMB | FingerSet::PINKY);
        assert_eq!(table.find(&state).map(|g| g.name.as_ref()), Some("call"));
        assert!(table.get("rock").is_some());
        assert!(table.find(&FingerState::default()).is_none());
    }
}

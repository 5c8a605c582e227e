use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::landmarks::{FINGER_BASES, FINGER_TIPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Every finger, thumb to pinky.
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb",
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Pinky => "Pinky",
        }
    }

    pub fn tip(self) -> usize {
        FINGER_TIPS[self.position()]
    }

    pub fn base(self) -> usize {
        FINGER_BASES[self.position()]
    }

    pub fn to_set(self) -> FingerSet {
        match self {
            Finger::Thumb => FingerSet::THUMB,
            Finger::Index => FingerSet::INDEX,
            Finger::Middle => FingerSet::MIDDLE,
            Finger::Ring => FingerSet::RING,
            Finger::Pinky => FingerSet::PINKY,
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of fingers. Two sets are equal only if they have the same size
    /// and members.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FingerSet: u8 {
        const THUMB = 1 << 0;
        const INDEX = 1 << 1;
        const MIDDLE = 1 << 2;
        const RING = 1 << 3;
        const PINKY = 1 << 4;
    }
}

impl FingerSet {
    pub fn contains_finger(self, finger: Finger) -> bool {
        self.contains(finger.to_set())
    }

    /// Members of the set, thumb to pinky.
    pub fn fingers(self) -> impl Iterator<Item = Finger> {
        Finger::ALL.into_iter().filter(move |f| self.contains_finger(*f))
    }

    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

impl FromIterator<Finger> for FingerSet {
    fn from_iter<T: IntoIterator<Item = Finger>>(iter: T) -> Self {
        iter.into_iter().fold(FingerSet::empty(), |set, f| set | f.to_set())
    }
}

/// Raised (`true`) or lowered (`false`) state of each of the five fingers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    pub fn from_raised(raised: FingerSet) -> Self {
        let mut state = Self::default();
        for finger in raised.fingers() {
            state.set(finger, true);
        }
        state
    }

    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn set(&mut self, finger: Finger, raised: bool) {
        let slot = match finger {
            Finger::Thumb => &mut self.thumb,
            Finger::Index => &mut self.index,
            Finger::Middle => &mut self.middle,
            Finger::Ring => &mut self.ring,
            Finger::Pinky => &mut self.pinky,
        };
        *slot = raised;
    }

    /// All five entries, thumb to pinky.
    pub fn iter(&self) -> impl Iterator<Item = (Finger, bool)> + '_ {
        Finger::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn raised(&self) -> FingerSet {
        self.iter()
            .filter(|(_, raised)| *raised)
            .map(|(f, _)| f)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.iter().filter(|(_, raised)| *raised).count()
    }
}

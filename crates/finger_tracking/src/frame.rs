use serde::{Deserialize, Serialize};

use crate::classifier::ClassifierThresholds;
use crate::finger::FingerState;
use crate::gesture::{GestureDefinition, GestureTable};
use crate::landmarks::HandLandmarks;
use crate::settings::TrackerSettings;

/// Anatomical handedness as reported by the detector.
///
/// With a front-facing camera the image is mirrored, so the detector's
/// `Right` hand shows up on the viewer's left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn mirrored(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHand {
    pub handedness: Handedness,
    pub score: Option<f32>,
    pub landmarks: HandLandmarks,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandResult {
    /// `None` when no hand was detected for this slot.
    pub handedness: Option<Handedness>,
    /// Detector confidence for the handedness label.
    pub score: Option<f32>,
    pub fingers: FingerState,
    pub count: usize,
    pub gesture: Option<GestureDefinition>,
    pub landmarks: Option<HandLandmarks>,
}

impl HandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_detected(&self) -> bool {
        self.handedness.is_some()
    }
}

/// The hands of one frame, placed by where they appear to the viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameResult {
    pub left: HandResult,
    pub right: HandResult,
}

impl FrameResult {
    pub fn combined_count(&self) -> usize {
        self.left.count + self.right.count
    }

    pub fn hands(&self) -> impl Iterator<Item = &HandResult> {
        [&self.left, &self.right].into_iter().filter(|h| h.is_detected())
    }

    fn slot_mut(&mut self, handedness: Handedness) -> &mut HandResult {
        match handedness.mirrored() {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }
}

/// Classifies and matches the hands of each frame. Holds no per-frame state.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    thresholds: ClassifierThresholds,
    gestures: GestureTable,
}

impl Recognizer {
    pub fn new(thresholds: ClassifierThresholds, gestures: GestureTable) -> Self {
        Self {
            thresholds,
            gestures,
        }
    }

    pub fn recognize(&self, hand: &DetectedHand) -> HandResult {
        let fingers = self.thresholds.classify(&hand.landmarks);
        let gesture = self.gestures.find(&fingers).cloned();
        HandResult {
            handedness: Some(hand.handedness),
            score: hand.score,
            count: fingers.count(),
            fingers,
            gesture,
            landmarks: Some(hand.landmarks),
        }
    }

    pub fn process(&self, hands: &[DetectedHand], settings: &TrackerSettings) -> FrameResult {
        if hands.len() > settings.max_num_hands {
            tracing::debug!(
                "ignoring {} hands past the limit of {}",
                hands.len() - settings.max_num_hands,
                settings.max_num_hands,
            );
        }

        let mut frame = FrameResult::default();
        for hand in hands.iter().take(settings.max_num_hands) {
            *frame.slot_mut(hand.handedness) = self.recognize(hand);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::tests::hand_with;
    use crate::finger::{Finger, FingerSet};
    use crate::gesture::DEFAULT_GESTURES;

    fn detected(handedness: Handedness, fingers: &[Finger]) -> DetectedHand {
        DetectedHand {
            handedness,
            score: Some(0.9),
            landmarks: hand_with(fingers),
        }
    }

    #[test]
    fn no_hands_gives_empty_slots() {
        let frame = Recognizer::default().process(&[], &TrackerSettings::default());
        assert_eq!(frame.left, HandResult::empty());
        assert_eq!(frame.right, HandResult::empty());
        assert_eq!(frame.combined_count(), 0);
        assert!(frame.left.gesture.is_none());
        assert_eq!(frame.hands().count(), 0);
    }

    #[test]
    fn pointing_up() {
        let hand = detected(Handedness::Left, &[Finger::Index]);
        let result = Recognizer::default().recognize(&hand);
        assert_eq!(result.fingers.raised(), FingerSet::INDEX);
        assert_eq!(result.count, 1);
        assert_eq!(result.gesture.unwrap().name, "pointingUp");
        assert_eq!(result.score, Some(0.9));
    }

    #[test]
    fn every_finger_combination() {
        let recognizer = Recognizer::default();
        let mut matched = 0;
        for bits in 0..32u8 {
            let set = FingerSet::from_bits(bits).unwrap();
            let fingers = set.fingers().collect::<Vec<_>>();
            let result = recognizer.recognize(&detected(Handedness::Left, &fingers));

            assert_eq!(result.fingers.iter().count(), 5);
            assert_eq!(result.fingers.raised(), set);
            assert_eq!(result.count, set.len());
            assert!(result.count <= 5);

            let in_table = DEFAULT_GESTURES.iter().any(|g| g.fingers == set);
            assert_eq!(result.gesture.is_some(), in_table, "{:?}", set);
            if let Some(gesture) = result.gesture {
                assert_eq!(gesture.fingers, set);
                matched += 1;
            }
        }
        assert_eq!(matched, DEFAULT_GESTURES.len());
    }

    #[test]
    fn peace_sign() {
        let hand = detected(Handedness::Right, &[Finger::Index, Finger::Middle]);
        let result = Recognizer::default().recognize(&hand);
        assert_eq!(result.gesture.unwrap().name, "peace");
    }

    #[test]
    fn open_palm() {
        let hand = detected(Handedness::Right, &Finger::ALL);
        let result = Recognizer::default().recognize(&hand);
        assert_eq!(result.count, 5);
        assert_eq!(result.gesture.unwrap().description, "Open Palm");
    }

    #[test]
    fn unknown_combination_still_counts() {
        let hand = detected(Handedness::Left, &[Finger::Index, Finger::Ring]);
        let result = Recognizer::default().recognize(&hand);
        assert_eq!(result.count, 2);
        assert!(result.gesture.is_none());
        assert_eq!(result.handedness, Some(Handedness::Left));
    }

    #[test]
    fn hands_are_placed_mirrored() {
        let hands = [
            detected(Handedness::Right, &[Finger::Index, Finger::Middle, Finger::Ring]),
            detected(Handedness::Left, &[Finger::Thumb, Finger::Index]),
        ];
        let frame = Recognizer::default().process(&hands, &TrackerSettings::default());

        assert_eq!(frame.left.handedness, Some(Handedness::Right));
        assert_eq!(frame.left.count, 3);
        assert_eq!(frame.right.handedness, Some(Handedness::Left));
        assert_eq!(frame.right.count, 2);
        assert_eq!(frame.combined_count(), 5);
        assert_eq!(frame.hands().count(), 2);
    }

    #[test]
    fn later_hand_wins_a_shared_slot() {
        let hands = [
            detected(Handedness::Left, &[Finger::Index]),
            detected(Handedness::Left, &Finger::ALL),
        ];
        let frame = Recognizer::default().process(&hands, &TrackerSettings::default());
        assert_eq!(frame.right.count, 5);
        assert!(!frame.left.is_detected());
        assert_eq!(frame.combined_count(), 5);
    }

    #[test]
    fn respects_max_num_hands() {
        let hands = [
            detected(Handedness::Left, &[Finger::Index]),
            detected(Handedness::Right, &Finger::ALL),
        ];
        let settings = TrackerSettings {
            max_num_hands: 1,
            ..Default::default()
        };
        let frame = Recognizer::default().process(&hands, &settings);
        assert_eq!(frame.combined_count(), 1);
        assert!(!frame.left.is_detected());
    }

    #[test]
    fn mirrored_is_an_involution() {
        for handedness in [Handedness::Left, Handedness::Right] {
            assert_ne!(handedness.mirrored(), handedness);
            assert_eq!(handedness.mirrored().mirrored(), handedness);
        }
    }
}

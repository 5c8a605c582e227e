use serde::{Deserialize, Serialize};

use crate::finger::{Finger, FingerState};
use crate::landmarks::HandLandmarks;

/// Offsets a fingertip has to clear past its base landmark to count as raised.
///
/// The thumb is compared horizontally (tip left of base in image space), the
/// other fingers vertically (tip above base, image y grows downwards). The
/// thumb check does not account for hand rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierThresholds {
    pub thumb_offset: f32,
    pub finger_offset: f32,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            thumb_offset: 0.05,
            finger_offset: 0.07,
        }
    }
}

impl ClassifierThresholds {
    pub fn is_raised(&self, landmarks: &HandLandmarks, finger: Finger) -> bool {
        let tip = landmarks[finger.tip()];
        let base = landmarks[finger.base()];
        match finger {
            Finger::Thumb => tip.x < base.x - self.thumb_offset,
            _ => tip.y < base.y - self.finger_offset,
        }
    }

    pub fn classify(&self, landmarks: &HandLandmarks) -> FingerState {
        let mut state = FingerState::default();
        for finger in Finger::ALL {
            state.set(finger, self.is_raised(landmarks, finger));
        }
        state
    }
}

/// Classifies a hand with the default thresholds.
pub fn classify(landmarks: &HandLandmarks) -> FingerState {
    ClassifierThresholds::default().classify(landmarks)
}

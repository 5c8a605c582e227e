//! Finger counting and static gesture recognition over MediaPipe-style hand
//! landmarks.
//!
//! Each frame is handled independently: landmarks are classified into a
//! [`FingerState`], the raised fingers are matched against a [`GestureTable`],
//! and the per-hand results are collected into a [`FrameResult`].

pub use classifier::{classify, ClassifierThresholds};
pub use finger::{Finger, FingerSet, FingerState};
pub use frame::{DetectedHand, FrameResult, HandResult, Handedness, Recognizer};
pub use gesture::{GestureDefinition, GestureTable, GestureTableError, DEFAULT_GESTURES};
pub use landmarks::{HandLandmarks, LandmarkError, LANDMARK_COUNT};
pub use settings::{SettingsError, TrackerSettings};

mod classifier;
pub mod display;
mod finger;
mod frame;
mod gesture;
pub mod landmarks;
mod settings;

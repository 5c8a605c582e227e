//! Text shown to the viewer for a classified frame.
//!
//! Hand sides here are viewer-relative, i.e. the mirror of what the detector
//! reports.

use crate::finger::FingerState;
use crate::frame::{FrameResult, HandResult};

pub const NO_FINGERS_RAISED: &str = "No fingers raised";

/// One line per finger, e.g. `"Index: Raised"`.
pub fn finger_lines(fingers: &FingerState) -> Vec<String> {
    fingers.iter()
        .map(|(finger, raised)| {
            let state = if raised { "Raised" } else { "Lowered" };
            format!("{}: {}", finger.display_name(), state)
        })
        .collect()
}

/// The label drawn over a hand with a recognized gesture, e.g.
/// `"Right Hand: Peace Sign"`.
pub fn gesture_label(hand: &HandResult) -> Option<String> {
    let handedness = hand.handedness?;
    let gesture = hand.gesture.as_ref()?;
    Some(format!("{} Hand: {}", handedness.mirrored().as_str(), gesture.description))
}

fn hand_description(side: &str, hand: &HandResult) -> Option<String> {
    if hand.count == 0 {
        return None;
    }

    let names = hand.fingers.iter()
        .filter(|(_, raised)| *raised)
        .map(|(finger, _)| finger.display_name())
        .collect::<Vec<_>>();
    Some(format!("{} hand: {}", side, names.join(", ")))
}

/// Summary of the raised fingers of both hands, right hand first.
pub fn combined_description(frame: &FrameResult) -> Vec<String> {
    let lines = [("Right", &frame.right), ("Left", &frame.left)]
        .into_iter()
        .filter_map(|(side, hand)| hand_description(side, hand))
        .collect::<Vec<_>>();

    if lines.is_empty() {
        vec![NO_FINGERS_RAISED.to_string()]
    } else {
        lines
    }
}

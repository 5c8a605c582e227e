use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("{name} must be between 0 and 1, got {value}")]
    ConfidenceOutOfRange { name: &'static str, value: f32 },
    #[error("model complexity must be 0 or 1, got {0}")]
    ModelComplexity(u8),
    #[error("max hands must be 1 or 2, got {0}")]
    MaxNumHands(usize),
}

/// Settings for the hand tracker. The confidence and complexity values are
/// only applied by the external detector; `max_num_hands` also caps how many
/// hands a frame may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerSettings {
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub model_complexity: u8,
    pub max_num_hands: usize,
    pub show_landmarks: bool,
    pub debug: bool,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.6,
            min_tracking_confidence: 0.5,
            model_complexity: 1,
            max_num_hands: 2,
            show_landmarks: true,
            debug: false,
        }
    }
}

impl TrackerSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_confidence("minDetectionConfidence", self.min_detection_confidence)?;
        check_confidence("minTrackingConfidence", self.min_tracking_confidence)?;
        if self.model_complexity > 1 {
            return Err(SettingsError::ModelComplexity(self.model_complexity));
        }
        if !(1..=2).contains(&self.max_num_hands) {
            return Err(SettingsError::MaxNumHands(self.max_num_hands));
        }
        Ok(())
    }
}

fn check_confidence(name: &'static str, value: f32) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::ConfidenceOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = TrackerSettings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.min_detection_confidence, 0.6);
        assert_eq!(settings.min_tracking_confidence, 0.5);
        assert_eq!(settings.model_complexity, 1);
        assert_eq!(settings.max_num_hands, 2);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let settings = TrackerSettings {
            min_tracking_confidence: 1.5,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ConfidenceOutOfRange {
            name: "minTrackingConfidence",
            value: 1.5,
        }));

        let settings = TrackerSettings {
            model_complexity: 2,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ModelComplexity(2)));

        let settings = TrackerSettings {
            max_num_hands: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::MaxNumHands(0)));
    }

    #[test]
    fn rejects_nan_confidence() {
        let settings = TrackerSettings {
            min_detection_confidence: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: TrackerSettings = serde_json::from_str(r#"{"modelComplexity": 0, "debug": true}"#).unwrap();
        assert_eq!(settings.model_complexity, 0);
        assert!(settings.debug);
        assert_eq!(settings.min_detection_confidence, 0.6);
        assert_eq!(settings.max_num_hands, 2);
    }
}

use std::borrow::Cow;

use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use finger_tracking::{
    display, DetectedHand, FingerState, FrameResult, GestureDefinition, HandResult, Handedness,
    LandmarkError, SettingsError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCategory {
    Cancelled,
    InvalidArgument,
    NotFound,
}

impl ErrorCategory {
    pub fn to_status_code(self) -> StatusCode {
        match self {
            ErrorCategory::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCategory::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub category: ErrorCategory,
    pub error_code: Cow<'static, str>,
    pub instance_id: String,
    pub message: Cow<'static, str>,
}

impl ApiError {
    pub fn with_message(
        category: ErrorCategory,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            category,
            error_code: code.into(),
            instance_id: nanoid::nanoid!(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_message(ErrorCategory::InvalidArgument, code, message)
    }

    pub fn not_found() -> Self {
        Self::with_message(ErrorCategory::NotFound, "not_found", "no such endpoint")
    }

    pub fn unavailable() -> Self {
        Self::with_message(ErrorCategory::Cancelled, "unavailable", "service unavailable")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.category.to_status_code();
        (status_code, Json(self)).into_response()
    }
}

impl From<LandmarkError> for ApiError {
    fn from(err: LandmarkError) -> Self {
        ApiError::invalid_argument("invalid_landmarks", err.to_string())
    }
}

impl From<SettingsError> for ApiError {
    fn from(err: SettingsError) -> Self {
        ApiError::invalid_argument("invalid_settings", err.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LandmarkDto {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl From<LandmarkDto> for Vec3 {
    fn from(value: LandmarkDto) -> Self {
        Vec3::new(value.x, value.y, value.z)
    }
}

/// One hand as reported by the tracker: its handedness label and 21
/// landmarks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandDto {
    pub handedness: Handedness,
    #[serde(default)]
    pub score: Option<f32>,
    pub landmarks: Vec<LandmarkDto>,
}

impl TryFrom<HandDto> for DetectedHand {
    type Error = LandmarkError;

    fn try_from(value: HandDto) -> Result<Self, Self::Error> {
        let points = value.landmarks.into_iter().map(Vec3::from).collect::<Vec<_>>();
        Ok(DetectedHand {
            handedness: value.handedness,
            score: value.score,
            landmarks: points.try_into()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHandsRequest {
    pub hands: Vec<HandDto>,
}

impl SetHandsRequest {
    pub fn into_detected(self) -> Result<Vec<DetectedHand>, LandmarkError> {
        self.hands.into_iter().map(DetectedHand::try_from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureDto {
    pub name: String,
    pub description: String,
}

impl From<&GestureDefinition> for GestureDto {
    fn from(value: &GestureDefinition) -> Self {
        Self {
            name: value.name.to_string(),
            description: value.description.to_string(),
        }
    }
}

/// Everything the renderer needs to draw one hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandReport {
    /// As reported by the tracker.
    pub handedness: Option<Handedness>,
    /// As seen by the viewer.
    pub display_handedness: Option<Handedness>,
    pub score: Option<f32>,
    pub count: usize,
    pub fingers: FingerState,
    pub finger_lines: Vec<String>,
    pub gesture: Option<GestureDto>,
    pub label: Option<String>,
    pub label_anchor: Option<[f32; 2]>,
}

impl From<&HandResult> for HandReport {
    fn from(hand: &HandResult) -> Self {
        Self {
            handedness: hand.handedness,
            display_handedness: hand.handedness.map(Handedness::mirrored),
            score: hand.score,
            count: hand.count,
            fingers: hand.fingers,
            finger_lines: display::finger_lines(&hand.fingers),
            gesture: hand.gesture.as_ref().map(GestureDto::from),
            label: display::gesture_label(hand),
            label_anchor: hand.landmarks.map(|l| l.label_anchor().to_array()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub frame: u64,
    pub left: HandReport,
    pub right: HandReport,
    pub combined_count: usize,
    pub combined_description: Vec<String>,
}

impl FrameReport {
    pub fn new(frame: u64, result: &FrameResult) -> Self {
        Self {
            frame,
            left: HandReport::from(&result.left),
            right: HandReport::from(&result.right),
            combined_count: result.combined_count(),
            combined_description: display::combined_description(result),
        }
    }
}

impl Default for FrameReport {
    fn default() -> Self {
        Self::new(0, &FrameResult::default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    pub frames: u64,
    pub frames_per_second: f64,
    pub avg_processing_ms: f64,
}

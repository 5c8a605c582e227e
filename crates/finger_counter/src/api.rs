use std::sync::Arc;

use axum::{Json, Router};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tokio::sync::mpsc;

use finger_api::{ApiError, FrameReport, FrameStats, SetHandsRequest};
use finger_tracking::{Recognizer, TrackerSettings};

use crate::tracking::{Command, Snapshot};

pub struct ApiState {
    tx: mpsc::UnboundedSender<Command>,
    recognizer: Recognizer,
    snapshot: Arc<Snapshot>,
}

impl ApiState {
    pub fn new(tx: mpsc::UnboundedSender<Command>, recognizer: Recognizer, snapshot: Arc<Snapshot>) -> Arc<Self> {
        Arc::new(Self {
            tx,
            recognizer,
            snapshot,
        })
    }

    fn send(&self, command: Command) -> Result<(), ApiError> {
        self.tx.send(command).map_err(|_| ApiError::unavailable())
    }
}

async fn put_hands(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SetHandsRequest>,
) -> Result<StatusCode, ApiError> {
    let hands = request.into_detected()?;
    state.send(Command::SetHands(hands))?;
    Ok(StatusCode::ACCEPTED)
}

async fn post_classify(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SetHandsRequest>,
) -> Result<Json<FrameReport>, ApiError> {
    let hands = request.into_detected()?;
    let settings = state.snapshot.settings();
    let result = state.recognizer.process(&hands, &settings);
    Ok(Json(FrameReport::new(0, &result)))
}

async fn get_frame(State(state): State<Arc<ApiState>>) -> Json<FrameReport> {
    Json(state.snapshot.frame())
}

async fn get_stats(State(state): State<Arc<ApiState>>) -> Json<FrameStats> {
    Json(state.snapshot.stats())
}

async fn get_settings(State(state): State<Arc<ApiState>>) -> Json<TrackerSettings> {
    Json(state.snapshot.settings())
}

async fn put_settings(
    State(state): State<Arc<ApiState>>,
    Json(settings): Json<TrackerSettings>,
) -> Result<Json<TrackerSettings>, ApiError> {
    settings.validate()?;
    state.send(Command::SetSettings(settings))?;
    Ok(Json(settings))
}

pub fn new_api() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/v1/hands", put(put_hands))
        .route("/v1/classify", post(post_classify))
        .route("/v1/frame", get(get_frame))
        .route("/v1/stats", get(get_stats))
        .route("/v1/settings", get(get_settings).put(put_settings))
        .fallback(|| async { ApiError::not_found() })
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::mpsc;

use finger_api::{FrameReport, FrameStats};
use finger_tracking::{DetectedHand, Recognizer, TrackerSettings};

#[derive(Debug)]
pub enum Command {
    SetHands(Vec<DetectedHand>),
    SetSettings(TrackerSettings),
}

/// The latest results of the frame loop, read by the API.
#[derive(Default)]
pub struct Snapshot {
    frame: RwLock<FrameReport>,
    settings: RwLock<TrackerSettings>,
    stats: RwLock<FrameStats>,
}

impl Snapshot {
    pub fn frame(&self) -> FrameReport {
        self.frame.read().clone()
    }

    pub fn settings(&self) -> TrackerSettings {
        *self.settings.read()
    }

    pub fn stats(&self) -> FrameStats {
        *self.stats.read()
    }
}

#[derive(Debug, Default)]
pub struct StatsTracker {
    frames: u64,
    last_frame: Option<Instant>,
    frames_per_second: f64,
    total_processing: Duration,
}

impl StatsTracker {
    pub fn record(&mut self, at: Instant, processing: Duration) {
        if let Some(last) = self.last_frame {
            let interval = at.saturating_duration_since(last).as_secs_f64();
            if interval > 0.0 {
                self.frames_per_second = 1.0 / interval;
            }
        }
        self.last_frame = Some(at);
        self.frames += 1;
        self.total_processing += processing;
    }

    pub fn stats(&self) -> FrameStats {
        let avg_processing_ms = if self.frames == 0 {
            0.0
        } else {
            self.total_processing.as_secs_f64() * 1000.0 / self.frames as f64
        };
        FrameStats {
            frames: self.frames,
            frames_per_second: self.frames_per_second,
            avg_processing_ms,
        }
    }
}

/// Owns the tracker settings and processes frames one at a time, in the
/// order they were submitted.
pub struct FrameLoop {
    rx: mpsc::UnboundedReceiver<Command>,
    recognizer: Recognizer,
    settings: TrackerSettings,
    stats: StatsTracker,
    snapshot: Arc<Snapshot>,
}

impl FrameLoop {
    pub fn new(
        rx: mpsc::UnboundedReceiver<Command>,
        recognizer: Recognizer,
        settings: TrackerSettings,
        snapshot: Arc<Snapshot>,
    ) -> Self {
        *snapshot.settings.write() = settings;
        Self {
            rx,
            recognizer,
            settings,
            stats: StatsTracker::default(),
            snapshot,
        }
    }

    pub async fn run(mut self) {
        while let Some(command) = self.rx.recv().await {
            self.handle(command);
        }
        tracing::info!("frame loop stopped after {} frames", self.stats.frames);
    }

    /// Handles every command that is already queued.
    pub fn poll(&mut self) {
        while let Ok(command) = self.rx.try_recv() {
            self.handle(command);
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::SetHands(hands) => self.process_frame(&hands),
            Command::SetSettings(settings) => {
                tracing::info!(?settings, "tracker settings updated");
                self.settings = settings;
                *self.snapshot.settings.write() = settings;
            }
        }
    }

    fn process_frame(&mut self, hands: &[DetectedHand]) {
        let started = Instant::now();
        let result = self.recognizer.process(hands, &self.settings);
        self.stats.record(started, started.elapsed());

        let report = FrameReport::new(self.stats.frames, &result);
        let stats = self.stats.stats();
        if self.settings.debug {
            tracing::info!(
                frames = stats.frames,
                fps = stats.frames_per_second,
                avg_processing_ms = stats.avg_processing_ms,
                combined = report.combined_count,
                "frame processed",
            );
        }

        *self.snapshot.frame.write() = report;
        *self.snapshot.stats.write() = stats;
    }
}

pub fn frame_loop(recognizer: Recognizer, settings: TrackerSettings) -> (mpsc::UnboundedSender<Command>, Arc<Snapshot>, FrameLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    let snapshot = Arc::new(Snapshot::default());
    let frame_loop = FrameLoop::new(rx, recognizer, settings, snapshot.clone());
    (tx, snapshot, frame_loop)
}

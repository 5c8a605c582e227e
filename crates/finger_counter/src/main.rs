use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use finger_tracking::{GestureTable, Recognizer, TrackerSettings, DEFAULT_GESTURES};

mod api;
mod tracking;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    #[arg(long, default_value = "127.0.0.1:8888")]
    pub api_bind: String,
    /// JSON file with tracker settings; flags override its values.
    #[arg(long, short = 's')]
    pub settings: Option<PathBuf>,
    #[arg(long)]
    pub min_detection_confidence: Option<f32>,
    #[arg(long)]
    pub min_tracking_confidence: Option<f32>,
    #[arg(long, short = 'm')]
    pub model_complexity: Option<u8>,
    #[arg(long, short = 'n')]
    pub max_num_hands: Option<usize>,
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl Options {
    fn tracker_settings(&self) -> anyhow::Result<TrackerSettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let src = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings from {}", path.display()))?;
                serde_json::from_str::<TrackerSettings>(&src)
                    .with_context(|| format!("invalid settings in {}", path.display()))?
            }
            None => TrackerSettings::default(),
        };

        if let Some(value) = self.min_detection_confidence {
            settings.min_detection_confidence = value;
        }
        if let Some(value) = self.min_tracking_confidence {
            settings.min_tracking_confidence = value;
        }
        if let Some(value) = self.model_complexity {
            settings.model_complexity = value;
        }
        if let Some(value) = self.max_num_hands {
            settings.max_num_hands = value;
        }
        settings.debug |= self.debug;

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    let settings = options.tracker_settings()?;
    let level = if settings.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let gestures = GestureTable::new(DEFAULT_GESTURES)?;
    let recognizer = Recognizer::new(Default::default(), gestures);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(options.api_bind, recognizer, settings))
}

async fn serve(api_bind: String, recognizer: Recognizer, settings: TrackerSettings) -> anyhow::Result<()> {
    let (tx, snapshot, frame_loop) = tracking::frame_loop(recognizer.clone(), settings);
    let api_state = api::ApiState::new(tx, recognizer, snapshot);
    let frame_task = tokio::spawn(frame_loop.run());

    let listener = tokio::net::TcpListener::bind(&api_bind).await
        .with_context(|| format!("failed to bind API to {}", api_bind))?;
    tracing::info!("serving API on {}", api_bind);

    let app = api::new_api().with_state(api_state);
    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await {
        tracing::error!("failed to serve API: {}", err);
    }

    // The router owned the last sender.
    frame_task.await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", err);
    }
}

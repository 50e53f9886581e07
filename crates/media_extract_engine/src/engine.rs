use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use thiserror::Error;

use crate::download::SimulatedDownloader;
use crate::extract::{Extractor, MockExtractor};
use crate::glitch::GlitchTicker;
use crate::settings::{ExtractorSettings, SettingsError};
use crate::types::{ChannelEventSink, EngineCommand, EngineEvent, EventSink};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] io::Error),
}

/// Runs effects on a private tokio runtime and reports back through events.
///
/// Dropping the handle closes the command channel; the engine thread then
/// stops the glitch ticker and shuts its runtime down, abandoning any timers
/// still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Option<mpsc::Receiver<EngineEvent>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    /// Engine with the mock extractor, polled through [`EngineHandle::recv_timeout`].
    pub fn new(settings: ExtractorSettings, glitch_enabled: bool) -> Result<Self, EngineError> {
        let extractor = Arc::new(MockExtractor::new(settings.clone()));
        Self::with_extractor(settings, glitch_enabled, extractor)
    }

    pub fn with_extractor(
        settings: ExtractorSettings,
        glitch_enabled: bool,
        extractor: Arc<dyn Extractor>,
    ) -> Result<Self, EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));
        let mut handle = Self::with_sink(settings, glitch_enabled, extractor, sink)?;
        handle.event_rx = Some(event_rx);
        Ok(handle)
    }

    /// Engine that pushes every event into `sink`; `recv_timeout` always yields `None`.
    pub fn with_sink(
        settings: ExtractorSettings,
        glitch_enabled: bool,
        extractor: Arc<dyn Extractor>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        settings.validate()?;

        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let downloader = SimulatedDownloader::new(settings.download_latency);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("media-extract-rt")
            .enable_time()
            .build()
            .map_err(EngineError::Runtime)?;

        let worker = thread::Builder::new()
            .name("media-extract-engine".to_string())
            .spawn(move || {
                let _ticker = glitch_enabled.then(|| {
                    let _guard = runtime.enter();
                    GlitchTicker::spawn(settings.glitch_period, settings.glitch_pulse, sink.clone())
                });

                while let Ok(command) = cmd_rx.recv() {
                    let extractor = extractor.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(extractor.as_ref(), downloader, command, sink.as_ref()).await;
                    });
                }
                engine_info!("Engine command channel closed; shutting down");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            event_rx: None,
            worker: Some(worker),
        })
    }

    pub fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.as_ref()?.recv_timeout(timeout).ok()
    }

    /// Close the command channel and wait for the engine thread to exit.
    pub fn shutdown(mut self) {
        let worker = self.worker.take();
        drop(self);
        if let Some(worker) = worker {
            let _ = worker.join();
        }
    }
}

async fn handle_command(
    extractor: &dyn Extractor,
    downloader: SimulatedDownloader,
    command: EngineCommand,
    sink: &dyn EventSink,
) {
    match command {
        EngineCommand::Extract { generation, urls } => {
            engine_info!(
                "Extract generation={} url_count={}",
                generation,
                urls.len()
            );
            let records = match extractor.extract(&urls).await {
                Ok(records) => records,
                Err(err) => {
                    // Still report completion so the UI leaves the extracting phase.
                    engine_warn!("Extraction generation={} rejected: {}", generation, err);
                    Vec::new()
                }
            };
            sink.emit(EngineEvent::ExtractionCompleted {
                generation,
                records,
            });
        }
        EngineCommand::Download {
            record_id,
            kind,
            platform,
        } => {
            engine_info!("Download record_id={} kind={} platform={}", record_id, kind, platform);
            downloader.download(&record_id).await;
            sink.emit(EngineEvent::DownloadCompleted {
                record_id,
                kind,
                platform,
            });
        }
    }
}

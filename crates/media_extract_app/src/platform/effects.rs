use std::sync::{mpsc, Arc};

use engine_logging::engine_info;
use media_extract_core::{Effect, Msg};
use media_extract_engine::{
    EngineCommand, EngineError, EngineEvent, EngineHandle, EventSink, ExtractorSettings,
    MockExtractor,
};

use super::app::AppInput;

/// Turns `update` effects into engine commands and engine events back into `Msg`s.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: ExtractorSettings,
        glitch_enabled: bool,
        input_tx: mpsc::Sender<AppInput>,
    ) -> Result<Self, EngineError> {
        let extractor = Arc::new(MockExtractor::new(settings.clone()));
        let sink = Arc::new(MsgSink { tx: input_tx });
        let engine = EngineHandle::with_sink(settings, glitch_enabled, extractor, sink)?;
        Ok(Self { engine })
    }

    /// Execute `effects`; returns notices to show the user.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartExtraction { generation, urls } => {
                    engine_info!(
                        "StartExtraction generation={} url_count={}",
                        generation,
                        urls.len()
                    );
                    self.engine
                        .send(EngineCommand::Extract { generation, urls });
                }
                Effect::SimulateDownload {
                    record_id,
                    kind,
                    platform,
                } => {
                    self.engine.send(EngineCommand::Download {
                        record_id,
                        kind,
                        platform,
                    });
                }
                Effect::Notify { message } => notices.push(message),
            }
        }
        notices
    }

    pub fn shutdown(self) {
        self.engine.shutdown();
    }
}

struct MsgSink {
    tx: mpsc::Sender<AppInput>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppInput::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ExtractionCompleted {
            generation,
            records,
        } => Msg::ExtractionFinished {
            generation,
            records,
        },
        EngineEvent::DownloadCompleted {
            record_id,
            kind,
            platform,
        } => Msg::DownloadFinished {
            record_id,
            kind,
            platform,
        },
        EngineEvent::GlitchStarted => Msg::GlitchStarted,
        EngineEvent::GlitchEnded => Msg::GlitchEnded,
    }
}

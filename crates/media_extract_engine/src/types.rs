use std::sync::mpsc;

use media_extract_core::{Generation, MediaKind, MediaRecord, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Extract {
        generation: Generation,
        urls: Vec<String>,
    },
    Download {
        record_id: String,
        kind: MediaKind,
        platform: Platform,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ExtractionCompleted {
        generation: Generation,
        records: Vec<MediaRecord>,
    },
    DownloadCompleted {
        record_id: String,
        kind: MediaKind,
        platform: Platform,
    },
    GlitchStarted,
    GlitchEnded,
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

#[derive(Clone)]
pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

impl<T: EventSink + ?Sized> EventSink for std::sync::Arc<T> {
    fn emit(&self, event: EngineEvent) {
        (**self).emit(event);
    }
}

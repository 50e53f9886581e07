use crate::{Generation, InputMode, MediaKind, MediaRecord, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked single- or multi-link mode.
    ModeSelected(InputMode),
    /// User asked for another input row.
    EntryAdded,
    /// User edited the input row at `position`.
    EntryChanged { position: usize, value: String },
    /// User removed the input row at `position`.
    EntryRemoved { position: usize },
    /// User clicked Clear All.
    ClearClicked,
    /// User clicked Execute Extraction.
    ExtractClicked,
    /// Engine finished a mock extraction.
    ExtractionFinished {
        generation: Generation,
        records: Vec<MediaRecord>,
    },
    /// User clicked Download on a result card.
    DownloadClicked { record_id: String },
    /// Engine finished a simulated download.
    DownloadFinished {
        record_id: String,
        kind: MediaKind,
        platform: Platform,
    },
    /// Title glitch pulse started.
    GlitchStarted,
    /// Title glitch pulse ended.
    GlitchEnded,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

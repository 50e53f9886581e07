use crate::{Generation, MediaKind, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the mock extractor over `urls` and report back with `generation`.
    StartExtraction {
        generation: Generation,
        urls: Vec<String>,
    },
    /// Simulate downloading one media record.
    SimulateDownload {
        record_id: String,
        kind: MediaKind,
        platform: Platform,
    },
    /// Show a blocking notice to the user.
    Notify { message: String },
}

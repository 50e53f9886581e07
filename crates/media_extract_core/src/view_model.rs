use crate::{InputMode, MediaKind, Platform};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub mode: InputMode,
    pub entries: Vec<EntryRowView>,
    pub can_add: bool,
    pub can_extract: bool,
    pub extracting: bool,
    pub results: Vec<MediaCardView>,
    pub glitch: bool,
    pub dirty: bool,
}

impl AppViewModel {
    /// Headline shown above the result grid, if there are results.
    pub fn results_summary(&self) -> Option<String> {
        match self.results.len() {
            0 => None,
            1 => Some("EXTRACTION_COMPLETE: 1 MEDIA FILE FOUND".to_string()),
            n => Some(format!("EXTRACTION_COMPLETE: {n} MEDIA FILES FOUND")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    pub position: usize,
    pub value: String,
    /// Badge for non-empty entries.
    pub platform: Option<Platform>,
    pub can_remove: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCardView {
    pub record_id: String,
    pub platform: Platform,
    pub kind: MediaKind,
    pub thumbnail: String,
    pub display_url: String,
    pub original_url: String,
    pub downloading: bool,
}

use std::fmt;

use crate::Platform;

/// Longest source URL shown on a card before it is shortened.
pub const CARD_URL_MAX_CHARS: usize = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fabricated extraction result. Immutable once produced by an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub id: String,
    pub url: String,
    pub kind: MediaKind,
    pub thumbnail: String,
    pub platform: Platform,
    pub original_url: String,
}

/// Shorten `url` to [`CARD_URL_MAX_CHARS`] characters plus `...` when longer.
pub fn card_display_url(url: &str) -> String {
    match url.char_indices().nth(CARD_URL_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &url[..cut]),
        None => url.to_string(),
    }
}

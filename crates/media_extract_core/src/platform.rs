use std::fmt;

/// Social network inferred from a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Instagram,
    XTwitter,
    TikTok,
    YouTube,
    Facebook,
    Pinterest,
    Reddit,
    Unknown,
}

/// Domain markers per platform, in detection priority order.
const DOMAIN_MARKERS: &[(Platform, &[&str])] = &[
    (Platform::Instagram, &["instagram.com", "instagr.am"]),
    (Platform::XTwitter, &["twitter.com", "x.com"]),
    (Platform::TikTok, &["tiktok.com"]),
    (Platform::YouTube, &["youtube.com", "youtu.be"]),
    (Platform::Facebook, &["facebook.com", "fb.com"]),
    (Platform::Pinterest, &["pinterest.com"]),
    (Platform::Reddit, &["reddit.com"]),
];

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::XTwitter => "X/Twitter",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Pinterest => "Pinterest",
            Platform::Reddit => "Reddit",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the platform of `url` by plain substring containment.
///
/// Matching is case-sensitive and performs no normalization. A URL that
/// contains markers for several platforms resolves to the first one in
/// priority order: Instagram, X/Twitter, TikTok, YouTube, Facebook, Pinterest,
/// Reddit.
pub fn detect_platform(url: &str) -> Platform {
    DOMAIN_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| url.contains(marker)))
        .map(|(platform, _)| *platform)
        .unwrap_or(Platform::Unknown)
}

use std::sync::Arc;

use engine_logging::engine_debug;
use media_extract_core::{detect_platform, MediaKind, MediaRecord};
use thiserror::Error;

use crate::random::{RandomSource, ThreadRandom};
use crate::settings::ExtractorSettings;

/// Millisecond wall clock used to seed record ids and thumbnails.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no non-empty url to extract")]
    EmptyInput,
}

#[async_trait::async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, urls: &[String]) -> Result<Vec<MediaRecord>, ExtractError>;
}

/// Fabricates media records after a randomized delay. Performs no I/O.
pub struct MockExtractor {
    settings: ExtractorSettings,
    random: Arc<dyn RandomSource>,
    clock: Clock,
}

impl MockExtractor {
    pub fn new(settings: ExtractorSettings) -> Self {
        Self {
            settings,
            random: Arc::new(ThreadRandom),
            clock: Arc::new(|| chrono::Utc::now().timestamp_millis()),
        }
    }

    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build one record per url without waiting.
    ///
    /// Blank urls are skipped; indices (and so seeds) count only kept urls.
    pub fn synthesize(&self, urls: &[String], timestamp_ms: i64) -> Vec<MediaRecord> {
        urls.iter()
            .filter(|url| !url.trim().is_empty())
            .enumerate()
            .map(|(index, url)| {
                let kind = if self.random.coin_flip() {
                    MediaKind::Video
                } else {
                    MediaKind::Image
                };
                let seed = timestamp_ms.saturating_add(index as i64);
                MediaRecord {
                    id: format!("media-{timestamp_ms}-{index}"),
                    url: url.clone(),
                    kind,
                    thumbnail: self.settings.thumbnail_url(seed),
                    platform: detect_platform(url),
                    original_url: url.clone(),
                }
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl Extractor for MockExtractor {
    async fn extract(&self, urls: &[String]) -> Result<Vec<MediaRecord>, ExtractError> {
        if !urls.iter().any(|url| !url.trim().is_empty()) {
            return Err(ExtractError::EmptyInput);
        }
        let latency = self.settings.latency_for(self.random.unit());
        engine_debug!(
            "Mock extraction of {} url(s) sleeping {:?}",
            urls.len(),
            latency
        );
        tokio::time::sleep(latency).await;

        let timestamp_ms = (self.clock)();
        Ok(self.synthesize(urls, timestamp_ms))
    }
}

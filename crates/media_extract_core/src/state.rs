use std::collections::BTreeSet;

use crate::collector::LinkCollector;
use crate::media::card_display_url;
use crate::view_model::{AppViewModel, EntryRowView, MediaCardView};
use crate::{detect_platform, MediaRecord};

/// Monotonic extraction counter; completions carrying an older value are stale.
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Single,
    Multiple,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Single => "SINGLE",
            InputMode::Multiple => "MULTIPLE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionPhase {
    #[default]
    Idle,
    Extracting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mode: InputMode,
    links: LinkCollector,
    results: Vec<MediaRecord>,
    phase: ExtractionPhase,
    generation: Generation,
    downloading: BTreeSet<String>,
    /// Downloads still running in the engine, including ones whose card was discarded.
    pending_downloads: usize,
    glitch: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn links(&self) -> &LinkCollector {
        &self.links
    }

    pub fn results(&self) -> &[MediaRecord] {
        &self.results
    }

    pub fn phase(&self) -> ExtractionPhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_downloading(&self, record_id: &str) -> bool {
        self.downloading.contains(record_id)
    }

    /// True while an extraction or any download is still pending.
    pub fn is_busy(&self) -> bool {
        self.phase == ExtractionPhase::Extracting || self.pending_downloads > 0
    }

    pub fn view(&self) -> AppViewModel {
        let can_remove = self.links.can_remove();
        let entries = self
            .links
            .entries()
            .iter()
            .enumerate()
            .map(|(position, value)| EntryRowView {
                position,
                value: value.clone(),
                platform: (!value.is_empty()).then(|| detect_platform(value)),
                can_remove,
            })
            .collect();

        let results = self
            .results
            .iter()
            .map(|record| MediaCardView {
                record_id: record.id.clone(),
                platform: record.platform,
                kind: record.kind,
                thumbnail: record.thumbnail.clone(),
                display_url: card_display_url(&record.original_url),
                original_url: record.original_url.clone(),
                downloading: self.downloading.contains(&record.id),
            })
            .collect();

        let extracting = self.phase == ExtractionPhase::Extracting;
        AppViewModel {
            mode: self.mode,
            entries,
            can_add: self.mode == InputMode::Multiple,
            can_extract: !extracting && self.links.has_valid_link(),
            extracting,
            results,
            glitch: self.glitch,
            dirty: self.dirty,
        }
    }

    /// Returns whether state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn links_mut(&mut self) -> &mut LinkCollector {
        &mut self.links
    }

    /// Switch input mode, resetting entries and discarding results.
    pub(crate) fn select_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.links.clear();
        self.discard_results();
        self.mark_dirty();
    }

    pub(crate) fn clear_all(&mut self) {
        self.links.clear();
        self.discard_results();
        self.mark_dirty();
    }

    /// Enter the extracting phase for a fresh generation and drop shown results.
    pub(crate) fn begin_extraction(&mut self) -> Generation {
        self.generation += 1;
        self.phase = ExtractionPhase::Extracting;
        self.discard_results();
        self.mark_dirty();
        self.generation
    }

    /// Apply a finished extraction. Returns `false` for a stale generation.
    pub(crate) fn finish_extraction(
        &mut self,
        generation: Generation,
        records: Vec<MediaRecord>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = ExtractionPhase::Idle;
        self.results = records;
        self.mark_dirty();
        true
    }

    /// Flag `record_id` as downloading. Returns the record when the click counts.
    pub(crate) fn start_download(&mut self, record_id: &str) -> Option<&MediaRecord> {
        if self.downloading.contains(record_id) {
            return None;
        }
        let record = self.results.iter().find(|record| record.id == record_id)?;
        self.downloading.insert(record_id.to_string());
        self.pending_downloads += 1;
        self.dirty = true;
        Some(record)
    }

    pub(crate) fn finish_download(&mut self, record_id: &str) {
        self.pending_downloads = self.pending_downloads.saturating_sub(1);
        if self.downloading.remove(record_id) {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_glitch(&mut self, glitch: bool) {
        if self.glitch != glitch {
            self.glitch = glitch;
            self.mark_dirty();
        }
    }

    fn discard_results(&mut self) {
        self.results.clear();
        self.downloading.clear();
    }
}

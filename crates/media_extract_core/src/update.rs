use engine_logging::{engine_debug, engine_info};

use crate::{AppState, Effect, ExtractionPhase, InputMode, MediaKind, Msg, Platform};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            state.select_mode(mode);
            Vec::new()
        }
        Msg::EntryAdded => {
            if state.mode() == InputMode::Multiple {
                state.links_mut().add();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EntryChanged { position, value } => {
            if state.links_mut().update(position, value) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EntryRemoved { position } => {
            if state.links_mut().remove(position) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClearClicked => {
            state.clear_all();
            Vec::new()
        }
        Msg::ExtractClicked => {
            // The trigger is disabled while extracting or when nothing was typed.
            if state.phase() == ExtractionPhase::Extracting {
                return (state, Vec::new());
            }
            let urls = state.links().valid_links();
            if urls.is_empty() {
                return (state, Vec::new());
            }
            let generation = state.begin_extraction();
            engine_debug!(
                "Extraction started generation={} url_count={}",
                generation,
                urls.len()
            );
            vec![Effect::StartExtraction { generation, urls }]
        }
        Msg::ExtractionFinished {
            generation,
            records,
        } => {
            let count = records.len();
            if state.finish_extraction(generation, records) {
                engine_debug!(
                    "Extraction finished generation={} records={}",
                    generation,
                    count
                );
            } else {
                engine_info!(
                    "Dropping stale extraction generation={} current={}",
                    generation,
                    state.generation()
                );
            }
            Vec::new()
        }
        Msg::DownloadClicked { record_id } => match state.start_download(&record_id) {
            Some(record) => vec![Effect::SimulateDownload {
                record_id: record.id.clone(),
                kind: record.kind,
                platform: record.platform,
            }],
            None => Vec::new(),
        },
        Msg::DownloadFinished {
            record_id,
            kind,
            platform,
        } => {
            state.finish_download(&record_id);
            vec![Effect::Notify {
                message: download_notice(kind, platform),
            }]
        }
        Msg::GlitchStarted => {
            state.set_glitch(true);
            Vec::new()
        }
        Msg::GlitchEnded => {
            state.set_glitch(false);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Message reported when a simulated download completes.
pub fn download_notice(kind: MediaKind, platform: Platform) -> String {
    format!("Download simulated for {kind} from {platform}")
}

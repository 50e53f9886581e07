//! Media extract core: pure state machine, platform detection and view-model helpers.
mod collector;
mod effect;
mod media;
mod msg;
mod platform;
mod state;
mod update;
mod view_model;

pub use collector::LinkCollector;
pub use effect::Effect;
pub use media::{card_display_url, MediaKind, MediaRecord, CARD_URL_MAX_CHARS};
pub use msg::Msg;
pub use platform::{detect_platform, Platform};
pub use state::{AppState, ExtractionPhase, Generation, InputMode};
pub use update::{download_notice, update};
pub use view_model::{AppViewModel, EntryRowView, MediaCardView};

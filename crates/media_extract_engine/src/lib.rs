//! Media extract engine: simulated extraction, downloads and UI timers.
mod download;
mod engine;
mod extract;
mod glitch;
mod random;
mod settings;
mod types;

pub use download::SimulatedDownloader;
pub use engine::{EngineError, EngineHandle};
pub use extract::{Clock, ExtractError, Extractor, MockExtractor};
pub use glitch::GlitchTicker;
pub use random::{FixedSequence, RandomSource, ThreadRandom};
pub use settings::{ExtractorSettings, SettingsError};
pub use types::{ChannelEventSink, EngineCommand, EngineEvent, EventSink};

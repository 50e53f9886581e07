use std::time::Duration;

use engine_logging::engine_trace;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, EventSink};

/// Periodic cosmetic title glitch. Stops when dropped.
pub struct GlitchTicker {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl GlitchTicker {
    /// Spawn on the current tokio runtime. The first pulse fires one `period`
    /// after spawning; each pulse lasts `pulse`.
    pub fn spawn<S>(period: Duration, pulse: Duration, sink: S) -> Self
    where
        S: EventSink + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {}
                }
                engine_trace!("Title glitch pulse");
                sink.emit(EngineEvent::GlitchStarted);
                tokio::select! {
                    _ = token.cancelled() => {
                        sink.emit(EngineEvent::GlitchEnded);
                        break;
                    }
                    _ = tokio::time::sleep(pulse) => {}
                }
                sink.emit(EngineEvent::GlitchEnded);
            }
        });
        Self { cancel, task }
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for GlitchTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

use std::time::Duration;

use engine_logging::engine_debug;

/// Pretends to download a record: waits a fixed interval, transfers nothing.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedDownloader {
    latency: Duration,
}

impl SimulatedDownloader {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Always succeeds once the latency has elapsed.
    pub async fn download(&self, record_id: &str) {
        engine_debug!("Simulating download of {} for {:?}", record_id, self.latency);
        tokio::time::sleep(self.latency).await;
    }
}

use std::sync::{Arc, Mutex};
use std::time::Duration;

use media_extract_engine::{EngineEvent, EventSink, GlitchTicker};
use pretty_assertions::assert_eq;

#[derive(Clone, Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn snapshot(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

const PERIOD: Duration = Duration::from_secs(5);
const PULSE: Duration = Duration::from_millis(200);

#[tokio::test(start_paused = true)]
async fn pulses_once_per_period() {
    let sink = TestSink::default();
    let _ticker = GlitchTicker::spawn(PERIOD, PULSE, sink.clone());

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert!(sink.snapshot().is_empty());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(sink.snapshot(), vec![EngineEvent::GlitchStarted]);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(
        sink.snapshot(),
        vec![EngineEvent::GlitchStarted, EngineEvent::GlitchEnded]
    );

    tokio::time::sleep(Duration::from_secs(10)).await;
    let started = sink
        .snapshot()
        .iter()
        .filter(|event| **event == EngineEvent::GlitchStarted)
        .count();
    assert_eq!(started, 3);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_ticker_stops_it() {
    let sink = TestSink::default();
    let ticker = GlitchTicker::spawn(PERIOD, PULSE, sink.clone());

    tokio::time::sleep(Duration::from_millis(5500)).await;
    assert_eq!(sink.snapshot().len(), 2);

    drop(ticker);
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(sink.snapshot().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn stop_mid_pulse_still_ends_the_glitch() {
    let sink = TestSink::default();
    let ticker = GlitchTicker::spawn(PERIOD, PULSE, sink.clone());

    tokio::time::sleep(Duration::from_millis(5100)).await;
    ticker.stop();
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert!(ticker.is_finished());
    assert_eq!(
        sink.snapshot(),
        vec![EngineEvent::GlitchStarted, EngineEvent::GlitchEnded]
    );
}

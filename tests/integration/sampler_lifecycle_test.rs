use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sysglance::core::sampler::{MetricsSampler, Sample, SampleSource};
use sysglance::ui::{WindowEvent, WindowLifecycle, WindowState};

const TEST_INTERVAL: Duration = Duration::from_millis(10);

struct CountingSource {
    collected: Arc<AtomicI64>,
}

impl CountingSource {
    fn new() -> (Self, Arc<AtomicI64>) {
        let collected = Arc::new(AtomicI64::new(0));
        (
            Self {
                collected: Arc::clone(&collected),
            },
            collected,
        )
    }
}

impl SampleSource for CountingSource {
    fn sample(&mut self) -> Sample {
        let seq = self.collected.fetch_add(1, Ordering::SeqCst);
        Sample {
            timestamp: seq,
            ..Sample::default()
        }
    }
}

#[test]
fn minimize_and_restore_drive_the_sampler() {
    let (source, collected) = CountingSource::new();
    let mut sampler = MetricsSampler::with_interval(Box::new(source), TEST_INTERVAL);
    let mut lifecycle = WindowLifecycle::new();

    let samples = sampler.start().expect("start sampler");
    samples
        .recv_timeout(Duration::from_secs(1))
        .expect("first sample");

    lifecycle.handle(WindowEvent::Minimized, &sampler);
    assert_eq!(lifecycle.state(), WindowState::Minimized);

    // Let an in-flight cycle finish, then confirm collection has stopped
    // while the clock keeps ticking.
    std::thread::sleep(TEST_INTERVAL * 3);
    let settled = collected.load(Ordering::SeqCst);
    std::thread::sleep(TEST_INTERVAL * 10);
    assert_eq!(collected.load(Ordering::SeqCst), settled);

    lifecycle.handle(WindowEvent::Restored, &sampler);
    assert_eq!(lifecycle.state(), WindowState::Active);
    samples
        .recv_timeout(Duration::from_secs(1))
        .expect("sample after restore");

    sampler.stop();
}

#[test]
fn shutdown_stops_collection_for_good() {
    let (source, collected) = CountingSource::new();
    let mut sampler = MetricsSampler::with_interval(Box::new(source), TEST_INTERVAL);

    let samples = sampler.start().expect("start sampler");
    samples
        .recv_timeout(Duration::from_secs(1))
        .expect("first sample");

    sampler.stop();

    let after_stop = collected.load(Ordering::SeqCst);
    std::thread::sleep(TEST_INTERVAL * 10);
    assert_eq!(collected.load(Ordering::SeqCst), after_stop);
}

#[test]
fn samples_arrive_in_collection_order() {
    let (source, _) = CountingSource::new();
    let mut sampler = MetricsSampler::with_interval(Box::new(source), TEST_INTERVAL);

    let samples = sampler.start().expect("start sampler");

    let mut previous = -1;
    for _ in 0..5 {
        let sample = samples
            .recv_timeout(Duration::from_secs(1))
            .expect("ordered sample");
        assert!(sample.timestamp > previous);
        previous = sample.timestamp;
    }

    sampler.stop();
}

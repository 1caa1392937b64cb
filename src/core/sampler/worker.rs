use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::error::{GlanceError, Result};

use super::collector::SampleSource;
use super::sample::Sample;

/// Default polling cadence of the sampler.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Background worker that samples metrics on a fixed cadence.
///
/// The worker runs on a dedicated thread, distinct from the UI thread, and is
/// the only place that performs blocking I/O. Each cycle it asks its
/// [`SampleSource`] for a [`Sample`] and sends it over an mpsc channel, so
/// samples reach the UI thread in collection order with exactly one in flight.
///
/// While paused the timer keeps ticking but nothing is collected or emitted;
/// the first sample after a resume is therefore a fresh reading, not a
/// buffered one.
pub struct MetricsSampler {
    interval: Duration,
    paused: Arc<AtomicBool>,
    source: Option<Box<dyn SampleSource>>,
    shutdown_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MetricsSampler {
    pub fn new(source: Box<dyn SampleSource>) -> Self {
        Self::with_interval(source, DEFAULT_INTERVAL)
    }

    pub fn with_interval(source: Box<dyn SampleSource>, interval: Duration) -> Self {
        Self {
            interval,
            paused: Arc::new(AtomicBool::new(false)),
            source: Some(source),
            shutdown_tx: None,
            handle: None,
        }
    }

    /// Spawn the sampler thread and return the sample receiver.
    ///
    /// Does not block; the first sample is collected immediately, then one per
    /// interval. Starting an already started sampler is an error.
    pub fn start(&mut self) -> Result<Receiver<Sample>> {
        let mut source = self
            .source
            .take()
            .ok_or_else(|| GlanceError::sampler("sampler already started"))?;

        let (sample_tx, sample_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let paused = Arc::clone(&self.paused);
        let interval = self.interval;

        let handle = std::thread::Builder::new()
            .name("metrics-sampler".to_string())
            .spawn(move || loop {
                if !paused.load(Ordering::Acquire) {
                    if sample_tx.send(source.sample()).is_err() {
                        log::debug!("sample receiver dropped, stopping sampler");
                        break;
                    }
                }

                // The tick doubles as the shutdown wait so stop() interrupts a
                // sleeping worker promptly.
                match shutdown_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        log::info!(
            "metrics sampler started, polling every {} ms",
            interval.as_millis()
        );

        self.shutdown_tx = Some(shutdown_tx);
        self.handle = Some(handle);

        Ok(sample_rx)
    }

    /// Suspend collection without stopping the timer.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
        log::debug!("sampler paused");
    }

    /// Resume collection on the next tick.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        log::debug!("sampler resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Signal the worker to terminate and block until its thread has exited.
    ///
    /// Safe to call more than once; after the first call returns no further
    /// sample will ever be emitted.
    pub fn stop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            // Fails only if the worker already exited on its own
            let _ = shutdown_tx.send(());
        }

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("sampler thread panicked");
            } else {
                log::info!("metrics sampler stopped");
            }
        }
    }
}

impl Drop for MetricsSampler {
    fn drop(&mut self) {
        self.stop();
    }
}

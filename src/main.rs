use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use sysglance::core::sampler::{MetricsSampler, SampleCollector};
use sysglance::ui::display;

fn main() -> Result<()> {
    sysglance::init_logging();

    let collector = SampleCollector::new();
    let mut sampler = MetricsSampler::new(Box::new(collector));
    let samples = sampler.start().context("Failed to start metrics sampler")?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })
        .context("Failed to install shutdown handler")?;
    }

    // UI thread: apply samples in arrival order, one at a time. The short
    // timeout keeps the shutdown flag responsive between ticks.
    while running.load(Ordering::SeqCst) {
        match samples.recv_timeout(Duration::from_millis(200)) {
            Ok(sample) => println!("{}", display::render_sample(&sample)),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    sampler.stop();

    Ok(())
}

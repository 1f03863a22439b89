use std::time::Instant;

use tracing::{debug, debug_span};

/// Runs work on the UI thread (file reads, sqlite) and logs how long it took.
pub fn run_blocking<F, T>(task: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let _span = debug_span!("blocking", task).entered();
    let started = Instant::now();
    let output = f();
    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "finished");
    output
}

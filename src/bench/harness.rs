use std::time::Instant;

use log::{error, info, warn};

use crate::backend::Backend;
use crate::core::BenchError;
use crate::dataset::Dataset;

use super::executor::Executor;
use super::{Mode, RunReport, RunStats};

/// Times one mode invocation: backend open, batch work and close.
pub struct Harness<'a> {
    dataset: &'a Dataset,
    mode: Mode,
}

impl<'a> Harness<'a> {
    pub fn new(dataset: &'a Dataset, mode: Mode) -> Self {
        Self { dataset, mode }
    }

    /// Run the mode against the backend produced by `open`, reporting it as `backend`.
    ///
    /// The backend is closed whether or not the batch succeeded, and the
    /// elapsed time is recorded in every case, including a failed open.
    pub fn run<F>(&self, backend: &'static str, open: F) -> RunReport
    where
        F: FnOnce() -> Result<Box<dyn Backend>, BenchError>,
    {
        let start = Instant::now();

        let mut handle = match open() {
            Ok(handle) => handle,
            Err(e) => {
                log_failure(&e);
                return self.report(backend, start, Err(e), Ok(()));
            }
        };

        info!(
            "start {} {} test over {} keys",
            backend,
            self.mode,
            self.dataset.len()
        );
        let outcome = Executor::new(handle.as_mut(), self.dataset).run(self.mode);
        if let Err(e) = &outcome {
            log_failure(e);
        }

        let close = handle.close();
        if let Err(e) = &close {
            warn!("{e}");
        }

        self.report(backend, start, outcome, close)
    }

    fn report(
        &self,
        backend: &'static str,
        start: Instant,
        outcome: Result<RunStats, BenchError>,
        close: Result<(), BenchError>,
    ) -> RunReport {
        let elapsed = start.elapsed();
        info!("all scan time cost {elapsed:?}");
        RunReport {
            backend,
            mode: self.mode,
            elapsed,
            outcome,
            close,
        }
    }
}

fn log_failure(err: &BenchError) {
    if err.is_verification() {
        error!("verification failed: {err}");
    } else {
        error!("{err}");
    }
}

use std::time::Instant;

use log::{debug, info};

use crate::backend::Backend;
use crate::core::BenchError;
use crate::dataset::Dataset;

use super::verify::verify;
use super::{Mode, PhaseStats, RunStats};

/// Drives a dataset through a backend, one key at a time.
pub struct Executor<'a> {
    backend: &'a mut dyn Backend,
    dataset: &'a Dataset,
}

impl<'a> Executor<'a> {
    pub fn new(backend: &'a mut dyn Backend, dataset: &'a Dataset) -> Self {
        Self { backend, dataset }
    }

    pub fn run(&mut self, mode: Mode) -> Result<RunStats, BenchError> {
        let mut stats = RunStats::default();
        if mode.writes() {
            stats.write = Some(self.write_all()?);
        }
        if mode.reads() {
            stats.read = Some(self.read_all()?);
        }
        Ok(stats)
    }

    /// Write every entry. Stops at the first failure.
    pub fn write_all(&mut self) -> Result<PhaseStats, BenchError> {
        let start = Instant::now();
        for entry in self.dataset {
            self.backend.write(&entry.key, &entry.value)?;
        }
        let phase = PhaseStats {
            ops: self.dataset.len(),
            elapsed: start.elapsed(),
        };
        info!(
            "{} stored {} keys in {:?}",
            self.backend.name(),
            phase.ops,
            phase.elapsed
        );
        Ok(phase)
    }

    /// Read every entry back and verify it. Stops at the first missing key or mismatch.
    pub fn read_all(&mut self) -> Result<PhaseStats, BenchError> {
        let start = Instant::now();
        for entry in self.dataset {
            let actual = self.backend.read(&entry.key)?;
            debug!("{} -> {:?}", entry.key, actual);
            verify(&entry.key, &entry.value, actual.as_deref())?;
        }
        let phase = PhaseStats {
            ops: self.dataset.len(),
            elapsed: start.elapsed(),
        };
        info!(
            "{} verified {} keys in {:?}",
            self.backend.name(),
            phase.ops,
            phase.elapsed
        );
        Ok(phase)
    }
}

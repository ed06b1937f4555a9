//! Test and benchmark utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use tempfile::TempDir;

use crate::backend::Backend;
use crate::conf::Config;
use crate::core::BenchError;

/// HashMap-backed backend with call counters and injectable failures.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: HashMap<String, String>,
    writes: usize,
    reads: usize,
    fail_writes_after: Option<usize>,
    fail_close: bool,
    closed: Rc<Cell<bool>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write once `n` writes have succeeded.
    pub fn fail_writes_after(mut self, n: usize) -> Self {
        self.fail_writes_after = Some(n);
        self
    }

    pub fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// Shared flag set when `close` is called; survives the backend being moved or dropped.
    pub fn closed_flag(&self) -> Rc<Cell<bool>> {
        self.closed.clone()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Backend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), BenchError> {
        if self.fail_writes_after.is_some_and(|n| self.writes >= n) {
            return Err(BenchError::write(key, "injected failure"));
        }
        self.writes += 1;
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn read(&mut self, key: &str) -> Result<Option<String>, BenchError> {
        self.reads += 1;
        Ok(self.data.get(key).cloned())
    }

    fn close(self: Box<Self>) -> Result<(), BenchError> {
        self.closed.set(true);
        if self.fail_close {
            return Err(BenchError::close("memory", "injected failure"));
        }
        Ok(())
    }
}

/// Default config pointing the embedded backend at a fresh file in a temp directory.
/// The directory must be kept alive for the duration of the test.
pub fn temp_embedded_config(count: usize) -> (TempDir, Config) {
    let dir = TempDir::new().expect("cannot create temp dir");
    let mut config = Config::default();
    config.dataset.count = count;
    config.embedded.path = dir.path().join("kvbench.redb");
    (dir, config)
}

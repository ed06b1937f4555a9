//! Batch execution, verification and timing.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use log::info;

use crate::backend::{self, BackendKind};
use crate::conf::Config;
use crate::core::BenchError;
use crate::dataset::Dataset;

mod executor;
mod harness;
mod verify;

pub use executor::Executor;
pub use harness::Harness;
pub use verify::verify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[value(alias = "w")]
    Write,
    #[value(alias = "r")]
    Read,
    #[value(alias = "rw")]
    WriteRead,
}

impl Mode {
    pub fn writes(&self) -> bool {
        matches!(self, Mode::Write | Mode::WriteRead)
    }

    pub fn reads(&self) -> bool {
        matches!(self, Mode::Read | Mode::WriteRead)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Write => "write",
            Mode::Read => "read",
            Mode::WriteRead => "write-read",
        })
    }
}

/// Operation count and wall-clock time of one batch phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStats {
    pub ops: usize,
    pub elapsed: Duration,
}

impl PhaseStats {
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.ops as f64 / secs
        }
    }
}

impl fmt::Display for PhaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ops in {:?} ({:.0} ops/s)",
            self.ops,
            self.elapsed,
            self.ops_per_sec()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub write: Option<PhaseStats>,
    pub read: Option<PhaseStats>,
}

/// Result of one harness invocation. `elapsed` is set even when the run failed.
#[derive(Debug)]
pub struct RunReport {
    pub backend: &'static str,
    pub mode: Mode,
    pub elapsed: Duration,
    pub outcome: Result<RunStats, BenchError>,
    pub close: Result<(), BenchError>,
}

impl RunReport {
    /// The verdict comes from the batch outcome alone; a close failure does not change it.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn into_result(self) -> Result<RunStats, BenchError> {
        self.outcome
    }
}

/// Generate the configured dataset and run `mode` against the selected backend.
pub fn run(config: &Config, kind: BackendKind, mode: Mode) -> RunReport {
    let dataset = Dataset::from_config(&config.dataset);
    info!("test data count {}", dataset.len());
    Harness::new(&dataset, mode).run(kind.as_str(), || backend::open(kind, config))
}

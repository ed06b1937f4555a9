//! Pluggable storage backends under test.

use clap::ValueEnum;
use log::info;

use crate::conf::Config;
use crate::core::BenchError;

mod embedded;
mod networked;

pub use embedded::EmbeddedBackend;
pub use networked::NetworkedBackend;

/// A key-value store that can be benchmarked one key at a time.
///
/// Implementations own their handle exclusively; the harness holds the
/// only reference for the whole run.
pub trait Backend {
    /// Human-readable name for logs and reports.
    fn name(&self) -> &'static str;

    /// Store `value` under `key`, creating the namespace on first use.
    /// Writing an existing key overwrites it.
    fn write(&mut self, key: &str, value: &str) -> Result<(), BenchError>;

    /// Fetch the value under `key`. An absent key is `Ok(None)`, never an error.
    fn read(&mut self, key: &str) -> Result<Option<String>, BenchError>;

    /// Release the handle. Called once at the end of every run.
    fn close(self: Box<Self>) -> Result<(), BenchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// File-backed redb store.
    #[value(alias = "bolt", alias = "redb")]
    Embedded,
    /// Redis server.
    #[value(alias = "redis")]
    Networked,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Embedded => EmbeddedBackend::NAME,
            BackendKind::Networked => NetworkedBackend::NAME,
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open the selected backend. This is the only place that branches on the kind.
pub fn open(kind: BackendKind, config: &Config) -> Result<Box<dyn Backend>, BenchError> {
    let backend: Box<dyn Backend> = match kind {
        BackendKind::Embedded => Box::new(EmbeddedBackend::open(&config.embedded)?),
        BackendKind::Networked => Box::new(NetworkedBackend::open(&config.networked)?),
    };
    info!("opened {} backend", backend.name());
    Ok(backend)
}

use kvbench::backend::{self, Backend, BackendKind};
use kvbench::bench::{Harness, Mode, RunReport};
use kvbench::conf::Config;
use kvbench::dataset::Dataset;

/// Run `mode` over the configured dataset against a freshly opened backend.
#[allow(dead_code)]
pub fn run_mode(config: &Config, kind: BackendKind, dataset: &Dataset, mode: Mode) -> RunReport {
    Harness::new(dataset, mode).run(kind.as_str(), || backend::open(kind, config))
}

/// Overwrite one stored value behind the harness's back.
#[allow(dead_code)]
pub fn corrupt(config: &Config, kind: BackendKind, key: &str, value: &str) {
    let mut backend: Box<dyn Backend> = backend::open(kind, config).unwrap();
    backend.write(key, value).unwrap();
    backend.close().unwrap();
}

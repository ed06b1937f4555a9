//! Round trips against a real Redis started in a container.
//!
//! These need Docker; run with `cargo test -- --ignored`.

mod common;

use std::time::Duration;

use testcontainers::Container;
use testcontainers::runners::SyncRunner;
use testcontainers_modules::redis::{REDIS_PORT, Redis};

use common::{corrupt, run_mode};
use kvbench::backend::{self, BackendKind};
use kvbench::bench::Mode;
use kvbench::conf::Config;
use kvbench::core::BenchError;
use kvbench::dataset::Dataset;

fn start_redis(count: usize) -> (Container<Redis>, Config) {
    let container = Redis::default().start().unwrap();
    let host = container.get_host().unwrap();
    let port = container.get_host_port_ipv4(REDIS_PORT).unwrap();

    let mut config = Config::default();
    config.dataset.count = count;
    config.networked.url = format!("redis://{}:{}", host, port);
    (container, config)
}

#[test]
#[ignore = "requires docker"]
fn test_hello_world_round_trip() {
    let (_container, config) = start_redis(3);
    let dataset = Dataset::from_config(&config.dataset);

    let report = run_mode(&config, BackendKind::Networked, &dataset, Mode::WriteRead);

    assert!(report.elapsed > Duration::ZERO);
    assert_eq!(report.close, Ok(()));
    assert!(report.is_success());
}

#[test]
#[ignore = "requires docker"]
fn test_corrupted_value_is_reported() {
    let (_container, config) = start_redis(3);
    let dataset = Dataset::from_config(&config.dataset);

    assert!(run_mode(&config, BackendKind::Networked, &dataset, Mode::Write).is_success());
    corrupt(&config, BackendKind::Networked, "hello2", "garbage");

    let report = run_mode(&config, BackendKind::Networked, &dataset, Mode::Read);
    assert_eq!(
        report.into_result(),
        Err(BenchError::Mismatch {
            key: "hello2".to_string(),
            expected: "world2".to_string(),
            actual: "garbage".to_string(),
        })
    );
}

#[test]
#[ignore = "requires docker"]
fn test_missing_key_and_overwrite() {
    let (_container, config) = start_redis(0);
    let mut backend = backend::open(BackendKind::Networked, &config).unwrap();

    assert_eq!(backend.read("hello0"), Ok(None));
    backend.write("hello0", "first").unwrap();
    backend.write("hello0", "second").unwrap();
    assert_eq!(backend.read("hello0"), Ok(Some("second".to_string())));
    backend.close().unwrap();
}

#[test]
fn test_unreachable_server_fails_open() {
    let mut config = Config::default();
    config.dataset.count = 3;
    config.networked.url = "redis://127.0.0.1:1".to_string();
    let dataset = Dataset::from_config(&config.dataset);

    let report = run_mode(&config, BackendKind::Networked, &dataset, Mode::Write);
    assert!(matches!(report.outcome, Err(BenchError::Open { .. })));
}

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use kvbench::bench;
use kvbench::conf::Config;
use kvbench::core::{CliArgs, setup_logging};

fn main() -> ExitCode {
    setup_logging();
    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    info!(args = args; "kvbench started.");

    let mut config = Config::load(args.config.as_deref().map(Path::new))
        .context("loading configuration")?;
    args.apply(&mut config);

    let report = bench::run(&config, args.backend, args.mode);
    info!(
        "{} {} finished in {:?}",
        report.backend, report.mode, report.elapsed
    );

    // Errors from the run were already logged by the harness.
    let Ok(stats) = report.into_result() else {
        return Ok(ExitCode::FAILURE);
    };
    if let Some(phase) = stats.write {
        info!("write: {phase}");
    }
    if let Some(phase) = stats.read {
        info!("read: {phase}");
    }
    info!("end");
    Ok(ExitCode::SUCCESS)
}

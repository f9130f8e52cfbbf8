use crate::engine::StyleEngine;
use crate::registry::{CheckFixture, Sample};
use crate::sink::FindingListener;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Boundary to a black-box analyzer: configured elsewhere, fed a list of
/// files (this harness always submits exactly one), and emitting raw
/// findings through the listener while it runs. Internal analyzer failures
/// are emitted as findings, not returned as errors.
pub trait Analyzer {
    fn process(&mut self, files: &[PathBuf], listener: &mut dyn FindingListener);
}

/// Run one check's analyzer over one fixture sample.
///
/// Loads the fixture's configuration, builds a fresh engine, locates the
/// sample, and processes it with the listener registered. Results are
/// inspected through the listener afterwards. A failure to load the
/// configuration or locate the sample is fatal to this run only; the
/// engine is released on every path when it goes out of scope.
pub fn run_sample(
    fixture: &CheckFixture,
    sample: Sample,
    listener: &mut dyn FindingListener,
) -> Result<()> {
    let config_path = fixture.config_path();
    let config = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read configuration {}", config_path.display()))?;
    let mut engine = StyleEngine::from_config(&config)
        .with_context(|| format!("failed to load configuration {}", config_path.display()))?;

    let target = fixture.sample_path(sample)?;
    debug!(
        "Running check '{}' against {}",
        fixture.name(),
        target.display()
    );
    run_one(&mut engine, target, listener);
    Ok(())
}

/// Drive one analyzer over exactly one file.
fn run_one(analyzer: &mut dyn Analyzer, target: PathBuf, listener: &mut dyn FindingListener) {
    analyzer.process(std::slice::from_ref(&target), listener);
}
